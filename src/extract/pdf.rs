//! PDF text extractor backed by lopdf.

use lopdf::Document as LopdfDocument;

use crate::detect::{is_pdf_bytes, SourceFormat};
use crate::error::ExtractionError;
use crate::model::RawDocument;

use super::TextExtractor;

/// Extracts page text in page order.
///
/// Pages whose text is empty, or whose content stream cannot be decoded,
/// contribute no lines.
#[derive(Debug, Clone, Default)]
pub struct PdfExtractor {
    _private: (),
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn load(bytes: &[u8]) -> Result<LopdfDocument, ExtractionError> {
        if !is_pdf_bytes(bytes) {
            return Err(ExtractionError::corrupt(
                SourceFormat::Pdf,
                "missing %PDF- header",
            ));
        }

        let doc = LopdfDocument::load_mem(bytes)?;
        if doc.is_encrypted() {
            return Err(ExtractionError::Encrypted);
        }
        Ok(doc)
    }
}

impl TextExtractor for PdfExtractor {
    fn format(&self) -> SourceFormat {
        SourceFormat::Pdf
    }

    fn supported_extensions(&self) -> &[&str] {
        &["pdf"]
    }

    fn name(&self) -> &str {
        "pdf"
    }

    fn extract(&self, bytes: &[u8]) -> Result<RawDocument, ExtractionError> {
        let doc = Self::load(bytes)?;
        let pages = doc.get_pages();
        let mut lines = Vec::new();

        for page_num in pages.keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(text) if !text.trim().is_empty() => {
                    lines.extend(text.lines().map(str::to_string));
                }
                Ok(_) => log::debug!("page {} has no extractable text", page_num),
                Err(e) => log::warn!("Failed to extract text from page {}: {}", page_num, e),
            }
        }

        log::debug!("extracted {} lines from {} pages", lines.len(), pages.len());
        Ok(RawDocument::new(lines, SourceFormat::Pdf))
    }
}
