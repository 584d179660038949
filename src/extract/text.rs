//! Plain-text extractor.

use crate::detect::SourceFormat;
use crate::error::ExtractionError;
use crate::model::RawDocument;

use super::TextExtractor;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decodes UTF-8 text and splits it on line breaks.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor {
    _private: (),
}

impl PlainTextExtractor {
    /// Create a new plain-text extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn format(&self) -> SourceFormat {
        SourceFormat::Txt
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text", "md"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn extract(&self, bytes: &[u8]) -> Result<RawDocument, ExtractionError> {
        let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let text = std::str::from_utf8(body).map_err(|e| {
            ExtractionError::Decode(format!(
                "invalid UTF-8 at byte {}",
                e.valid_up_to() + (bytes.len() - body.len())
            ))
        })?;
        Ok(RawDocument::from_text(text, SourceFormat::Txt))
    }
}
