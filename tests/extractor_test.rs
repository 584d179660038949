//! Integration tests for the extractor registry.

use std::sync::Arc;

use atsready::error::ExtractionError;
use atsready::extract::{DocxExtractor, ExtractorRegistry, PdfExtractor, TextExtractor};
use atsready::model::{FormattedDocument, Paragraph, ParagraphKind, RawDocument};
use atsready::render::to_docx;
use atsready::{Error, SourceFormat};

/// Mock extractor for testing.
struct MockExtractor {
    format: SourceFormat,
    extensions: Vec<&'static str>,
    name: &'static str,
}

impl MockExtractor {
    fn new(format: SourceFormat, extensions: Vec<&'static str>, name: &'static str) -> Self {
        Self {
            format,
            extensions,
            name,
        }
    }
}

impl TextExtractor for MockExtractor {
    fn format(&self) -> SourceFormat {
        self.format
    }

    fn supported_extensions(&self) -> &[&str] {
        &self.extensions
    }

    fn name(&self) -> &str {
        self.name
    }

    fn extract(&self, bytes: &[u8]) -> Result<RawDocument, ExtractionError> {
        Ok(RawDocument::new(
            vec![format!("Extracted {} bytes by {}", bytes.len(), self.name)],
            self.format,
        ))
    }
}

#[test]
fn test_registry_new() {
    let registry = ExtractorRegistry::new();

    // Empty registry should support nothing
    assert!(!registry.supports("pdf"));
    assert!(!registry.supports("txt"));
    assert!(registry.get(SourceFormat::Docx).is_none());
}

#[test]
fn test_registry_with_defaults() {
    let registry = ExtractorRegistry::with_defaults();

    assert!(registry.supports("pdf"));
    assert!(registry.supports("PDF")); // Case insensitive
    assert!(registry.supports("docx"));
    assert!(registry.supports("md"));
    assert!(!registry.supports("rtf"));

    let mut extensions = registry.supported_extensions();
    extensions.sort_unstable();
    assert_eq!(extensions, vec!["docx", "md", "pdf", "text", "txt"]);
}

#[test]
fn test_registry_register_replaces() {
    let mut registry = ExtractorRegistry::with_defaults();
    registry.register(Arc::new(MockExtractor::new(
        SourceFormat::Pdf,
        vec!["pdf"],
        "mock-pdf",
    )));

    let extractor = registry.get(SourceFormat::Pdf).unwrap();
    assert_eq!(extractor.name(), "mock-pdf");

    let raw = registry.extract(b"not really a pdf", SourceFormat::Pdf).unwrap();
    assert_eq!(raw.lines(), &["Extracted 16 bytes by mock-pdf"]);
}

#[test]
fn test_registry_extract_by_extension() {
    let mut registry = ExtractorRegistry::new();
    registry.register(Arc::new(MockExtractor::new(
        SourceFormat::Txt,
        vec!["txt", "text"],
        "mock-text",
    )));

    let raw = registry.extract_by_extension(b"abc", "TEXT").unwrap();
    assert_eq!(raw.format(), SourceFormat::Txt);

    let err = registry.extract_by_extension(b"abc", "rtf").unwrap_err();
    assert!(matches!(
        err,
        Error::Extraction(ExtractionError::UnsupportedFormat(ref ext)) if ext == "rtf"
    ));
}

#[test]
fn test_registry_missing_format() {
    let registry = ExtractorRegistry::new();
    let err = registry.extract(b"%PDF-1.4", SourceFormat::Pdf).unwrap_err();
    assert!(matches!(
        err,
        Error::Extraction(ExtractionError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_docx_extractor_reads_written_package() {
    let mut doc = FormattedDocument::default();
    doc.push(Paragraph::new("Jane Doe | jane@example.com | Unknown", ParagraphKind::Contact).bold());
    doc.push(Paragraph::new("SKILLS", ParagraphKind::Section).bold());
    doc.push(Paragraph::new("Rust & C++\t<systems>", ParagraphKind::Body));

    let bytes = to_docx(&doc).unwrap();
    let raw = DocxExtractor::new().extract(&bytes).unwrap();

    assert_eq!(raw.format(), SourceFormat::Docx);
    assert_eq!(
        raw.lines(),
        &[
            "Jane Doe | jane@example.com | Unknown",
            "SKILLS",
            "Rust & C++\t<systems>",
        ]
    );
}

#[test]
fn test_pdf_extractor_rejects_docx_bytes() {
    let bytes = to_docx(&FormattedDocument::default()).unwrap();
    let err = PdfExtractor::new().extract(&bytes).unwrap_err();
    assert!(matches!(
        err,
        ExtractionError::Corrupt {
            format: SourceFormat::Pdf,
            ..
        }
    ));
}
