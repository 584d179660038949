//! Input format detection.

use crate::error::{Error, ExtractionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Format of an uploaded résumé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word-processing document
    Docx,
    /// Plain UTF-8 text
    Txt,
}

impl SourceFormat {
    /// All supported formats.
    pub const ALL: [SourceFormat; 3] = [SourceFormat::Pdf, SourceFormat::Docx, SourceFormat::Txt];

    /// Lowercase tag for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Pdf => "pdf",
            SourceFormat::Docx => "docx",
            SourceFormat::Txt => "txt",
        }
    }

    /// Map a file extension (without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(SourceFormat::Pdf),
            "docx" => Some(SourceFormat::Docx),
            "txt" | "text" | "md" => Some(SourceFormat::Txt),
            _ => None,
        }
    }

    /// Map a path's extension to a format.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s.trim())
            .ok_or_else(|| ExtractionError::UnsupportedFormat(s.to_string()).into())
    }
}

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// Local file header signature that starts every zip (and so every DOCX).
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Detect the format of an upload from its leading bytes.
///
/// # Returns
/// * `Ok(SourceFormat)` for PDF or zip magic, or for any valid UTF-8 payload
/// * `Err(ExtractionError::UnknownFormat)` otherwise, including empty input
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SourceFormat> {
    if data.is_empty() {
        return Err(ExtractionError::UnknownFormat.into());
    }

    if data.starts_with(PDF_MAGIC) {
        return Ok(SourceFormat::Pdf);
    }

    if data.starts_with(ZIP_MAGIC) {
        return Ok(SourceFormat::Docx);
    }

    let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    if std::str::from_utf8(body).is_ok() {
        return Ok(SourceFormat::Txt);
    }

    Err(ExtractionError::UnknownFormat.into())
}

/// Detect the format of a file, preferring its extension and falling back
/// to sniffing its contents.
///
/// # Example
/// ```no_run
/// use atsready::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("resume.pdf").unwrap();
/// println!("format: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let path = path.as_ref();
    if let Some(format) = SourceFormat::from_path(path) {
        return Ok(format);
    }
    let data = std::fs::read(path)?;
    detect_format_from_bytes(&data)
}

/// Check if bytes start with the PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}
