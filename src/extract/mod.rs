//! Text extraction: uploaded bytes in, ordered text lines out.
//!
//! Each supported format has a [`TextExtractor`]. The [`ExtractorRegistry`]
//! dispatches on a declared [`SourceFormat`] or a file extension, and callers
//! can register their own extractors to replace the built-in ones.
//!
//! # Example
//!
//! ```
//! use atsready::extract::ExtractorRegistry;
//! use atsready::SourceFormat;
//!
//! let registry = ExtractorRegistry::with_defaults();
//! let raw = registry.extract(b"Jane Doe\nSkills\n", SourceFormat::Txt).unwrap();
//! assert_eq!(raw.lines(), &["Jane Doe", "Skills"]);
//! ```

mod cleanup;
mod docx;
mod pdf;
mod text;

pub use cleanup::{CleanupOptions, LineCleanup};
pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use text::PlainTextExtractor;

use crate::detect::SourceFormat;
use crate::error::{ExtractionError, Result};
use crate::model::RawDocument;
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for format-specific text extractors.
///
/// Implement this trait to plug in a different PDF or DOCX backend.
pub trait TextExtractor: Send + Sync {
    /// The format this extractor reads.
    fn format(&self) -> SourceFormat;

    /// Get the supported file extensions for this extractor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["pdf"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract text lines from raw bytes.
    fn extract(&self, bytes: &[u8]) -> std::result::Result<RawDocument, ExtractionError>;

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for text extractors.
#[derive(Clone)]
pub struct ExtractorRegistry {
    by_format: HashMap<SourceFormat, Arc<dyn TextExtractor>>,
    by_extension: HashMap<String, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            by_format: HashMap::new(),
            by_extension: HashMap::new(),
        }
    }

    /// Create a registry with the PDF, DOCX and plain-text extractors.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PdfExtractor::new()));
        registry.register(Arc::new(DocxExtractor::new()));
        registry.register(Arc::new(PlainTextExtractor::new()));
        registry
    }

    /// Register an extractor, replacing any previous one for its format
    /// and extensions.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) {
        for ext in extractor.supported_extensions() {
            self.by_extension
                .insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_format.insert(extractor.format(), extractor);
    }

    /// Get the extractor for a format.
    pub fn get(&self, format: SourceFormat) -> Option<Arc<dyn TextExtractor>> {
        self.by_format.get(&format).cloned()
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextExtractor>> {
        self.by_extension.get(&ext.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.by_extension.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.by_extension.keys().map(|s| s.as_str()).collect()
    }

    /// Extract text using the extractor registered for `format`.
    pub fn extract(&self, bytes: &[u8], format: SourceFormat) -> Result<RawDocument> {
        let extractor = self
            .get(format)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(format.to_string()))?;

        log::debug!(
            "extracting {} bytes with {} extractor",
            bytes.len(),
            extractor.name()
        );
        Ok(extractor.extract(bytes)?)
    }

    /// Extract text, choosing the extractor by file extension.
    pub fn extract_by_extension(&self, bytes: &[u8], ext: &str) -> Result<RawDocument> {
        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(ext.to_string()))?;
        Ok(extractor.extract(bytes)?)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
