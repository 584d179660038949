//! # atsready
//!
//! Restructures résumés into single-column documents that applicant tracking
//! systems (ATS) parse cleanly.
//!
//! The pipeline extracts text from a PDF, DOCX or plain-text résumé, pulls
//! out the candidate's contact details, rewrites month/year dates to
//! `MM/YYYY`, labels section headings using the vocabulary of a target ATS
//! and assembles a plain `.docx` with one bold heading per section.
//!
//! ## Quick Start
//!
//! ```no_run
//! use atsready::{convert_file_with_profile, render, ProfileId};
//!
//! fn main() -> atsready::Result<()> {
//!     let conversion = convert_file_with_profile("resume.pdf", ProfileId::Workday)?;
//!
//!     let name = render::output_filename(ProfileId::Workday, "resume.pdf");
//!     std::fs::write(name, conversion.to_docx()?)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Input formats**: PDF (`lopdf`), DOCX (`zip` + `quick-xml`), plain text
//! - **ATS profiles**: Workday, Lever, Ashby and a generic fallback, or a
//!   custom profile loaded from JSON
//! - **Pluggable name recognition** through [`contact::NameRecognizer`]
//! - **Parallel batches** with Rayon
//! - **Async file loading** behind the `async` feature

pub mod assemble;
pub mod classify;
pub mod contact;
pub mod dates;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod pipeline;
pub mod profile;
pub mod render;

// Re-export commonly used types
pub use contact::{ContactExtractor, NameRecognizer};
pub use detect::{detect_format_from_bytes, detect_format_from_path, SourceFormat};
pub use error::{Error, ExtractionError, Result, Stage};
pub use extract::{CleanupOptions, ExtractorRegistry, TextExtractor};
pub use model::{
    ClassifiedLine, ContactRecord, DocumentStyle, FormattedDocument, LineRole, Paragraph,
    ParagraphKind, RawDocument,
};
pub use pipeline::{ConvertOptions, Pipeline};
pub use profile::{AtsProfile, ProfileId, SectionVocabulary};
pub use render::{Conversion, ConversionStats, JsonFormat, DOCX_MIME};

use std::path::Path;
use std::sync::Arc;

/// Convert an in-memory résumé with the generic profile.
///
/// The format is sniffed from the bytes.
///
/// # Example
///
/// ```
/// use atsready::convert_bytes;
///
/// let conversion = convert_bytes(b"Jane Doe\nSkills\nRust, SQL").unwrap();
/// assert_eq!(conversion.stats.sections, vec!["SKILLS"]);
/// ```
pub fn convert_bytes(data: &[u8]) -> Result<Conversion> {
    Pipeline::default().convert_bytes(data, None)
}

/// Convert a résumé file with the generic profile.
///
/// # Example
///
/// ```no_run
/// use atsready::convert_file;
///
/// let conversion = convert_file("resume.docx").unwrap();
/// println!("{}", conversion.to_text());
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<Conversion> {
    Pipeline::default().convert_file(path)
}

/// Convert a résumé file for a built-in ATS profile.
pub fn convert_file_with_profile<P: AsRef<Path>>(path: P, profile: ProfileId) -> Result<Conversion> {
    AtsReady::new().with_profile(profile).convert_file(path)
}

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```no_run
/// use atsready::{AtsReady, ProfileId};
///
/// let docx = AtsReady::new()
///     .with_profile(ProfileId::Lever)
///     .without_cleanup()
///     .convert_file("resume.pdf")?
///     .to_docx()?;
/// # Ok::<(), atsready::Error>(())
/// ```
pub struct AtsReady {
    options: ConvertOptions,
}

impl AtsReady {
    /// Create a new builder (generic profile, standard cleanup).
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Use a built-in profile.
    pub fn with_profile(mut self, id: ProfileId) -> Self {
        self.options.profile = AtsProfile::builtin(id);
        self
    }

    /// Use a custom profile.
    pub fn with_custom_profile(mut self, profile: AtsProfile) -> Self {
        self.options.profile = profile;
        self
    }

    /// Load and use a custom profile from JSON.
    pub fn with_profile_json(self, json: &str) -> Result<Self> {
        let profile = AtsProfile::from_json(json)?;
        Ok(self.with_custom_profile(profile))
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.options.cleanup = cleanup;
        self
    }

    /// Skip line cleanup.
    pub fn without_cleanup(mut self) -> Self {
        self.options = self.options.without_cleanup();
        self
    }

    /// Use a person-name recognizer for the contact line.
    pub fn with_recognizer(mut self, recognizer: Arc<dyn NameRecognizer>) -> Self {
        self.options = self.options.with_recognizer(recognizer);
        self
    }

    /// Set the output font.
    pub fn with_style(mut self, style: DocumentStyle) -> Self {
        self.options.style = style;
        self
    }

    /// Build a reusable pipeline.
    pub fn build(self) -> Pipeline {
        Pipeline::new(self.options)
    }

    /// Convert bytes, sniffing the format.
    pub fn convert_bytes(self, data: &[u8]) -> Result<Conversion> {
        self.build().convert_bytes(data, None)
    }

    /// Convert a file.
    pub fn convert_file<P: AsRef<Path>>(self, path: P) -> Result<Conversion> {
        self.build().convert_file(path)
    }
}

impl Default for AtsReady {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl NameRecognizer for Named {
        fn first_person(&self, _text: &str) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[test]
    fn test_builder_default() {
        let builder = AtsReady::default();
        assert_eq!(builder.options.profile.id, ProfileId::Generic);
        assert!(builder.options.cleanup.is_enabled());
        assert!(builder.options.recognizer.is_none());
    }

    #[test]
    fn test_builder_chained() {
        let builder = AtsReady::new()
            .with_profile(ProfileId::Ashby)
            .without_cleanup()
            .with_recognizer(Arc::new(Named("J. Doe")));

        assert_eq!(builder.options.profile.id, ProfileId::Ashby);
        assert!(!builder.options.cleanup.is_enabled());
        assert!(builder.options.recognizer.is_some());
    }

    #[test]
    fn test_builder_recognizer_used() {
        let conversion = AtsReady::new()
            .with_recognizer(Arc::new(Named("Jane Q. Doe")))
            .convert_bytes(b"Curriculum Vitae\njane@example.com")
            .unwrap();
        assert_eq!(conversion.contact.name, "Jane Q. Doe");
    }

    #[test]
    fn test_builder_profile_json() {
        let json = r#"{
            "id": "generic",
            "max_header_len": 20,
            "sections": [{"name": "Publications", "synonyms": ["papers"]}]
        }"#;
        let conversion = AtsReady::new()
            .with_profile_json(json)
            .unwrap()
            .convert_bytes(b"Jane Doe\nSelected Papers\nExperience")
            .unwrap();

        assert!(conversion.lines[1].is_header());
        assert_eq!(conversion.lines[1].canonical_section.as_deref(), Some("PUBLICATIONS"));
        assert!(!conversion.lines[2].is_header());
    }

    #[test]
    fn test_builder_profile_json_invalid() {
        let result = AtsReady::new().with_profile_json("{ not json");
        assert!(matches!(result, Err(Error::Profile(_))));
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_convert_bytes_empty_data() {
        let result = convert_bytes(&[]);
        assert!(matches!(
            result,
            Err(Error::Extraction(ExtractionError::UnknownFormat))
        ));
    }

    #[test]
    fn test_convert_bytes_blank_text() {
        let result = convert_bytes(b"   \n\n");
        assert!(matches!(result, Err(Error::EmptyDocument)));
    }

    #[test]
    fn test_convert_bytes_fake_pdf() {
        let err = convert_bytes(b"%PDF-1.7 truncated").unwrap_err();
        assert_eq!(err.stage(), Stage::Extraction);
    }

    #[test]
    fn test_convert_missing_file() {
        let err = convert_file("/definitely/not/here.pdf").unwrap_err();
        assert_eq!(err.stage(), Stage::Io);
    }

    // ==================== Output Tests ====================

    #[test]
    fn test_conversion_outputs() {
        let conversion = convert_bytes(b"Jane Doe\nExperience\nAcme 3/21").unwrap();
        assert_eq!(
            conversion.to_text(),
            "Jane Doe | Unknown | Unknown\nJane Doe\n\nEXPERIENCE\nAcme 03/2021"
        );

        let docx = conversion.to_docx().unwrap();
        assert!(docx.starts_with(b"PK\x03\x04"));

        let json = render::to_json(&conversion, JsonFormat::Compact).unwrap();
        assert!(json.contains("\"source_format\":\"txt\""));
        assert!(json.contains("\"profile\":\"generic\""));
    }
}
