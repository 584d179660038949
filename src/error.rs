//! Error types for atsready library.

use std::fmt;
use std::io;
use thiserror::Error;

use crate::detect::SourceFormat;

/// Result type alias for atsready operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Reading input or writing output files
    Io,
    /// Turning the uploaded bytes into text lines
    Extraction,
    /// Selecting or loading the ATS profile
    Profile,
    /// Serializing the formatted document
    Rendering,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Io => "io",
            Stage::Extraction => "extraction",
            Stage::Profile => "profile",
            Stage::Rendering => "rendering",
        };
        f.write_str(name)
    }
}

/// Failures while turning an uploaded file into text lines.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No extractor handles the declared format.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The bytes could not be identified as PDF, DOCX or text.
    #[error("Unknown file format: not a PDF, DOCX or UTF-8 text file")]
    UnknownFormat,

    /// The container structure is broken (bad PDF xref, bad zip, missing part).
    #[error("Corrupted {format} container: {reason}")]
    Corrupt {
        /// Format the bytes were declared as
        format: SourceFormat,
        /// What went wrong
        reason: String,
    },

    /// The text payload is not valid in its expected encoding.
    #[error("Decoding error: {0}")]
    Decode(String),

    /// The PDF is encrypted and cannot be read.
    #[error("Document is encrypted")]
    Encrypted,
}

impl ExtractionError {
    pub(crate) fn corrupt(format: SourceFormat, reason: impl fmt::Display) -> Self {
        ExtractionError::Corrupt {
            format,
            reason: reason.to_string(),
        }
    }
}

impl From<lopdf::Error> for ExtractionError {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::Decryption(_) => ExtractionError::Encrypted,
            _ => ExtractionError::corrupt(SourceFormat::Pdf, err),
        }
    }
}

/// Error types that can occur during résumé conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text extraction failed; nothing downstream ran.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Extraction succeeded but produced no non-blank lines.
    #[error("Document contains no text")]
    EmptyDocument,

    /// The requested ATS profile id is not known.
    #[error("Unknown ATS profile: {0}")]
    UnknownProfile(String),

    /// A custom profile definition is invalid.
    #[error("Invalid profile: {0}")]
    Profile(String),

    /// Error while writing the output document.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// The pipeline stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            Error::Io(_) => Stage::Io,
            Error::Extraction(_) | Error::EmptyDocument => Stage::Extraction,
            Error::UnknownProfile(_) | Error::Profile(_) => Stage::Profile,
            Error::Render(_) => Stage::Rendering,
        }
    }

    /// User-facing message naming the failed stage and the reason.
    pub fn describe(&self) -> String {
        format!("{} failed: {}", self.stage(), self)
    }
}
