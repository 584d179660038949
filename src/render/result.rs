//! Conversion result with statistics.

use crate::detect::SourceFormat;
use crate::model::{ClassifiedLine, ContactRecord, FormattedDocument};
use crate::profile::ProfileId;
use serde::{Deserialize, Serialize};

/// Output of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    /// Format the input was read as
    pub source_format: SourceFormat,

    /// Profile used for classification
    pub profile: ProfileId,

    /// Extracted contact fields
    pub contact: ContactRecord,

    /// Classifier output, one entry per non-blank input line
    pub lines: Vec<ClassifiedLine>,

    /// Assembled output document
    pub document: FormattedDocument,

    /// Counters collected along the way
    pub stats: ConversionStats,
}

impl Conversion {
    /// Serialize the document as a DOCX package.
    pub fn to_docx(&self) -> crate::Result<Vec<u8>> {
        super::to_docx(&self.document)
    }

    /// Render the document as plain text.
    pub fn to_text(&self) -> String {
        super::to_text(&self.document)
    }
}

/// Statistics collected during conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Non-blank lines classified
    pub line_count: u32,

    /// Lines classified as section headers
    pub header_count: u32,

    /// Lines classified as body text
    pub body_count: u32,

    /// Date expressions rewritten
    pub dates_normalized: u32,

    /// Canonical sections in the order they appeared (repeats kept)
    pub sections: Vec<String>,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally classifier output.
    pub fn from_lines(lines: &[ClassifiedLine], dates_normalized: u32) -> Self {
        let mut stats = Self {
            dates_normalized,
            ..Self::default()
        };
        for line in lines {
            stats.add_line(line);
        }
        stats
    }

    /// Count one classified line.
    pub fn add_line(&mut self, line: &ClassifiedLine) {
        self.line_count += 1;
        self.word_count += line.text.split_whitespace().count() as u32;
        match &line.canonical_section {
            Some(section) if line.is_header() => {
                self.header_count += 1;
                self.sections.push(section.clone());
            }
            _ => self.body_count += 1,
        }
    }

    /// Whether any section heading was recognized.
    pub fn has_sections(&self) -> bool {
        self.header_count > 0
    }
}
