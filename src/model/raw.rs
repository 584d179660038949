//! Extracted text prior to any analysis.

use crate::detect::SourceFormat;
use serde::{Deserialize, Serialize};

/// Ordered text lines pulled out of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    lines: Vec<String>,
    format: SourceFormat,
}

impl RawDocument {
    /// Create a document from already-split lines.
    pub fn new(lines: Vec<String>, format: SourceFormat) -> Self {
        Self { lines, format }
    }

    /// Split text on line breaks (`\n` or `\r\n`).
    pub fn from_text(text: &str, format: SourceFormat) -> Self {
        Self::new(text.lines().map(str::to_string).collect(), format)
    }

    /// All lines, including blank ones.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Format the lines were extracted from.
    pub fn format(&self) -> SourceFormat {
        self.format
    }

    /// Trimmed lines with blank lines dropped, in source order.
    pub fn non_blank_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect()
    }

    /// Whether every line is blank.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|l| l.trim().is_empty())
    }

    /// Full text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Apply `f` to every line, keeping the line count.
    pub fn map_lines(self, f: impl Fn(&str) -> String) -> Self {
        Self {
            lines: self.lines.iter().map(|l| f(l)).collect(),
            format: self.format,
        }
    }
}
