//! Output document model.

use serde::{Deserialize, Serialize};

/// Single-column document ready to be written as DOCX.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedDocument {
    /// Global font settings
    pub style: DocumentStyle,

    /// Paragraphs in reading order
    pub paragraphs: Vec<Paragraph>,
}

impl FormattedDocument {
    /// Create an empty document with the given style.
    pub fn new(style: DocumentStyle) -> Self {
        Self {
            style,
            paragraphs: Vec::new(),
        }
    }

    /// Append a paragraph.
    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Number of paragraphs.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Paragraph texts joined with newlines.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for FormattedDocument {
    fn default() -> Self {
        Self::new(DocumentStyle::default())
    }
}

/// Document-wide font.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentStyle {
    /// Font family name
    pub font_family: String,

    /// Font size in points
    pub font_size: f32,
}

impl DocumentStyle {
    /// Calibri 11pt, the safest choice for ATS parsers.
    pub fn ats_safe() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            font_size: 11.0,
        }
    }
}

impl Default for DocumentStyle {
    fn default() -> Self {
        Self::ats_safe()
    }
}

/// What produced a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParagraphKind {
    /// Combined name/email/phone line
    Contact,
    /// Canonical section heading
    Section,
    /// Body text
    Body,
}

/// One output paragraph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text
    pub text: String,

    /// Source of the paragraph
    pub kind: ParagraphKind,

    /// Whether the whole paragraph is bold
    pub bold: bool,

    /// Space before paragraph in points
    pub space_before: Option<f32>,

    /// Space after paragraph in points
    pub space_after: Option<f32>,

    /// Line spacing multiplier (1.0 = single)
    pub line_spacing: Option<f32>,
}

impl Paragraph {
    /// Plain paragraph with no spacing overrides.
    pub fn new(text: impl Into<String>, kind: ParagraphKind) -> Self {
        Self {
            text: text.into(),
            kind,
            bold: false,
            space_before: None,
            space_after: None,
            line_spacing: None,
        }
    }

    /// Make the paragraph bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set space before in points.
    pub fn with_space_before(mut self, points: f32) -> Self {
        self.space_before = Some(points);
        self
    }

    /// Set space after in points.
    pub fn with_space_after(mut self, points: f32) -> Self {
        self.space_after = Some(points);
        self
    }

    /// Set the line spacing multiplier.
    pub fn with_line_spacing(mut self, multiplier: f32) -> Self {
        self.line_spacing = Some(multiplier);
        self
    }
}
