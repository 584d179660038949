//! Document assembly: contact record + classified lines → formatted document.
//!
//! Pure rendering. No text is inspected here beyond what the classifier
//! already decided.

use crate::model::{
    ClassifiedLine, ContactRecord, DocumentStyle, FormattedDocument, LineRole, Paragraph,
    ParagraphKind,
};

/// Space after the contact line, in points.
pub const CONTACT_SPACE_AFTER: f32 = 12.0;
/// Space before a section heading, in points.
pub const SECTION_SPACE_BEFORE: f32 = 12.0;
/// Space after a section heading, in points.
pub const SECTION_SPACE_AFTER: f32 = 6.0;
/// Line spacing of body paragraphs.
pub const BODY_LINE_SPACING: f32 = 1.0;

/// Builds the single-column output document.
#[derive(Debug, Clone, Default)]
pub struct DocumentAssembler {
    style: DocumentStyle,
}

impl DocumentAssembler {
    /// Create an assembler using the ATS-safe default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different global style.
    pub fn with_style(mut self, style: DocumentStyle) -> Self {
        self.style = style;
        self
    }

    /// Emit one contact paragraph followed by one paragraph per line.
    pub fn assemble(&self, contact: &ContactRecord, lines: &[ClassifiedLine]) -> FormattedDocument {
        let mut doc = FormattedDocument::new(self.style.clone());
        doc.paragraphs.reserve(lines.len() + 1);

        doc.push(
            Paragraph::new(contact.header_line(), ParagraphKind::Contact)
                .bold()
                .with_space_after(CONTACT_SPACE_AFTER),
        );

        for line in lines {
            doc.push(render_line(line));
        }

        doc
    }
}

fn render_line(line: &ClassifiedLine) -> Paragraph {
    match (line.role, line.canonical_section.as_deref()) {
        (LineRole::Header, Some(section)) => {
            Paragraph::new(section.to_uppercase(), ParagraphKind::Section)
                .bold()
                .with_space_before(SECTION_SPACE_BEFORE)
                .with_space_after(SECTION_SPACE_AFTER)
        }
        // A header with no section name keeps its own text.
        (LineRole::Header, None) => Paragraph::new(line.text.to_uppercase(), ParagraphKind::Section)
            .bold()
            .with_space_before(SECTION_SPACE_BEFORE)
            .with_space_after(SECTION_SPACE_AFTER),
        (LineRole::Body, _) => Paragraph::new(line.text.clone(), ParagraphKind::Body)
            .with_line_spacing(BODY_LINE_SPACING),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact() -> ContactRecord {
        ContactRecord::new(
            Some("Jane Doe".into()),
            Some("jane@example.com".into()),
            Some("555-123-4567".into()),
        )
    }

    #[test]
    fn test_paragraph_count() {
        let lines = vec![
            ClassifiedLine::header("Work History", "EXPERIENCE"),
            ClassifiedLine::body("Acme, 01/2020 - 03/2023"),
            ClassifiedLine::body("Shipped things"),
        ];
        let doc = DocumentAssembler::new().assemble(&contact(), &lines);
        assert_eq!(doc.len(), lines.len() + 1);
    }

    #[test]
    fn test_contact_paragraph() {
        let doc = DocumentAssembler::new().assemble(&ContactRecord::unknown(), &[]);
        assert_eq!(doc.len(), 1);
        let p = &doc.paragraphs[0];
        assert_eq!(p.text, "Unknown | Unknown | Unknown");
        assert_eq!(p.kind, ParagraphKind::Contact);
        assert!(p.bold);
        assert_eq!(p.space_after, Some(CONTACT_SPACE_AFTER));
    }

    #[test]
    fn test_section_heading_uses_canonical_name() {
        let lines = vec![ClassifiedLine::header("Work History", "experience")];
        let doc = DocumentAssembler::new().assemble(&contact(), &lines);
        let p = &doc.paragraphs[1];
        assert_eq!(p.text, "EXPERIENCE");
        assert!(p.bold);
        assert_eq!(p.space_before, Some(SECTION_SPACE_BEFORE));
    }

    #[test]
    fn test_body_is_plain() {
        let lines = vec![ClassifiedLine::body("Led migration to Rust")];
        let doc = DocumentAssembler::new().assemble(&contact(), &lines);
        let p = &doc.paragraphs[1];
        assert_eq!(p.text, "Led migration to Rust");
        assert!(!p.bold);
        assert_eq!(p.line_spacing, Some(BODY_LINE_SPACING));
        assert_eq!(p.space_before, None);
    }

    #[test]
    fn test_custom_style() {
        let style = DocumentStyle {
            font_family: "Arial".into(),
            font_size: 10.5,
        };
        let doc = DocumentAssembler::new()
            .with_style(style.clone())
            .assemble(&contact(), &[]);
        assert_eq!(doc.style, style);
    }
}
