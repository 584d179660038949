//! DOCX writer built on `docx-rs`.
//!
//! One Word paragraph per [`Paragraph`], a single run each, the global font
//! set through document defaults and a US Letter page with one-inch margins.

use std::io::Cursor;
use std::path::Path;

use chrono::{DateTime, Utc};
use docx_rs::{Docx, LineSpacing, LineSpacingType, PageMargin, Run, RunFonts};

use crate::error::{Error, Result};
use crate::model::{FormattedDocument, Paragraph};
use crate::profile::ProfileId;

/// MIME type of the generated package.
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Download name for a converted résumé: `<Profile>_Ready_<stem>.docx`.
///
/// ```
/// use atsready::profile::ProfileId;
/// use atsready::render::output_filename;
///
/// assert_eq!(
///     output_filename(ProfileId::Workday, "uploads/jane_cv.pdf"),
///     "Workday_Ready_jane_cv.docx"
/// );
/// ```
pub fn output_filename(profile: ProfileId, original: impl AsRef<Path>) -> String {
    let stem = original
        .as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("resume");
    format!("{}_Ready_{}.docx", profile.display_name(), stem)
}

/// Serialize `doc` with default package properties.
pub fn to_docx(doc: &FormattedDocument) -> Result<Vec<u8>> {
    DocxWriter::new().write(doc)
}

/// Writes a [`FormattedDocument`] as a `.docx` package.
#[derive(Debug, Clone)]
pub struct DocxWriter {
    created: DateTime<Utc>,
}

impl DocxWriter {
    /// Create a writer stamped with the current time.
    pub fn new() -> Self {
        Self {
            created: Utc::now(),
        }
    }

    /// Set the creation timestamp stored in core properties.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Build the package in memory.
    pub fn write(&self, doc: &FormattedDocument) -> Result<Vec<u8>> {
        let stamp = self.created.format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let font = doc.style.font_family.as_str();

        // US Letter, one-inch margins, in twips
        let mut docx = Docx::new()
            .page_size(12240, 15840)
            .page_margin(
                PageMargin::new()
                    .top(1440)
                    .bottom(1440)
                    .left(1440)
                    .right(1440),
            )
            .default_fonts(
                RunFonts::new()
                    .ascii(font)
                    .hi_ansi(font)
                    .east_asia(font)
                    .cs(font),
            )
            .default_size(half_points(doc.style.font_size))
            .created_at(&stamp)
            .updated_at(&stamp);

        for paragraph in &doc.paragraphs {
            docx = docx.add_paragraph(word_paragraph(paragraph));
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(|e| Error::Render(format!("packing docx: {}", e)))?;

        let bytes = cursor.into_inner();
        log::debug!(
            "wrote docx package: {} paragraphs, {} bytes",
            doc.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Points to twips (1/20 pt).
fn twips(points: f32) -> u32 {
    (points * 20.0).round().max(0.0) as u32
}

/// Points to half-points, the unit of `w:sz`.
fn half_points(points: f32) -> usize {
    (points * 2.0).round().max(1.0) as usize
}

/// Line spacing multiplier to 240ths of a line.
fn line_240ths(multiplier: f32) -> u32 {
    (multiplier * 240.0).round().max(1.0) as u32
}

/// Text with every character XML 1.0 forbids removed.
fn xml_safe(text: &str) -> String {
    text.chars()
        .filter(|c| match *c {
            '\t' | '\n' | '\r' => true,
            '\u{FFFE}' | '\u{FFFF}' => false,
            c => !c.is_ascii_control() || c == '\u{7F}',
        })
        .collect()
}

fn word_paragraph(paragraph: &Paragraph) -> docx_rs::Paragraph {
    let mut run = Run::new();
    for (i, segment) in xml_safe(&paragraph.text).split('\t').enumerate() {
        if i > 0 {
            run = run.add_tab();
        }
        if !segment.is_empty() {
            run = run.add_text(segment);
        }
    }
    if paragraph.bold {
        run = run.bold();
    }

    let mut out = docx_rs::Paragraph::new().add_run(run);

    if paragraph.space_before.is_some()
        || paragraph.space_after.is_some()
        || paragraph.line_spacing.is_some()
    {
        let mut spacing = LineSpacing::new();
        if let Some(before) = paragraph.space_before {
            spacing = spacing.before(twips(before) as _);
        }
        if let Some(after) = paragraph.space_after {
            spacing = spacing.after(twips(after) as _);
        }
        if let Some(line) = paragraph.line_spacing {
            spacing = spacing
                .line(line_240ths(line) as _)
                .line_rule(LineSpacingType::Auto);
        }
        out = out.line_spacing(spacing);
    }

    out
}
