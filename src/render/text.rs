//! Plain text rendering of the formatted document.

use crate::model::{FormattedDocument, ParagraphKind};

/// Render paragraphs one per line.
///
/// Section headings after the first paragraph are preceded by a blank line so
/// the output stays readable in a terminal.
pub fn to_text(doc: &FormattedDocument) -> String {
    let mut output = String::new();

    for (i, paragraph) in doc.paragraphs.iter().enumerate() {
        if i > 0 {
            if paragraph.kind == ParagraphKind::Section {
                output.push('\n');
            }
            output.push('\n');
        }
        output.push_str(&paragraph.text);
    }

    output
}
