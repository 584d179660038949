//! Data model for the résumé conversion pipeline.
//!
//! Types flow in one direction: [`RawDocument`] out of the extractors,
//! [`ContactRecord`] and [`ClassifiedLine`] out of the analysis stages,
//! [`FormattedDocument`] out of the assembler and into the renderers.

mod contact;
mod document;
mod line;
mod raw;

pub use contact::{ContactRecord, UNKNOWN};
pub use document::{DocumentStyle, FormattedDocument, Paragraph, ParagraphKind};
pub use line::{ClassifiedLine, LineRole};
pub use raw::RawDocument;
