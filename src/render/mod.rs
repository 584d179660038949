//! Rendering of the formatted document to output formats.

mod docx;
mod json;
mod result;
mod text;

pub use docx::{output_filename, to_docx, DocxWriter, DOCX_MIME};
pub use json::{to_json, JsonFormat};
pub use result::{Conversion, ConversionStats};
pub use text::to_text;
