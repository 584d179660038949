//! DOCX text extractor: one line per `<w:p>` paragraph.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::result::ZipError;

use crate::detect::SourceFormat;
use crate::error::ExtractionError;
use crate::model::RawDocument;

use super::TextExtractor;

/// Main document part inside the package.
const DOCUMENT_PART: &str = "word/document.xml";

/// Reads paragraph text from `word/document.xml`.
#[derive(Debug, Clone, Default)]
pub struct DocxExtractor {
    _private: (),
}

impl DocxExtractor {
    /// Create a new DOCX extractor.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextExtractor for DocxExtractor {
    fn format(&self) -> SourceFormat {
        SourceFormat::Docx
    }

    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn extract(&self, bytes: &[u8]) -> Result<RawDocument, ExtractionError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| {
            ExtractionError::corrupt(SourceFormat::Docx, format!("not a zip archive: {}", e))
        })?;

        let mut xml = String::new();
        {
            let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| match e {
                ZipError::FileNotFound => ExtractionError::corrupt(
                    SourceFormat::Docx,
                    format!("missing {}", DOCUMENT_PART),
                ),
                other => ExtractionError::corrupt(SourceFormat::Docx, other),
            })?;
            part.read_to_string(&mut xml)
                .map_err(|e| ExtractionError::Decode(format!("{}: {}", DOCUMENT_PART, e)))?;
        }

        let paragraphs = paragraphs_from_xml(&xml)?;
        log::debug!("extracted {} paragraphs from docx", paragraphs.len());
        Ok(RawDocument::new(paragraphs, SourceFormat::Docx))
    }
}

/// Collect paragraph texts from WordprocessingML markup in document order.
///
/// Runs are concatenated, `<w:tab/>` becomes a tab and `<w:br/>`/`<w:cr/>`
/// become a space so each paragraph stays on one line. Paragraphs nested in
/// text boxes follow their host paragraph.
pub(crate) fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut paragraphs = Vec::new();
    let mut open: Vec<OpenParagraph> = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"w:p" => open.push(OpenParagraph::default()),
                b"w:t" => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:p" => match open.last_mut() {
                    Some(host) => host.nested.push(String::new()),
                    None => paragraphs.push(String::new()),
                },
                b"w:tab" => {
                    if let Some(current) = open.last_mut() {
                        current.text.push('\t');
                    }
                }
                b"w:br" | b"w:cr" => {
                    if let Some(current) = open.last_mut() {
                        current.text.push(' ');
                    }
                }
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(done) = open.pop() {
                        let target = match open.last_mut() {
                            Some(host) => &mut host.nested,
                            None => &mut paragraphs,
                        };
                        target.push(done.text);
                        target.extend(done.nested);
                    }
                }
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractionError::Decode(format!("{}: {}", DOCUMENT_PART, e)))?;
                if let Some(current) = open.last_mut() {
                    current.text.push_str(&text);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(ExtractionError::corrupt(
                    SourceFormat::Docx,
                    format!(
                        "malformed {} at byte {}: {}",
                        DOCUMENT_PART,
                        reader.buffer_position(),
                        e
                    ),
                ))
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

/// A `<w:p>` still being read, with the finished paragraphs of any text
/// boxes inside it.
#[derive(Default)]
struct OpenParagraph {
    text: String,
    nested: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>
<w:p><w:r><w:t>Jane</w:t></w:r><w:r><w:t xml:space="preserve"> Doe</w:t></w:r></w:p>
<w:p/>
<w:p><w:r><w:t>R&amp;D</w:t><w:tab/><w:t>2021</w:t><w:br/><w:t>Remote</w:t></w:r></w:p>
<w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Experience</w:t></w:r></w:p>
</w:body>
</w:document>"#;

    #[test]
    fn test_paragraphs_from_xml() {
        let paragraphs = paragraphs_from_xml(BODY).unwrap();
        assert_eq!(
            paragraphs,
            vec!["Jane Doe", "", "R&D\t2021 Remote", "Experience"]
        );
    }

    #[test]
    fn test_text_box_follows_host_paragraph() {
        let xml = r#"<w:document><w:body>
<w:p><w:r><w:t>Before</w:t></w:r></w:p>
<w:p><w:r><w:t>Host</w:t></w:r><w:r><w:pict><w:txbxContent>
<w:p><w:r><w:t>Boxed one</w:t></w:r></w:p><w:p/>
<w:p><w:r><w:t>Boxed two</w:t></w:r></w:p>
</w:txbxContent></w:pict></w:r><w:r><w:t> tail</w:t></w:r></w:p>
<w:p><w:r><w:t>After</w:t></w:r></w:p>
</w:body></w:document>"#;
        let paragraphs = paragraphs_from_xml(xml).unwrap();
        assert_eq!(
            paragraphs,
            vec!["Before", "Host tail", "Boxed one", "", "Boxed two", "After"]
        );
    }

    #[test]
    fn test_malformed_xml() {
        let result = paragraphs_from_xml("<w:p><w:r><w:t>oops</w:r></w:p>");
        assert!(matches!(
            result,
            Err(ExtractionError::Corrupt {
                format: SourceFormat::Docx,
                ..
            })
        ));
    }

    #[test]
    fn test_not_a_zip() {
        let result = DocxExtractor::new().extract(b"PK\x03\x04garbage");
        assert!(matches!(result, Err(ExtractionError::Corrupt { .. })));
    }
}
