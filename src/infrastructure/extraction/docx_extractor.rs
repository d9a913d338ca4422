use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentFormat};

use super::text_sanitizer::sanitize_extracted_text;

/// Parses the zipped XML package of a DOCX file and concatenates paragraph
/// text in document order. Table cells hold ordinary paragraphs, so their
/// text is picked up by the same traversal.
#[derive(Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }

    fn document_xml(data: &[u8]) -> Result<String, ExtractionError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            ExtractionError::Malformed(format!("not a valid DOCX package: {e}"))
        })?;

        let mut entry = archive.by_name("word/document.xml").map_err(|e| {
            ExtractionError::Malformed(format!("package is missing word/document.xml: {e}"))
        })?;

        let mut xml = String::new();
        entry.read_to_string(&mut xml).map_err(|e| {
            ExtractionError::Malformed(format!("failed to read word/document.xml: {e}"))
        })?;

        Ok(xml)
    }

    /// Collect the character content of every `w:t` run, breaking lines at
    /// paragraph ends.
    fn paragraph_text(xml: &str) -> Result<String, ExtractionError> {
        let mut reader = Reader::from_str(xml);
        let mut inside_run_text = false;
        let mut out = String::new();

        loop {
            match reader.read_event() {
                Err(e) => {
                    return Err(ExtractionError::Malformed(format!(
                        "malformed document.xml: {e}"
                    )));
                }
                Ok(Event::Eof) => break,
                Ok(Event::Start(ref element)) if element.local_name().as_ref() == b"t" => {
                    inside_run_text = true;
                }
                Ok(Event::End(ref element)) => match element.local_name().as_ref() {
                    b"t" => inside_run_text = false,
                    b"p" => out.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(text)) if inside_run_text => {
                    let decoded = text.unescape().map_err(|e| {
                        ExtractionError::Malformed(format!("invalid text run: {e}"))
                    })?;
                    out.push_str(&decoded);
                }
                Ok(_) => {}
            }
        }

        Ok(out)
    }
}

#[async_trait]
impl TextExtractor for DocxExtractor {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        if !DocumentFormat::Docx.matches_content(data) {
            return Err(ExtractionError::Malformed(
                "content does not carry a zip package header".to_string(),
            ));
        }

        let xml = Self::document_xml(data)?;
        let text = Self::paragraph_text(&xml)?;

        let sanitized = sanitize_extracted_text(&text);
        tracing::info!(characters = sanitized.len(), "DOCX text extraction complete");

        Ok(sanitized)
    }
}
