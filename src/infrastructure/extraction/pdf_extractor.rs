use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentFormat};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Parses page-structured PDF content and concatenates page text in document
/// order. A page with no extractable text contributes nothing; a document
/// where every page is textless (e.g. scanned images) yields an empty string,
/// which is a valid outcome, not an error.
#[derive(Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &std::path::Path) -> Result<Vec<String>, ExtractionError> {
        let mut doc = PdfDocument::open(path)
            .map_err(|e| ExtractionError::Malformed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc
            .page_count()
            .map_err(|e| ExtractionError::Malformed(format!("failed to read page count: {e}")))?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).unwrap_or_default();

            if !text.trim().is_empty() {
                pages.push(text);
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfExtractor {
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
        if !DocumentFormat::Pdf.matches_content(data) {
            return Err(ExtractionError::Malformed(
                "content does not carry a PDF header".to_string(),
            ));
        }

        // NamedTempFile removes itself on drop, on every exit path.
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            ExtractionError::Failed(format!("failed to create temp file: {e}"))
        })?;

        temp_file
            .write_all(data)
            .map_err(|e| ExtractionError::Failed(format!("failed to write temp file: {e}")))?;

        let temp_path = temp_file.path().to_path_buf();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&temp_path)),
        )
        .await
        .map_err(|_| ExtractionError::Failed("PDF extraction timed out".to_string()))?
        .map_err(|e| ExtractionError::Failed(format!("task join error: {e}")))??;

        let page_count = pages.len();
        tracing::info!(page_count, "PDF text extraction complete");

        let sanitized_pages: Vec<String> = pages
            .iter()
            .map(|text| sanitize_extracted_text(text))
            .filter(|text| !text.is_empty())
            .collect();

        Ok(sanitized_pages.join("\n\n"))
    }
}
