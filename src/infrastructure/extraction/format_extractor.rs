use async_trait::async_trait;

use crate::application::ports::{ExtractionError, TextExtractor};
use crate::domain::{Document, DocumentFormat};

use super::docx_extractor::DocxExtractor;
use super::pdf_extractor::PdfExtractor;

/// Dispatches to the per-format extractor over the closed `DocumentFormat`
/// enum. Adding a format means adding a variant, and the match below stops
/// compiling until it is handled.
#[derive(Default)]
pub struct FormatExtractor {
    pdf: PdfExtractor,
    docx: DocxExtractor,
}

impl FormatExtractor {
    pub fn new() -> Self {
        Self {
            pdf: PdfExtractor::new(),
            docx: DocxExtractor::new(),
        }
    }
}

#[async_trait]
impl TextExtractor for FormatExtractor {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError> {
        match document.format {
            DocumentFormat::Pdf => self.pdf.extract(data, document).await,
            DocumentFormat::Docx => self.docx.extract(data, document).await,
        }
    }
}
