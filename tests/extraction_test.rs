mod helpers;

use docsift::application::ports::{ExtractionError, TextExtractor};
use docsift::domain::{Document, DocumentFormat};
use docsift::infrastructure::extraction::{DocxExtractor, FormatExtractor, PdfExtractor};

use helpers::build_docx;

fn document(filename: &str, format: DocumentFormat, len: usize) -> Document {
    Document::new(filename.to_string(), format, len as u64)
}

#[tokio::test]
async fn given_valid_docx_when_extracting_then_returns_paragraph_text() {
    let extractor = DocxExtractor::new();
    let docx = build_docx(&["Employment agreement.", "Termination clause."]);
    let doc = document("contract.docx", DocumentFormat::Docx, docx.len());

    let text = extractor.extract(&docx, &doc).await.unwrap();

    assert!(text.contains("Employment agreement."));
    assert!(text.contains("Termination clause."));
}

#[tokio::test]
async fn given_docx_with_no_paragraphs_when_extracting_then_returns_empty_text() {
    let extractor = DocxExtractor::new();
    let docx = build_docx(&[]);
    let doc = document("empty.docx", DocumentFormat::Docx, docx.len());

    let text = extractor.extract(&docx, &doc).await.unwrap();

    assert!(text.is_empty());
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_docx_then_malformed() {
    let extractor = DocxExtractor::new();
    let garbage = b"PK but not actually a zip archive";
    let doc = document("corrupt.docx", DocumentFormat::Docx, garbage.len());

    let result = extractor.extract(garbage, &doc).await;

    assert!(matches!(result, Err(ExtractionError::Malformed(_))));
}

#[tokio::test]
async fn given_non_zip_bytes_when_extracting_docx_then_malformed() {
    let extractor = DocxExtractor::new();
    let garbage = b"plain text, no zip header";
    let doc = document("fake.docx", DocumentFormat::Docx, garbage.len());

    let result = extractor.extract(garbage, &doc).await;

    assert!(matches!(result, Err(ExtractionError::Malformed(_))));
}

#[tokio::test]
async fn given_zip_without_document_xml_when_extracting_then_malformed() {
    use std::io::Write;

    let mut buffer = Vec::new();
    {
        let mut writer = zip::ZipWriter::new(std::io::Cursor::new(&mut buffer));
        writer
            .start_file("unrelated.txt", zip::write::SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        writer.finish().unwrap();
    }

    let extractor = DocxExtractor::new();
    let doc = document("odd.docx", DocumentFormat::Docx, buffer.len());

    let result = extractor.extract(&buffer, &doc).await;

    assert!(matches!(result, Err(ExtractionError::Malformed(_))));
}

#[tokio::test]
async fn given_garbage_bytes_when_extracting_pdf_then_malformed() {
    let extractor = PdfExtractor::new();
    let garbage = b"not a pdf at all";
    let doc = document("corrupt.pdf", DocumentFormat::Pdf, garbage.len());

    let result = extractor.extract(garbage, &doc).await;

    assert!(matches!(result, Err(ExtractionError::Malformed(_))));
}

#[tokio::test]
async fn given_pdf_header_with_garbage_body_when_extracting_then_malformed() {
    let extractor = PdfExtractor::new();
    let garbage = b"%PDF-1.7 followed by nothing resembling a pdf body";
    let doc = document("broken.pdf", DocumentFormat::Pdf, garbage.len());

    let result = extractor.extract(garbage, &doc).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn given_format_extractor_when_format_is_docx_then_dispatches_to_docx_parser() {
    let extractor = FormatExtractor::new();
    let docx = build_docx(&["Quarterly budget review."]);
    let doc = document("budget.docx", DocumentFormat::Docx, docx.len());

    let text = extractor.extract(&docx, &doc).await.unwrap();

    assert!(text.contains("Quarterly budget review."));
}
