mod docx_extractor;
mod format_extractor;
mod pdf_extractor;
mod text_sanitizer;

pub use docx_extractor::DocxExtractor;
pub use format_extractor::FormatExtractor;
pub use pdf_extractor::PdfExtractor;
pub use text_sanitizer::sanitize_extracted_text;
