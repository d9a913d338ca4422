use async_trait::async_trait;

use crate::domain::Document;

/// Converts raw document bytes into plain text.
///
/// A structurally valid document with no extractable text is `Ok` with an
/// empty string, not an error; only content that does not parse as the
/// declared format fails.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("malformed document: {0}")]
    Malformed(String),
    #[error("extraction failed: {0}")]
    Failed(String),
}
