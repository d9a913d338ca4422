use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::TextExtractor;
use crate::domain::{Classification, Document, ModelArtifacts, normalize};

/// Composes extraction, normalization, vectorization, and inference into one
/// synchronous call per document, measuring wall time across the sequence.
///
/// Normalization and vectorization cannot fail: empty text and zero-overlap
/// vocabularies are valid low-information inputs, not errors. Stage failures
/// surface as a single uniform `ClassificationError` naming the stage.
pub struct ClassificationService<E>
where
    E: TextExtractor,
{
    extractor: Arc<E>,
    artifacts: Arc<ModelArtifacts>,
}

impl<E> ClassificationService<E>
where
    E: TextExtractor,
{
    pub fn new(extractor: Arc<E>, artifacts: Arc<ModelArtifacts>) -> Self {
        Self {
            extractor,
            artifacts,
        }
    }

    pub fn artifacts(&self) -> &ModelArtifacts {
        &self.artifacts
    }

    #[tracing::instrument(skip(self, data), fields(
        document_id = %document.id.as_uuid(),
        filename = %document.filename,
        format = document.format.as_str(),
    ))]
    pub async fn classify(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Classification, ClassificationError> {
        let started = Instant::now();

        let text = self
            .extractor
            .extract(data, document)
            .await
            .map_err(|e| ClassificationError {
                stage: PipelineStage::Extraction,
                cause: e.to_string(),
            })?;

        let tokens = normalize(&text);
        let vector = self.artifacts.vectorizer.vectorize(&tokens);

        tracing::debug!(
            tokens = tokens.len(),
            zero_vector = vector.is_zero(),
            "document vectorized"
        );

        let probabilities =
            self.artifacts
                .forest
                .predict(&vector)
                .map_err(|e| ClassificationError {
                    stage: PipelineStage::Inference,
                    cause: e.to_string(),
                })?;

        let classification =
            Classification::from_distribution(probabilities, started.elapsed().as_secs_f64());

        tracing::info!(
            category = %classification.category,
            confidence = classification.confidence,
            elapsed_seconds = classification.elapsed_seconds,
            "document classified"
        );

        Ok(classification)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{stage} stage failed: {cause}")]
pub struct ClassificationError {
    pub stage: PipelineStage,
    pub cause: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Extraction,
    Inference,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::Extraction => "extraction",
            PipelineStage::Inference => "inference",
        };
        write!(f, "{name}")
    }
}
