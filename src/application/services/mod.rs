mod classification_service;

pub use classification_service::{ClassificationError, ClassificationService, PipelineStage};
