use std::sync::Arc;

use crate::application::ports::{TextExtractor, TokenVerifier};
use crate::application::services::ClassificationService;

pub struct AppState<E, T>
where
    E: TextExtractor,
    T: TokenVerifier,
{
    pub classification_service: Arc<ClassificationService<E>>,
    pub token_verifier: Arc<T>,
}

impl<E, T> Clone for AppState<E, T>
where
    E: TextExtractor,
    T: TokenVerifier,
{
    fn clone(&self) -> Self {
        Self {
            classification_service: Arc::clone(&self.classification_service),
            token_verifier: Arc::clone(&self.token_verifier),
        }
    }
}
