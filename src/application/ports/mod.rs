mod text_extractor;
mod token_verifier;

pub use text_extractor::{ExtractionError, TextExtractor};
pub use token_verifier::TokenVerifier;
