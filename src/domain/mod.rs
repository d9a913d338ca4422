mod artifacts;
mod category;
mod classification;
mod document;
mod forest;
mod normalize;
mod tfidf;

pub use artifacts::ModelArtifacts;
pub use category::Category;
pub use classification::Classification;
pub use document::{Document, DocumentFormat, DocumentId, MAX_DOCUMENT_BYTES};
pub use forest::{Forest, InferenceError, Tree, TreeNode};
pub use normalize::normalize;
pub use tfidf::{FeatureVector, TfidfState};
