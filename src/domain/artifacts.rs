use super::forest::Forest;
use super::tfidf::TfidfState;

/// The persisted (vectorizer, classifier) pair. Constructed once at process
/// start, shared read-only via `Arc` with every in-flight request, and never
/// mutated afterwards, so concurrent access needs no synchronization.
#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub vectorizer: TfidfState,
    pub forest: Forest,
}
