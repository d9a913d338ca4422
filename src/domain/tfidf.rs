use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Frozen vectorizer state: a learned vocabulary mapping terms to feature
/// indices, and one inverse-document-frequency weight per index. Never
/// mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfState {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

impl TfidfState {
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Term weight = term frequency x precomputed idf. Terms outside the
    /// vocabulary contribute nothing; an empty or fully out-of-vocabulary
    /// token stream yields the zero vector.
    pub fn vectorize(&self, tokens: &[String]) -> FeatureVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token.as_str()) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let weights = counts
            .into_iter()
            .map(|(index, tf)| (index, tf * self.idf[index]))
            .collect();

        FeatureVector {
            dimension: self.dimension(),
            weights,
        }
    }
}

/// Sparse numeric vector of the vectorizer's fixed dimension. Indices absent
/// from `weights` are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dimension: usize,
    weights: HashMap<usize, f64>,
}

impl FeatureVector {
    pub fn zero(dimension: usize) -> Self {
        Self {
            dimension,
            weights: HashMap::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn value(&self, index: usize) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }
}
