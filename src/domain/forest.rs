use serde::{Deserialize, Serialize};

use super::category::Category;
use super::tfidf::FeatureVector;

/// A pre-trained ensemble of decision trees over TF-IDF features. Each tree
/// votes a probability distribution; votes are averaged, so the result sums
/// to 1 by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forest {
    pub n_features: usize,
    pub classes: Vec<String>,
    pub trees: Vec<Tree>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        distribution: Vec<f64>,
    },
}

impl Forest {
    /// Average the leaf distributions the vector reaches in every tree. A
    /// zero vector is a legitimate low-information input: every split reads
    /// 0.0 for its feature and the walk still lands on a leaf.
    pub fn predict(
        &self,
        vector: &FeatureVector,
    ) -> Result<[f64; Category::COUNT], InferenceError> {
        if vector.dimension() != self.n_features {
            return Err(InferenceError::DimensionMismatch {
                expected: self.n_features,
                actual: vector.dimension(),
            });
        }

        let mut votes = [0.0; Category::COUNT];
        for tree in &self.trees {
            let leaf = tree.leaf_distribution(vector)?;
            for (vote, probability) in votes.iter_mut().zip(leaf) {
                *vote += probability;
            }
        }

        let count = self.trees.len() as f64;
        for vote in &mut votes {
            *vote /= count;
        }

        Ok(votes)
    }
}

impl Tree {
    fn leaf_distribution(&self, vector: &FeatureVector) -> Result<&[f64], InferenceError> {
        let mut index = 0;
        // Each step must descend, so a well-formed tree terminates within
        // nodes.len() hops.
        for _ in 0..=self.nodes.len() {
            match self
                .nodes
                .get(index)
                .ok_or(InferenceError::MalformedTree)?
            {
                TreeNode::Leaf { distribution } => return Ok(distribution),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if vector.value(*feature) <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }

        Err(InferenceError::MalformedTree)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("feature vector dimension {actual} does not match model dimension {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("ensemble contains a malformed tree (dangling or cyclic node reference)")]
    MalformedTree,
}
