use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::{Category, Forest, ModelArtifacts, TfidfState, TreeNode};

const VECTORIZER_FILE: &str = "vectorizer.json";
const CLASSIFIER_FILE: &str = "classifier.json";

/// Loads the persisted (vectorizer, classifier) pair once at startup and
/// hands out an immutable shared reference. A process that fails to load a
/// structurally consistent pair must not accept requests, so `load` errors
/// are fatal to startup.
pub struct ModelStore {
    artifacts: Arc<ModelArtifacts>,
}

impl ModelStore {
    pub fn load(dir: &Path) -> Result<Self, ModelLoadError> {
        let vectorizer: TfidfState = read_artifact(&dir.join(VECTORIZER_FILE))?;
        let forest: Forest = read_artifact(&dir.join(CLASSIFIER_FILE))?;

        validate(&vectorizer, &forest)?;

        tracing::info!(
            vocabulary_size = vectorizer.dimension(),
            trees = forest.trees.len(),
            "model artifacts loaded"
        );

        Ok(Self {
            artifacts: Arc::new(ModelArtifacts { vectorizer, forest }),
        })
    }

    /// The already-loaded artifacts; callable concurrently without locking
    /// because nothing mutates them post-load.
    pub fn handle(&self) -> Arc<ModelArtifacts> {
        Arc::clone(&self.artifacts)
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ModelLoadError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ModelLoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ModelLoadError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Cross-checks the pair: vocabulary indices must address idf weights, the
/// classifier must expect exactly the vectorizer's dimension, classes must be
/// the five fixed categories in canonical order, and every tree must be
/// structurally sound.
fn validate(vectorizer: &TfidfState, forest: &Forest) -> Result<(), ModelLoadError> {
    let dimension = vectorizer.dimension();

    for (term, &index) in &vectorizer.vocabulary {
        if index >= dimension {
            return Err(ModelLoadError::Inconsistent(format!(
                "vocabulary term {term:?} maps to index {index}, but only {dimension} idf weights are present"
            )));
        }
    }

    if forest.n_features != dimension {
        return Err(ModelLoadError::Inconsistent(format!(
            "classifier expects {} features, vectorizer produces {dimension}",
            forest.n_features
        )));
    }

    let expected_classes: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    if forest.classes != expected_classes {
        return Err(ModelLoadError::Inconsistent(format!(
            "classifier classes {:?} do not match the fixed category set {expected_classes:?}",
            forest.classes
        )));
    }

    if forest.trees.is_empty() {
        return Err(ModelLoadError::Inconsistent(
            "classifier ensemble contains no trees".to_string(),
        ));
    }

    for (tree_index, tree) in forest.trees.iter().enumerate() {
        if tree.nodes.is_empty() {
            return Err(ModelLoadError::Inconsistent(format!(
                "tree {tree_index} has no nodes"
            )));
        }

        for (node_index, node) in tree.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } => {
                    if *feature >= dimension {
                        return Err(ModelLoadError::Inconsistent(format!(
                            "tree {tree_index} node {node_index} splits on feature {feature}, model dimension is {dimension}"
                        )));
                    }
                    if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                        return Err(ModelLoadError::Inconsistent(format!(
                            "tree {tree_index} node {node_index} references a child outside the node table"
                        )));
                    }
                }
                TreeNode::Leaf { distribution } => {
                    if distribution.len() != Category::COUNT {
                        return Err(ModelLoadError::Inconsistent(format!(
                            "tree {tree_index} node {node_index} has a {}-way leaf, expected {}",
                            distribution.len(),
                            Category::COUNT
                        )));
                    }
                }
            }
        }
    }

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("cannot read model artifact {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse model artifact {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("inconsistent model artifacts: {0}")]
    Inconsistent(String),
}
