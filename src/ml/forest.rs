//! Deterministic random-forest inference over serialized tree arrays.
//!
//! The trainer exports each fitted tree as a flat node array. A split node
//! tests `features[feature] <= threshold` and routes left on true; a leaf
//! carries the fraction of positive-class training samples that reached it.
//! The forest probability is the mean of the leaf fractions across trees,
//! matching the trainer's `predict_proba` semantics.

use serde::{Deserialize, Serialize};

use super::MlError;

/// One node of a serialized decision tree. Leaves have `feature == None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeNode {
    pub feature: Option<usize>,
    pub threshold: f64,
    pub left: usize,
    pub right: usize,
    /// Positive-class fraction at this node; read at leaves.
    pub positive_fraction: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forest {
    pub trees: Vec<DecisionTree>,
}

impl DecisionTree {
    /// Walk from the root to a leaf. Bounded by the node count so a
    /// malformed cyclic tree errors instead of looping.
    fn leaf_fraction(&self, features: &[f64]) -> Result<f64, MlError> {
        let mut index = 0usize;
        for _ in 0..=self.nodes.len() {
            let node = self.nodes.get(index).ok_or_else(|| {
                MlError::MalformedForest(format!("node index {index} out of range"))
            })?;
            let feature = match node.feature {
                None => return Ok(node.positive_fraction),
                Some(feature) => feature,
            };
            let value = features.get(feature).copied().ok_or_else(|| {
                MlError::MalformedForest(format!("feature index {feature} out of range"))
            })?;
            index = if value <= node.threshold {
                node.left
            } else {
                node.right
            };
        }
        Err(MlError::MalformedForest("tree walk did not terminate".into()))
    }
}

impl Forest {
    /// Mean positive-class probability across all trees.
    pub fn predict_proba(&self, features: &[f64]) -> Result<f64, MlError> {
        if self.trees.is_empty() {
            return Err(MlError::MalformedForest("empty forest".into()));
        }
        let mut sum = 0.0;
        for tree in &self.trees {
            sum += tree.leaf_fraction(features)?;
        }
        Ok(sum / self.trees.len() as f64)
    }
}
