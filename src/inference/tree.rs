//! The fitted classifier, exported from training as a decision tree.
//!
//! The export format is the tree's parallel node arrays: for node `i`,
//! `children_left[i]`/`children_right[i]` index the subtrees (`-1` marks a
//! leaf), `feature[i]`/`threshold[i]` describe the split, and `class[i]` is
//! the predicted class at that node. The engine treats this as an opaque
//! vector → class-code function; nothing here knows what the features mean.

use serde::{Deserialize, Serialize};

/// Child index sentinel for leaves.
const LEAF: i64 = -1;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("malformed tree: {0}")]
    Malformed(String),
    #[error("feature index {index} out of range for vector of length {len}")]
    FeatureOutOfRange { index: i64, len: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    class: Vec<i64>,
}

impl DecisionTree {
    /// Structural validation, run once at load time. Guarantees every node
    /// array has the same length and all child indices stay in range.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        let n = self.children_left.len();
        if n == 0 {
            return Err(ClassifierError::Malformed("tree has no nodes".into()));
        }
        if self.children_right.len() != n
            || self.feature.len() != n
            || self.threshold.len() != n
            || self.class.len() != n
        {
            return Err(ClassifierError::Malformed(format!(
                "node arrays have inconsistent lengths (expected {n})"
            )));
        }
        for i in 0..n {
            for child in [self.children_left[i], self.children_right[i]] {
                if child != LEAF && !(0..n as i64).contains(&child) {
                    return Err(ClassifierError::Malformed(format!(
                        "node {i} references child {child} outside 0..{n}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Walk the tree for one feature vector and return the class code.
    ///
    /// Bounds and cycles are re-checked while walking so a corrupt export
    /// surfaces as an error instead of a panic or an infinite loop.
    pub fn predict(&self, features: &[f64]) -> Result<i64, ClassifierError> {
        let n = self.children_left.len();
        let mut node = 0usize;
        for _ in 0..=n {
            let (left, right, feature_idx, threshold, class) = self.node(node)?;
            if left == LEAF {
                return Ok(class);
            }
            let value = usize::try_from(feature_idx)
                .ok()
                .and_then(|i| features.get(i))
                .copied()
                .ok_or(ClassifierError::FeatureOutOfRange {
                    index: feature_idx,
                    len: features.len(),
                })?;
            let next = if value <= threshold { left } else { right };
            node = usize::try_from(next).map_err(|_| {
                ClassifierError::Malformed(format!("node {node} mixes split and leaf children"))
            })?;
        }
        Err(ClassifierError::Malformed(
            "walk did not reach a leaf (cycle in node arrays)".into(),
        ))
    }

    fn node(&self, i: usize) -> Result<(i64, i64, i64, f64, i64), ClassifierError> {
        match (
            self.children_left.get(i),
            self.children_right.get(i),
            self.feature.get(i),
            self.threshold.get(i),
            self.class.get(i),
        ) {
            (Some(&left), Some(&right), Some(&feature), Some(&threshold), Some(&class)) => {
                Ok((left, right, feature, threshold, class))
            }
            _ => Err(ClassifierError::Malformed(format!(
                "node {i} is missing attributes"
            ))),
        }
    }

    pub fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Single-leaf stub that always answers `class`. Test fixture.
    #[cfg(test)]
    pub(crate) fn constant(class: i64) -> Self {
        Self {
            children_left: vec![LEAF],
            children_right: vec![LEAF],
            feature: vec![LEAF],
            threshold: vec![0.0],
            class: vec![class],
        }
    }
}
