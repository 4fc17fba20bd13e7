//! Gradient-boosted tree ensemble evaluated from a JSON export.
//!
//! ```json
//! {
//!   "num_features": 9,
//!   "objective": "binary",
//!   "base_score": 0.0,
//!   "trees": [
//!     { "nodes": [
//!         { "feature": 4, "threshold": 0.5, "left": 1, "right": 2, "default_left": true },
//!         { "leaf": -0.3 },
//!         { "leaf": 0.7 }
//!     ] }
//!   ]
//! }
//! ```
//!
//! A sample goes left when `value <= threshold`; NaN follows `default_left`.

use super::ScoreModel;
use crate::error::{NameDividerError, NdResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Objective {
    /// Raw sum squashed through a sigmoid.
    #[default]
    Binary,
    /// Raw sum returned as is.
    Regression,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        #[serde(default)]
        default_left: bool,
    },
    Leaf {
        leaf: f64,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Only called on validated trees: every child index points forward and
    /// in bounds, so the walk always reaches a leaf.
    fn evaluate(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        while let Some(node) = self.nodes.get(idx) {
            match node {
                TreeNode::Leaf { leaf } => return *leaf,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    default_left,
                } => {
                    let value = features.get(*feature).copied().unwrap_or(f64::NAN);
                    let go_left = if value.is_nan() {
                        *default_left
                    } else {
                        value <= *threshold
                    };
                    idx = if go_left { *left } else { *right };
                }
            }
        }
        0.0
    }
}

/// A validated ensemble. Every deserialization path runs the structural
/// checks, so a loaded model can never index out of bounds or loop.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "RawTreeEnsemble")]
pub struct TreeEnsemble {
    num_features: usize,
    objective: Objective,
    base_score: f64,
    trees: Vec<Tree>,
}

#[derive(Deserialize)]
struct RawTreeEnsemble {
    num_features: usize,
    #[serde(default)]
    objective: Objective,
    #[serde(default)]
    base_score: f64,
    trees: Vec<Tree>,
}

impl TryFrom<RawTreeEnsemble> for TreeEnsemble {
    type Error = NameDividerError;

    fn try_from(raw: RawTreeEnsemble) -> NdResult<Self> {
        let model = TreeEnsemble {
            num_features: raw.num_features,
            objective: raw.objective,
            base_score: raw.base_score,
            trees: raw.trees,
        };
        model.validate()?;
        Ok(model)
    }
}

impl TreeEnsemble {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> NdResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let model = Self::from_reader(BufReader::new(file))?;
        info!(
            "🌲 Loaded {} trees ({} objective) from {:?}",
            model.trees.len(),
            model.objective,
            path
        );
        Ok(model)
    }

    /// Malformed JSON is a `Json` error, a structurally broken model a
    /// `Validation` error.
    pub fn from_reader<R: Read>(reader: R) -> NdResult<Self> {
        let raw: RawTreeEnsemble = serde_json::from_reader(reader)?;
        Self::try_from(raw)
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn objective(&self) -> Objective {
        self.objective
    }

    pub fn base_score(&self) -> f64 {
        self.base_score
    }

    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// Rejects models that could index out of bounds or loop forever.
    /// Children must point forward, which also rules out cycles.
    fn validate(&self) -> NdResult<()> {
        if self.trees.is_empty() {
            return Err(NameDividerError::Validation(
                "Model contains no trees".to_string(),
            ));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(NameDividerError::Validation(format!(
                    "Tree {} has no nodes",
                    t
                )));
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                if let TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= self.num_features {
                        return Err(NameDividerError::Validation(format!(
                            "Tree {} node {} splits on feature {} of {}",
                            t, n, feature, self.num_features
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= n || child >= tree.nodes.len() {
                            return Err(NameDividerError::Validation(format!(
                                "Tree {} node {} has invalid child {}",
                                t, n, child
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn raw_score(&self, features: &[f64]) -> f64 {
        self.base_score
            + self
                .trees
                .iter()
                .map(|tree| tree.evaluate(features))
                .sum::<f64>()
    }
}

impl ScoreModel for TreeEnsemble {
    fn predict(&self, features: &[f64]) -> f64 {
        let raw = self.raw_score(features);
        match self.objective {
            Objective::Binary => 1.0 / (1.0 + (-raw).exp()),
            Objective::Regression => raw,
        }
    }
}
