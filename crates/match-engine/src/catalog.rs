//! Pair Catalog
//!
//! The fixed ground truth: which left item belongs to which right item.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One correct association
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair {
    pub left: String,
    pub right: String,
}

impl Pair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// Validated, immutable list of pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairCatalog {
    pairs: Vec<Pair>,
}

impl PairCatalog {
    /// Build a catalog. Both sides must be unique so a full board has
    /// exactly one correct answer.
    pub fn new(pairs: Vec<Pair>) -> Result<Self, ConfigError> {
        if pairs.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }

        let mut lefts = HashSet::new();
        let mut rights = HashSet::new();
        for pair in &pairs {
            if !lefts.insert(pair.left.as_str()) {
                return Err(ConfigError::DuplicateLeft(pair.left.clone()));
            }
            if !rights.insert(pair.right.as_str()) {
                return Err(ConfigError::DuplicateRight(pair.right.clone()));
            }
        }

        Ok(Self { pairs })
    }

    /// Built-in catalog shipped with the widget
    pub fn reference() -> Self {
        Self {
            pairs: default_pairs(),
        }
    }

    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, left: &str, right: &str) -> bool {
        self.pairs.iter().any(|p| p.left == left && p.right == right)
    }

    pub fn left_names(&self) -> Vec<String> {
        self.pairs.iter().map(|p| p.left.clone()).collect()
    }

    pub fn right_names(&self) -> Vec<String> {
        self.pairs.iter().map(|p| p.right.clone()).collect()
    }

    /// Image resource for an item or slot: `<dir>/<name>.jpg`
    pub fn image_path(dir: &str, name: &str) -> String {
        let dir = dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{}.jpg", name)
        } else {
            format!("{}/{}.jpg", dir, name)
        }
    }
}

impl Default for PairCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

pub(crate) fn default_pairs() -> Vec<Pair> {
    vec![
        Pair::new("verde", "comp_verde"),
        Pair::new("logistica", "comp_logistica"),
        Pair::new("movilidad", "comp_movilidad"),
    ]
}
