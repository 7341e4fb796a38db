//! Engine Errors
//!
//! Configuration problems and rejected drops. Neither is fatal: a bad
//! config falls back to defaults, a rejected drop is a silent no-op.

use serde::{Deserialize, Serialize};

/// Errors raised while building a catalog or config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigError {
    EmptyCatalog,
    DuplicateLeft(String),
    DuplicateRight(String),
    InvalidOffsetRange,
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyCatalog => write!(f, "Catalog has no pairs"),
            ConfigError::DuplicateLeft(name) => write!(f, "Duplicate left item: {}", name),
            ConfigError::DuplicateRight(name) => write!(f, "Duplicate right item: {}", name),
            ConfigError::InvalidOffsetRange => write!(f, "Offset range must be finite and non-decreasing"),
            ConfigError::Parse(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Why a drop did not produce a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropRejected {
    /// Drop arrived with no gesture in progress
    NoActiveItem,
    UnknownItem(String),
    UnknownTarget(String),
    ItemAlreadyConnected(String),
    TargetAlreadyConnected(String),
}

impl std::fmt::Display for DropRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropRejected::NoActiveItem => write!(f, "No item is being dragged"),
            DropRejected::UnknownItem(name) => write!(f, "Unknown item: {}", name),
            DropRejected::UnknownTarget(name) => write!(f, "Unknown target: {}", name),
            DropRejected::ItemAlreadyConnected(name) => write!(f, "Item already connected: {}", name),
            DropRejected::TargetAlreadyConnected(name) => write!(f, "Target already connected: {}", name),
        }
    }
}

impl std::error::Error for DropRejected {}
