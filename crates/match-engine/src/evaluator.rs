//! Evaluator
//!
//! Scores the connection set against the catalog.

use crate::catalog::PairCatalog;
use crate::config::GameConfig;
use crate::connection::ConnectionStore;

/// Outcome of checking the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every catalog pair connected, nothing wrong
    Success,
    /// Incomplete or at least one wrong pairing
    Failure {
        correct: usize,
        attempted: usize,
        expected: usize,
    },
}

impl Verdict {
    pub fn is_success(&self) -> bool {
        matches!(self, Verdict::Success)
    }

    pub fn message<'a>(&self, config: &'a GameConfig) -> &'a str {
        match self {
            Verdict::Success => &config.success_message,
            Verdict::Failure { .. } => &config.failure_message,
        }
    }
}

/// Success iff the connections form a bijection onto the catalog.
/// A partial board never passes, even if every line drawn is right.
pub fn evaluate(catalog: &PairCatalog, connections: &ConnectionStore) -> Verdict {
    let correct = connections
        .iter()
        .filter(|c| catalog.contains(&c.left, &c.right))
        .count();
    let attempted = connections.len();
    let expected = catalog.len();

    if correct == attempted && attempted == expected {
        Verdict::Success
    } else {
        Verdict::Failure {
            correct,
            attempted,
            expected,
        }
    }
}
