//! Connection Store
//!
//! Append-only record of attempted pairings for the current board.
//! A name may appear at most once on each side; there is no removal,
//! only a full reset when the board is regenerated.

use crate::error::DropRejected;

/// One attempted pairing, correct or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub left: String,
    pub right: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionStore {
    connections: Vec<Connection>,
}

impl ConnectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_left_connected(&self, left: &str) -> bool {
        self.connections.iter().any(|c| c.left == left)
    }

    pub fn is_right_connected(&self, right: &str) -> bool {
        self.connections.iter().any(|c| c.right == right)
    }

    /// Record a pairing unless either side is already taken
    pub fn try_connect(&mut self, left: &str, right: &str) -> Result<&Connection, DropRejected> {
        if self.is_left_connected(left) {
            return Err(DropRejected::ItemAlreadyConnected(left.to_string()));
        }
        if self.is_right_connected(right) {
            return Err(DropRejected::TargetAlreadyConnected(right.to_string()));
        }

        self.connections.push(Connection {
            left: left.to_string(),
            right: right.to_string(),
        });
        Ok(&self.connections[self.connections.len() - 1])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Connection> {
        self.connections.iter()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Only the board reset may call this
    pub(crate) fn clear(&mut self) {
        self.connections.clear();
    }
}

impl<'a> IntoIterator for &'a ConnectionStore {
    type Item = &'a Connection;
    type IntoIter = std::slice::Iter<'a, Connection>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
