//! Struct definitions for objects that represent vertices in a graph
//! and the bookkeeping attached to them during a search.
//!
//! A vertex is identified by a [`NodeId`]. The search never looks
//! inside a vertex: graph collaborators hand out identifiers and the
//! search only compares, copies and hashes them.
//!
//! A [`NodeRecord`] is what the search remembers about a vertex: how
//! far it is from the origin and which vertex it was reached from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a vertex in a graph.
///
/// The raw value `u32::MAX` is reserved for [`NodeId::NO_ID`], which
/// stands for "no node". It is what a lookup answers when a node has
/// no predecessor (the origin of a search) or when the node is not
/// stored at all. [`NodeId::new`] refuses to build it, so a valid
/// vertex can never be mistaken for the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    /// The "no node" sentinel.
    pub const NO_ID: NodeId = NodeId(u32::MAX);

    /// Creates an identifier from its raw value.
    ///
    /// # Returns
    /// [`None`] if `raw` is the reserved sentinel value.
    pub const fn new(raw: u32) -> Option<NodeId> {
        if raw == u32::MAX {
            None
        } else {
            Some(NodeId(raw))
        }
    }

    /// Returns the raw value of the identifier.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns true if this is [`NodeId::NO_ID`].
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Returns true if this identifies a real vertex.
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "NO_ID")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// What a search knows about a single vertex.
///
/// `predecessor` is [`NodeId::NO_ID`] exactly when the record
/// describes the origin of the search, in which case `distance` is
/// `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// The vertex this record is about.
    pub node: NodeId,

    /// The vertex immediately before `node` on the best known path.
    pub predecessor: NodeId,

    /// Length of the best known path from the origin to `node`.
    pub distance: f32,
}

impl NodeRecord {
    /// Record for the origin of a search.
    pub fn origin(node: NodeId) -> NodeRecord {
        NodeRecord {
            node,
            predecessor: NodeId::NO_ID,
            distance: 0.0,
        }
    }

    /// Returns true if the record has no predecessor.
    pub fn is_origin(&self) -> bool {
        self.predecessor.is_none()
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod node_type_tests {
    use super::*;

    #[test]
    fn test_sentinel_is_not_a_valid_id() {
        assert_eq!(NodeId::new(u32::MAX), None);
        assert!(NodeId::NO_ID.is_none());
        assert!(!NodeId::NO_ID.is_some());
    }

    #[test]
    fn test_new_keeps_raw_value() {
        let id = NodeId::new(42).unwrap();
        assert_eq!(id.raw(), 42);
        assert!(id.is_some());
        assert_eq!(id.to_string(), "42");
        assert_eq!(NodeId::NO_ID.to_string(), "NO_ID");
    }

    #[test]
    fn test_origin_record() {
        let id = NodeId::new(3).unwrap();
        let record = NodeRecord::origin(id);
        assert!(record.is_origin());
        assert_eq!(record.distance, 0.0);
        assert_eq!(record.node, id);
    }
}
