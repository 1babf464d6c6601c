//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::node::NodeId;

/// An edge is a directed connection between two nodes.
/// The cost represents the "weight" of the edge.
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Tail of the edge.
    pub from: NodeId,

    /// Head of the edge.
    pub to: NodeId,

    /// The weight of the edge.
    pub cost: OrderedFloat<f32>,
}

impl Edge {
    /// Creates an edge from a plain float cost.
    pub fn new(from: NodeId, to: NodeId, cost: f32) -> Edge {
        Edge {
            from,
            to,
            cost: OrderedFloat(cost),
        }
    }
}
