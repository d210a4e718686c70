use serde::{Deserialize, Serialize};

use crate::geometry::Point;


/// 1-based node identifier, stable for the lifetime of a graph
pub type NodeId = u32;

/// Edge weight
pub type Weight = u32;


/// Node placed on the canvas
/// - label is a single uppercase letter
/// - position is only used for display and hit testing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: char,
    pub position: Point,
}

impl Node {

    pub fn new(id: NodeId, label: char, position: Point) -> Self {
        Self { id, label, position }
    }

    /// 0-based contiguous index used by the solver
    pub fn index(&self) -> usize {
        (self.id as usize).saturating_sub(1)
    }
}


/// Undirected weighted edge, stored once per unordered pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: Weight,
}

impl Edge {

    pub fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self { source, target, weight }
    }

    /// True if this edge joins `a` and `b` in either direction
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}
