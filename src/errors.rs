use thiserror::Error;

use crate::graph::{NodeId, Weight};


#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("source index {index} is out of range for {node_count} nodes")]
    InvalidSourceIndex { index: usize, node_count: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("node limit of {limit} reached")]
    NodeLimitReached { limit: usize }, // No free label or slot left
    #[error("unknown node id {0}")]
    UnknownNode(NodeId),
    #[error("node {0} cannot be connected to itself")]
    SelfLoop(NodeId),
    #[error("nodes {first} and {second} are already connected")]
    DuplicateEdge { first: NodeId, second: NodeId },
    #[error("edge weight {weight} outside [{min}, {max}]")]
    WeightOutOfRange { weight: Weight, min: Weight, max: Weight },
    #[error(transparent)]
    Solve(#[from] SolveError),
}
