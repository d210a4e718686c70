//! Single-source shortest paths over a small, hand-built weighted graph.
//!
//! Nodes and edges are owned by a [`GraphEditor`] (or any caller holding
//! [`Node`]/[`Edge`] slices); [`solve`] rebuilds the adjacency list from a
//! snapshot, runs Dijkstra's algorithm and formats one row per node.

mod collections;
pub mod config;
pub mod editor;
pub mod errors;
pub mod format;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod solve;

pub use config::EditorConfig;
pub use editor::{ClickOutcome, GraphEditor};
pub use errors::{EditorError, SolveError};
pub use geometry::Point;
pub use graph::{Edge, Node, NodeId, Weight};
pub use graph_algos::Distance;
pub use solve::{solve, Row, Solution};
