use crate::collections::FxIndexSet;
use crate::graph::{Edge, Node, NodeId, Weight};

use tracing::warn;


/// Neighbor entry in an adjacency list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbor<C> {
    pub index: usize,
    pub weight: C,
}


/// Undirected adjacency list over 0-based contiguous node indices
/// Built from a snapshot of nodes and edges, never updated incrementally
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyList<C> {
    neighbors: Vec<Vec<Neighbor<C>>>,
}

impl<C: Copy> AdjacencyList<C> {

    /// Empty list with `node_count` isolated nodes
    pub fn with_nodes(node_count: usize) -> Self {
        Self {
            neighbors: vec![Vec::new(); node_count],
        }
    }

    /// Record an undirected edge on both endpoints
    /// Indices must be below node_count
    pub(crate) fn add_edge(&mut self, u: usize, v: usize, weight: C) {
        self.neighbors[u].push(Neighbor { index: v, weight });
        self.neighbors[v].push(Neighbor { index: u, weight });
    }

    /// Build from raw (u, v, weight) triples, indices below node_count
    pub(crate) fn from_edges<I>(node_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, C)>,
    {
        let mut list = Self::with_nodes(node_count);
        for (u, v, weight) in edges {
            list.add_edge(u, v, weight);
        }
        list
    }

    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Neighbors of `index` in insertion order, empty if out of range
    pub fn neighbors(&self, index: usize) -> &[Neighbor<C>] {
        self.neighbors.get(index).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl AdjacencyList<Weight> {

    /// Build the adjacency list for the current nodes and edges
    /// - a node's index is its position in `nodes` (equal to id - 1 for editor-built graphs)
    /// - nodes are walked in order, picking up the edges they are the source of,
    ///   which fixes neighbor order and therefore tie breaking in the solver
    /// - edges with an endpoint missing from `nodes` are skipped
    pub fn build(nodes: &[Node], edges: &[Edge]) -> Self {

        let index_of: FxIndexSet<NodeId> = nodes.iter().map(|node| node.id).collect();
        let mut list = Self::with_nodes(nodes.len());
        let mut resolved = 0;

        for (source_index, node) in nodes.iter().enumerate() {
            for edge in edges.iter().filter(|edge| edge.source == node.id) {
                if let Some(target_index) = index_of.get_index_of(&edge.target) {
                    list.add_edge(source_index, target_index, edge.weight);
                    resolved += 1;
                }
            }
        }

        if resolved < edges.len() {
            warn!(skipped = edges.len() - resolved, "skipping edges with unresolved endpoints");
        }

        list
    }
}
