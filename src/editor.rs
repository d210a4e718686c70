//! Headless model of the graph editor
//!
//! Owns the node and edge collections, assigns ids and labels and enforces the
//! graph invariants the solver relies on: unique ids, at most one edge per
//! unordered pair, no self-loops, weights inside the configured range.
//! Pointer handling and drawing live outside this crate; `click` only models
//! what a click at a canvas position does to the graph.

use crate::config::EditorConfig;
use crate::errors::EditorError;
use crate::geometry::Point;
use crate::graph::{Edge, Node, NodeId, Weight};
use crate::solve::{solve, Solution};

use rand::Rng;
use tracing::debug;


/// What a click did to the editor
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    Placed(NodeId),   // new node at the click position
    Selected(NodeId), // first endpoint of a future edge
    Connected(Edge),  // second endpoint clicked, edge added
    AlreadyConnected { first: NodeId, second: NodeId },
    Unchanged,        // same node clicked twice, or node limit reached
}


#[derive(Clone, Debug, Default)]
pub struct GraphEditor {
    config: EditorConfig,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    selected: Option<NodeId>,
}

impl GraphEditor {

    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Smallest letter in A..Z not used by any node
    pub fn next_label(&self) -> Option<char> {
        ('A'..='Z').find(|label| self.nodes.iter().all(|node| node.label != *label))
    }

    /// Place a node, returning its id
    pub fn add_node(&mut self, position: Point) -> Result<NodeId, EditorError> {

        let limit = self.config.node_limit();
        if self.nodes.len() >= limit {
            return Err(EditorError::NodeLimitReached { limit });
        }
        let label = self.next_label().ok_or(EditorError::NodeLimitReached { limit })?;

        let id = self.nodes.len() as NodeId + 1;
        self.nodes.push(Node::new(id, label, position));
        debug!(id, %label, x = position.x, y = position.y, "node added");

        Ok(id)
    }

    /// First node whose center lies strictly within the hit radius of `point`
    pub fn node_at(&self, point: &Point) -> Option<&Node> {
        self.nodes.iter().find(|node| node.position.distance(point) < self.config.node_radius)
    }

    /// Connect two existing nodes
    pub fn add_edge(&mut self, first: NodeId, second: NodeId, weight: Weight) -> Result<Edge, EditorError> {

        for id in [first, second] {
            if self.node(id).is_none() {
                return Err(EditorError::UnknownNode(id));
            }
        }
        if first == second {
            return Err(EditorError::SelfLoop(first));
        }

        let (min, max) = self.config.weight_bounds();
        if !(min..=max).contains(&weight) {
            return Err(EditorError::WeightOutOfRange { weight, min, max });
        }

        if self.edges.iter().any(|edge| edge.connects(first, second)) {
            return Err(EditorError::DuplicateEdge { first, second });
        }

        let edge = Edge::new(first, second, weight);
        self.edges.push(edge);
        debug!(source = first, target = second, weight, "edge added");

        Ok(edge)
    }

    /// Connect two nodes with a weight drawn uniformly from the configured range
    pub fn add_random_edge<R>(&mut self, first: NodeId, second: NodeId, rng: &mut R) -> Result<Edge, EditorError>
    where
        R: Rng + ?Sized,
    {
        let (min, max) = self.config.weight_bounds();
        let weight = rng.random_range(min..=max);
        self.add_edge(first, second, weight)
    }

    /// Apply a click at `point`
    /// - on a node with nothing selected: select it
    /// - on a different node than the selected one: connect them with a random weight, clear the selection
    /// - on empty space below the node limit: place a node, clear the selection
    pub fn click<R>(&mut self, point: Point, rng: &mut R) -> Result<ClickOutcome, EditorError>
    where
        R: Rng + ?Sized,
    {
        let Some(hit) = self.node_at(&point).map(|node| node.id) else {
            if self.nodes.len() >= self.config.node_limit() {
                return Ok(ClickOutcome::Unchanged);
            }
            self.selected = None;
            return self.add_node(point).map(ClickOutcome::Placed);
        };

        match self.selected {
            None => {
                self.selected = Some(hit);
                Ok(ClickOutcome::Selected(hit))
            }
            Some(first) if first == hit => Ok(ClickOutcome::Unchanged),
            Some(first) => {
                self.selected = None;
                match self.add_random_edge(first, hit, rng) {
                    Ok(edge) => Ok(ClickOutcome::Connected(edge)),
                    Err(EditorError::DuplicateEdge { first, second }) => {
                        Ok(ClickOutcome::AlreadyConnected { first, second })
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }

    /// Choices for the source picker: solver index and label per node
    pub fn source_options(&self) -> Vec<(usize, char)> {
        self.nodes.iter().map(|node| (node.index(), node.label)).collect()
    }

    /// Shortest paths from the node at `source_index` over the current graph
    pub fn solve(&self, source_index: usize) -> Result<Solution, EditorError> {
        Ok(solve(&self.nodes, &self.edges, source_index)?)
    }

    /// Remove every node and edge
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.selected = None;
    }
}
