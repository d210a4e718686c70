use crate::errors::SolveError;
use super::adjacency::AdjacencyList;
use super::priority_queue::PriorityQueue;
use super::shortest_path::predecessor_path;

use std::{fmt::{self, Debug, Display}, ops::Add};
use num_traits::{CheckedAdd, Zero};
use serde::{Deserialize, Serialize};
use tracing::trace;


/// Total cost from the source to a node
/// Finite distances always order before Infinity
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance<C> {
    Finite(C),
    Infinity,
}

impl<C: Copy> Distance<C> {

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    pub fn finite(&self) -> Option<C> {
        match self {
            Distance::Finite(cost) => Some(*cost),
            Distance::Infinity => None,
        }
    }
}

/// Extending a distance by an edge cost; a sum that overflows `C` is Infinity
impl<C: CheckedAdd> Add<C> for Distance<C> {
    type Output = Distance<C>;

    fn add(self, rhs: C) -> Self::Output {
        match self {
            Distance::Finite(cost) => cost.checked_add(&rhs).map_or(Distance::Infinity, Distance::Finite),
            Distance::Infinity => Distance::Infinity,
        }
    }
}

impl<C: Display> Display for Distance<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(cost) => write!(f, "{cost}"),
            Distance::Infinity => f.write_str("Infinity"),
        }
    }
}


/// Output of a single-source run
/// - distances: best total cost per node index, Infinity if unreachable
/// - parents: immediate predecessor on the best path, None for the source and unreachable nodes
/// - settled: node indices in the order they were finalized
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths<C> {
    pub source: usize,
    pub distances: Vec<Distance<C>>,
    pub parents: Vec<Option<usize>>,
    pub settled: Vec<usize>,
}

impl<C: Copy> ShortestPaths<C> {

    pub fn distance(&self, index: usize) -> Option<Distance<C>> {
        self.distances.get(index).copied()
    }

    /// Node indices on the best path to `target`, source first, excluding `target`
    /// Empty for the source itself and for unreachable nodes
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        if target == self.source {
            return Vec::new();
        }
        predecessor_path(&self.parents, target)
    }

    /// Paths for every node, indexed like `distances`
    pub fn paths(&self) -> Vec<Vec<usize>> {
        (0..self.distances.len()).map(|index| self.path_to(index)).collect()
    }
}


/// Dijkstra's algorithm from `source` over every reachable node
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Weights must be non-negative. Stale queue entries are skipped once a node is settled.
/// A path whose total cost overflows `C` is treated as no path.
pub fn dijkstra<C>(graph: &AdjacencyList<C>, source: usize) -> Result<ShortestPaths<C>, SolveError>
where
    C: Zero + CheckedAdd + Ord + Copy + Debug,
{
    let node_count = graph.node_count();
    if source >= node_count {
        return Err(SolveError::InvalidSourceIndex { index: source, node_count });
    }

    let mut distances = vec![Distance::Infinity; node_count];
    let mut parents: Vec<Option<usize>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut settled = Vec::with_capacity(node_count);

    // Queue priorities are the distance at the time of insertion
    let mut queue: PriorityQueue<usize, C> = PriorityQueue::new();
    distances[source] = Distance::Finite(C::zero());
    queue.insert(source, C::zero());

    while let Some(u) = queue.extract_min() {

        // A better entry for this node was already processed
        if visited[u] {
            trace!(node = u, "skipping stale queue entry");
            continue;
        }
        // only nodes with a finite distance are ever queued
        let Distance::Finite(cost) = distances[u] else {
            continue;
        };
        visited[u] = true;
        settled.push(u);
        trace!(node = u, ?cost, "settled");

        for neighbor in graph.neighbors(u) {
            let v = neighbor.index;
            let Distance::Finite(new_cost) = Distance::Finite(cost) + neighbor.weight else {
                trace!(from = u, to = v, "edge cost overflows, skipping");
                continue;
            };

            if !visited[v] && Distance::Finite(new_cost) < distances[v] {
                trace!(from = u, to = v, ?new_cost, "relaxed");
                distances[v] = Distance::Finite(new_cost);
                parents[v] = Some(u);
                queue.insert(v, new_cost);
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distances,
        parents,
        settled,
    })
}
