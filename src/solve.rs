use crate::errors::SolveError;
use crate::format::format_path;
use crate::graph::{Edge, Node, Weight};
use crate::graph_algos::{dijkstra, AdjacencyList, Distance};

use std::fmt;
use serde::{Deserialize, Serialize};
use tracing::debug;


/// One display row per node
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub label: char,
    pub distance_text: String,
    pub path_text: String,
}


/// Result of a solve call, indexed by node position
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub distances: Vec<Distance<Weight>>,
    pub paths: Vec<Vec<usize>>,
    pub rows: Vec<Row>,
}

impl Solution {

    /// Row for the node with the given label
    pub fn row(&self, label: char) -> Option<&Row> {
        self.rows.iter().find(|row| row.label == label)
    }
}

/// Plain text report, one line per node
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Node Label - Distance from Source (Node Path)")?;
        for row in &self.rows {
            writeln!(f, "{} - {} {}", row.label, row.distance_text, row.path_text)?;
        }
        Ok(())
    }
}


/// Compute shortest paths from `source_index` over a snapshot of the graph
/// - the adjacency list is rebuilt on every call
/// - an empty graph yields an empty solution
/// - otherwise `source_index` must be below `nodes.len()`
pub fn solve(nodes: &[Node], edges: &[Edge], source_index: usize) -> Result<Solution, SolveError> {

    if nodes.is_empty() {
        debug!("empty graph, nothing to solve");
        return Ok(Solution::default());
    }

    debug!(nodes = nodes.len(), edges = edges.len(), source_index, "solving");

    let graph = AdjacencyList::build(nodes, edges);
    let result = dijkstra(&graph, source_index)?;
    let paths = result.paths();

    let labels: Vec<char> = nodes.iter().map(|node| node.label).collect();
    let rows = nodes.iter()
        .zip(result.distances.iter().zip(&paths))
        .map(|(node, (distance, path))| Row {
            label: node.label,
            distance_text: distance.to_string(),
            path_text: format_path(path, &labels, node.label),
        })
        .collect();

    debug!(settled = result.settled.len(), "solved");

    Ok(Solution {
        distances: result.distances,
        paths,
        rows,
    })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::graph::NodeId;

    fn nodes(labels: &str) -> Vec<Node> {
        labels.chars()
            .enumerate()
            .map(|(i, label)| Node::new(i as NodeId + 1, label, Point::new(i as f64 * 50.0, 0.0)))
            .collect()
    }

    #[test]
    fn test_triangle() {
        let edges = [Edge::new(1, 2, 2), Edge::new(2, 3, 3), Edge::new(1, 3, 10)];
        let solution = solve(&nodes("ABC"), &edges, 0).unwrap();

        assert_eq!(solution.distances, vec![Distance::Finite(0), Distance::Finite(2), Distance::Finite(5)]);
        assert_eq!(solution.row('C').unwrap().path_text, "(A -> B -> C)");
        assert_eq!(solution.row('B').unwrap().path_text, "(A -> B)");
        assert_eq!(solution.row('A').unwrap().path_text, "");
        assert_eq!(solution.paths[2], vec![0, 1]);
    }

    #[test]
    fn test_disconnected_pair() {
        let solution = solve(&nodes("AB"), &[], 0).unwrap();

        assert_eq!(solution.distances, vec![Distance::Finite(0), Distance::Infinity]);
        let b = solution.row('B').unwrap();
        assert_eq!(b.distance_text, "Infinity");
        assert_eq!(b.path_text, "");
    }

    #[test]
    fn test_single_node() {
        let solution = solve(&nodes("A"), &[], 0).unwrap();

        assert_eq!(solution.rows, vec![Row {
            label: 'A',
            distance_text: "0".to_string(),
            path_text: String::new(),
        }]);
    }

    #[test]
    fn test_four_cycle_accepts_either_tie() {
        let edges = [Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(3, 4, 1), Edge::new(4, 1, 1)];
        let solution = solve(&nodes("ABCD"), &edges, 0).unwrap();

        let texts: Vec<_> = solution.rows.iter().map(|row| row.distance_text.as_str()).collect();
        assert_eq!(texts, vec!["0", "1", "2", "1"]);
        let path = &solution.row('C').unwrap().path_text;
        assert!(path == "(A -> B -> C)" || path == "(A -> D -> C)", "unexpected path {path}");
    }

    #[test]
    fn test_source_other_than_first() {
        let edges = [Edge::new(1, 2, 4), Edge::new(2, 3, 1)];
        let solution = solve(&nodes("ABC"), &edges, 2).unwrap();

        assert_eq!(solution.row('A').unwrap().distance_text, "5");
        assert_eq!(solution.row('A').unwrap().path_text, "(C -> B -> A)");
    }

    #[test]
    fn test_rows_follow_node_order() {
        let solution = solve(&nodes("ABCD"), &[Edge::new(4, 1, 3)], 3).unwrap();
        let labels: Vec<_> = solution.rows.iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!['A', 'B', 'C', 'D']);
    }

    #[test]
    fn test_empty_graph_does_nothing() {
        assert_eq!(solve(&[], &[], 0).unwrap(), Solution::default());
    }

    #[test]
    fn test_invalid_source_index() {
        assert_eq!(
            solve(&nodes("AB"), &[], 5),
            Err(SolveError::InvalidSourceIndex { index: 5, node_count: 2 })
        );
    }

    #[test]
    fn test_oversized_weights_do_not_overflow() {
        let edges = [Edge::new(1, 2, u32::MAX), Edge::new(2, 3, 5)];
        let solution = solve(&nodes("ABC"), &edges, 0).unwrap();

        assert_eq!(solution.row('B').unwrap().distance_text, u32::MAX.to_string());
        let c = solution.row('C').unwrap();
        assert_eq!(c.distance_text, "Infinity");
        assert_eq!(c.path_text, "");
    }

    #[test]
    fn test_solve_is_repeatable() {
        let n = nodes("ABCDE");
        let edges = [Edge::new(1, 2, 3), Edge::new(2, 3, 3), Edge::new(1, 4, 9), Edge::new(3, 4, 1)];
        assert_eq!(solve(&n, &edges, 0), solve(&n, &edges, 0));
    }

    #[test]
    fn test_report_text() {
        let edges = [Edge::new(1, 2, 2), Edge::new(2, 3, 3), Edge::new(1, 3, 10)];
        let mut n = nodes("ABC");
        n.push(Node::new(4, 'D', Point::new(0.0, 0.0)));
        let report = solve(&n, &edges, 0).unwrap().to_string();

        assert_eq!(
            report,
            "Node Label - Distance from Source (Node Path)\n\
             A - 0 \n\
             B - 2 (A -> B)\n\
             C - 5 (A -> B -> C)\n\
             D - Infinity \n"
        );
    }
}
