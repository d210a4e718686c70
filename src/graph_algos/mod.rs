pub mod adjacency;
pub mod dijkstra;
pub mod priority_queue;
mod shortest_path;

pub use adjacency::{AdjacencyList, Neighbor};
pub use dijkstra::{dijkstra, Distance, ShortestPaths};
pub use priority_queue::PriorityQueue;
