//! graphpath - shortest path algorithms over weighted directed graphs
//!
//! Provides Dijkstra, Bellman-Ford and Floyd-Warshall over a dense graph of
//! vertices `0..V`, together with path reconstruction, negative cycle
//! detection and a small command line front end.

pub mod api;
pub mod config;
pub mod core;
pub mod services;
pub mod utils;

pub use crate::core::error::{GraphError, GraphResult};
pub use services::algorithm::{
    AllPairsResult, BellmanFord, Dijkstra, Distance, Edge, FloydWarshall,
    MultiSourceShortestPath, PathOutcome, PathReconstructor, ShortestPathResult,
    SingleSourceAlgorithm, Weight, WeightedGraph,
};
