//! 算法模块
//!
//! 包含带权有向图的最短路径算法实现：
//! - Dijkstra：单源，非负权
//! - Bellman-Ford：单源，支持负权，检测负权环
//! - Floyd-Warshall：全源，支持负权，检测负权环

pub mod bellman_ford;
pub mod dijkstra;
pub mod distance;
pub mod floyd_warshall;
pub mod graph;
pub mod multi_source_shortest_path;
pub mod path;
pub mod result;

// 重新导出常用算法结构体
pub use bellman_ford::BellmanFord;
pub use dijkstra::Dijkstra;
pub use distance::{Distance, Weight};
pub use floyd_warshall::{AllPairsResult, FloydWarshall};
pub use graph::{Edge, Edges, Neighbors, WeightedGraph};
pub use multi_source_shortest_path::{MultiSourceShortestPath, SingleSourceAlgorithm};
pub use path::PathReconstructor;
pub use result::{PathOutcome, ShortestPathResult};
