//! 多源最短路径算法模块
//!
//! 对多个起点并行执行单源最短路径算法。图是只读的，
//! 每次执行各自持有距离与前驱数组，因此无需加锁。

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::error::GraphResult;

use super::bellman_ford::BellmanFord;
use super::dijkstra::Dijkstra;
use super::floyd_warshall::AllPairsResult;
use super::graph::WeightedGraph;
use super::result::ShortestPathResult;

/// 单源最短路径算法选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SingleSourceAlgorithm {
    /// 仅支持非负权边
    Dijkstra,
    /// 支持负权边并检测负权环
    BellmanFord,
}

impl SingleSourceAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            SingleSourceAlgorithm::Dijkstra => "dijkstra",
            SingleSourceAlgorithm::BellmanFord => "bellman-ford",
        }
    }

    /// 从起点执行所选算法
    pub fn run(&self, graph: &WeightedGraph, source: usize) -> GraphResult<ShortestPathResult> {
        match self {
            SingleSourceAlgorithm::Dijkstra => Dijkstra::shortest_paths(graph, source),
            SingleSourceAlgorithm::BellmanFord => BellmanFord::shortest_paths(graph, source),
        }
    }

    /// 根据图中是否有负权边选择算法
    pub fn for_graph(graph: &WeightedGraph) -> Self {
        match graph.min_weight() {
            Some(w) if w < 0 => SingleSourceAlgorithm::BellmanFord,
            _ => SingleSourceAlgorithm::Dijkstra,
        }
    }
}

/// 多源最短路径算法结构体
pub struct MultiSourceShortestPath;

impl MultiSourceShortestPath {
    /// 对每个起点并行执行单源算法
    ///
    /// # 参数
    /// - `graph`: 只读共享的图
    /// - `sources`: 起点列表
    /// - `algorithm`: 使用的单源算法
    ///
    /// # 返回
    /// 与 `sources` 顺序一致的结果列表；任一起点出错即返回该错误
    pub fn run(
        graph: &WeightedGraph,
        sources: &[usize],
        algorithm: SingleSourceAlgorithm,
    ) -> GraphResult<Vec<ShortestPathResult>> {
        sources
            .par_iter()
            .map(|&source| algorithm.run(graph, source))
            .collect()
    }

    /// 以每个顶点为起点执行单源算法，拼成全源距离矩阵
    ///
    /// 任一起点检测到负权环时，结果的 `has_negative_cycle` 为true。
    pub fn all_pairs(
        graph: &WeightedGraph,
        algorithm: SingleSourceAlgorithm,
    ) -> GraphResult<AllPairsResult> {
        let sources: Vec<usize> = (0..graph.vertex_count()).collect();
        let results = Self::run(graph, &sources, algorithm)?;
        let has_negative_cycle = results.iter().any(|r| r.has_negative_cycle);

        Ok(AllPairsResult {
            distances: results.into_iter().map(|r| r.distances).collect(),
            has_negative_cycle,
        })
    }
}
