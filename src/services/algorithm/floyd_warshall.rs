//! Floyd-Warshall算法模块
//!
//! 包含Floyd-Warshall全源最短路径算法实现
//! 支持负权边，可检测任意负权环，时间复杂度O(V^3)

use log::{debug, warn};
use serde::Serialize;

use crate::core::error::{GraphError, GraphResult};

use super::distance::{Distance, WideWeight, Weight};
use super::graph::WeightedGraph;
use super::path::PathReconstructor;
use super::result::PathOutcome;

/// Floyd-Warshall算法结构体
pub struct FloydWarshall;

/// 全源最短路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllPairsResult {
    /// 距离矩阵，distances[i][j] 为 i 到 j 的最短距离
    pub distances: Vec<Vec<Distance>>,
    /// 是否存在负权环（某顶点到自身的距离小于0）
    pub has_negative_cycle: bool,
}

impl AllPairsResult {
    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// 获取从u到v的最短距离
    pub fn distance(&self, u: usize, v: usize) -> GraphResult<Distance> {
        GraphError::check_vertex(u, self.vertex_count())?;
        GraphError::check_vertex(v, self.vertex_count())?;
        Ok(self.distances[u][v])
    }

    /// 重建从u到v的最短路径
    pub fn path(&self, graph: &WeightedGraph, u: usize, v: usize) -> GraphResult<PathOutcome> {
        PathReconstructor::from_all_pairs(graph, self, u, v)
    }

    /// 计算顶点的偏心距（到最远可达顶点的距离）
    ///
    /// 存在负权环或没有其他可达顶点时返回None
    pub fn eccentricity(&self, vertex: usize) -> GraphResult<Option<Weight>> {
        GraphError::check_vertex(vertex, self.vertex_count())?;
        if self.has_negative_cycle {
            return Ok(None);
        }
        Ok(self.distances[vertex]
            .iter()
            .enumerate()
            .filter(|(v, _)| *v != vertex)
            .filter_map(|(_, d)| d.value())
            .max())
    }

    /// 获取图的直径（最长的最短路径）
    pub fn diameter(&self) -> Option<Weight> {
        if self.has_negative_cycle {
            return None;
        }
        self.distances
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(Distance::value)
            .max()
    }

    /// 获取图的半径（最小偏心距）
    pub fn radius(&self) -> Option<Weight> {
        self.eccentricities().into_iter().flatten().min()
    }

    /// 获取图的中心（偏心距最小的顶点，相同时取编号最小者）
    pub fn center(&self) -> Option<usize> {
        self.eccentricities()
            .into_iter()
            .enumerate()
            .filter_map(|(v, e)| e.map(|e| (e, v)))
            .min()
            .map(|(_, v)| v)
    }

    fn eccentricities(&self) -> Vec<Option<Weight>> {
        (0..self.vertex_count())
            .map(|v| self.eccentricity(v).ok().flatten())
            .collect()
    }
}

impl FloydWarshall {
    /// 执行Floyd-Warshall算法
    ///
    /// # 参数
    /// - `graph`: 带权有向图，支持负权边
    ///
    /// # 返回
    /// 算法结果，包含距离矩阵与负权环检测结果。
    /// 检测到负权环时立即停止，此时的距离矩阵不可信。
    ///
    /// # 错误
    /// 没有负权环但某个最短距离超出 `Weight` 范围时返回 `WeightOverflow`
    pub fn shortest_paths(graph: &WeightedGraph) -> GraphResult<AllPairsResult> {
        let n = graph.vertex_count();
        let mut distances = Self::initial_distances(graph)?;

        for k in 0..n {
            for i in 0..n {
                if distances[i][k].is_some() {
                    for j in 0..n {
                        let (Some(d_ik), Some(d_kj)) = (distances[i][k], distances[k][j]) else {
                            continue;
                        };

                        let new_dist = d_ik
                            .checked_add(d_kj)
                            .ok_or(GraphError::WeightOverflow { from: i, to: j })?;

                        if distances[i][j].map_or(true, |d_ij| new_dist < d_ij) {
                            distances[i][j] = Some(new_dist);
                        }
                    }
                }

                // 检查对角线是否出现负值
                if distances[i][i].is_some_and(|d| d < 0) {
                    warn!("floyd-warshall: negative cycle through vertex {} (k = {})", i, k);
                    return Ok(AllPairsResult {
                        distances: Self::saturated(&distances),
                        has_negative_cycle: true,
                    });
                }
            }
        }

        debug!("floyd-warshall: computed {} x {} distance matrix", n, n);

        Ok(AllPairsResult {
            distances: Self::narrowed(&distances)?,
            has_negative_cycle: false,
        })
    }

    /// 初始化距离矩阵：有边取边权，无边不可达
    ///
    /// 对角线取0与自环权重中的较小者：正权自环不会比空路径更短，负权自环即负权环。
    fn initial_distances(graph: &WeightedGraph) -> GraphResult<Vec<Vec<Option<WideWeight>>>> {
        let n = graph.vertex_count();
        let mut distances = vec![vec![None; n]; n];

        for (i, row) in distances.iter_mut().enumerate() {
            row[i] = Some(0);
            for (j, weight) in graph.neighbors(i)? {
                let weight = WideWeight::from(weight);
                row[j] = if j == i { Some(weight.min(0)) } else { Some(weight) };
            }
        }

        Ok(distances)
    }

    fn narrowed(distances: &[Vec<Option<WideWeight>>]) -> GraphResult<Vec<Vec<Distance>>> {
        distances
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, &d)| {
                        Distance::from_wide(d).ok_or(GraphError::WeightOverflow { from: i, to: j })
                    })
                    .collect::<GraphResult<Vec<_>>>()
            })
            .collect()
    }

    fn saturated(distances: &[Vec<Option<WideWeight>>]) -> Vec<Vec<Distance>> {
        distances
            .iter()
            .map(|row| row.iter().map(|&d| Distance::saturating_from_wide(d)).collect())
            .collect()
    }

    /// 计算图的传递闭包（可达性矩阵）
    pub fn transitive_closure(graph: &WeightedGraph) -> Vec<Vec<bool>> {
        let n = graph.vertex_count();
        let mut reachable = vec![vec![false; n]; n];

        for (i, row) in reachable.iter_mut().enumerate() {
            row[i] = true;
        }
        for edge in graph.edges() {
            reachable[edge.source][edge.destination] = true;
        }

        // Warshall算法
        for k in 0..n {
            for i in 0..n {
                if !reachable[i][k] {
                    continue;
                }
                for j in 0..n {
                    if reachable[k][j] {
                        reachable[i][j] = true;
                    }
                }
            }
        }

        reachable
    }
}
