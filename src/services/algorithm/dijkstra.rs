//! Dijkstra算法模块
//!
//! 贪心标号设定法求单源最短路径，要求所有边权非负

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::core::error::{GraphError, GraphResult};

use super::distance::{Distance, WideWeight, Weight};
use super::graph::WeightedGraph;
use super::result::ShortestPathResult;

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 顶点距离结构体，用于优先队列
///
/// 距离小者优先；距离相同时编号小者优先，保证选取顺序确定。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct VertexDistance {
    vertex: usize,
    distance: WideWeight,
}

impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Dijkstra {
    /// 计算从起点到所有顶点的最短路径
    ///
    /// # 参数
    /// - `graph`: 带权有向图，边权必须非负
    /// - `source`: 起点
    ///
    /// # 错误
    /// - 起点越界时返回 `OutOfRange`
    /// - 图中存在负权边时返回 `NegativeWeightNotSupported`
    /// - 某个最短距离超出 `Weight` 范围时返回 `WeightOverflow`
    pub fn shortest_paths(graph: &WeightedGraph, source: usize) -> GraphResult<ShortestPathResult> {
        let n = graph.vertex_count();
        GraphError::check_vertex(source, n)?;

        if let Some(edge) = graph.first_negative_edge() {
            return Err(GraphError::NegativeWeightNotSupported {
                from: edge.source,
                to: edge.destination,
                weight: edge.weight,
            });
        }

        let mut distances: Vec<Option<WideWeight>> = vec![None; n];
        let mut predecessors = vec![None; n];
        let mut visited = vec![false; n];
        let mut to_visit = BinaryHeap::new();
        distances[source] = Some(0);
        to_visit.push(VertexDistance {
            vertex: source,
            distance: 0,
        });

        while let Some(VertexDistance { vertex, distance }) = to_visit.pop() {
            if visited[vertex] {
                continue;
            }
            visited[vertex] = true;

            for (neighbor, weight) in graph.neighbors(vertex)? {
                if visited[neighbor] {
                    continue;
                }

                let new_distance = distance
                    .checked_add(weight.into())
                    .ok_or(GraphError::WeightOverflow {
                        from: vertex,
                        to: neighbor,
                    })?;

                if distances[neighbor].map_or(true, |d| new_distance < d) {
                    distances[neighbor] = Some(new_distance);
                    predecessors[neighbor] = Some(vertex);
                    to_visit.push(VertexDistance {
                        vertex: neighbor,
                        distance: new_distance,
                    });
                }
            }
        }

        debug!(
            "dijkstra from {}: {} of {} vertices reachable",
            source,
            visited.iter().filter(|&&v| v).count(),
            n
        );

        ShortestPathResult::from_wide(source, &distances, predecessors, false)
    }

    /// 查找从起点到目标顶点的最短路径及其长度
    ///
    /// 目标不可达时返回None
    pub fn shortest_path(
        graph: &WeightedGraph,
        source: usize,
        target: usize,
    ) -> GraphResult<Option<(Vec<usize>, Weight)>> {
        GraphError::check_vertex(target, graph.vertex_count())?;
        let result = Self::shortest_paths(graph, source)?;
        let distance = match result.distances[target] {
            Distance::Finite(d) => d,
            Distance::Unreachable => return Ok(None),
        };
        Ok(result
            .path_to(target)?
            .into_vertices()
            .map(|path| (path, distance)))
    }
}
