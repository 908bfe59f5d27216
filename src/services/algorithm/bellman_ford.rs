//! Bellman-Ford算法模块
//!
//! 包含Bellman-Ford最短路径算法实现
//! 支持负权边，可检测从起点可达的负权环

use log::{debug, warn};

use crate::core::error::{GraphError, GraphResult};

use super::distance::WideWeight;
use super::graph::{Edge, WeightedGraph};
use super::result::ShortestPathResult;

/// Bellman-Ford算法结构体
pub struct BellmanFord;

impl BellmanFord {
    /// 执行Bellman-Ford算法
    ///
    /// # 参数
    /// - `graph`: 带权有向图，支持负权边
    /// - `source`: 起点
    ///
    /// # 返回
    /// 算法结果，包含距离、前驱顶点和负权环检测结果。
    /// `has_negative_cycle` 为true时距离与前驱不可用于路径重建。
    ///
    /// # 错误
    /// - 起点越界时返回 `OutOfRange`
    /// - 没有负权环但某个最短距离超出 `Weight` 范围时返回 `WeightOverflow`
    pub fn shortest_paths(graph: &WeightedGraph, source: usize) -> GraphResult<ShortestPathResult> {
        let n = graph.vertex_count();
        GraphError::check_vertex(source, n)?;

        let mut distances: Vec<Option<WideWeight>> = vec![None; n];
        let mut predecessors = vec![None; n];
        distances[source] = Some(0);

        // 松弛操作，执行n次；某一轮没有更新时后续轮次也不会更新
        for pass in 0..n {
            let mut updated = false;

            for edge in graph.edges() {
                if let Some(new_dist) = Self::relaxed_distance(&distances, &edge)? {
                    distances[edge.destination] = Some(new_dist);
                    predecessors[edge.destination] = Some(edge.source);
                    updated = true;
                }
            }

            if !updated {
                debug!("bellman-ford from {}: converged after {} passes", source, pass + 1);
                break;
            }
        }

        // 检测负权环
        let mut has_negative_cycle = false;
        for edge in graph.edges() {
            if Self::relaxed_distance(&distances, &edge)?.is_some() {
                warn!(
                    "bellman-ford from {}: negative cycle detected at edge {} -> {}",
                    source, edge.source, edge.destination
                );
                has_negative_cycle = true;
                break;
            }
        }

        ShortestPathResult::from_wide(source, &distances, predecessors, has_negative_cycle)
    }

    /// 若经该边可缩短终点距离，返回新的距离
    fn relaxed_distance(
        distances: &[Option<WideWeight>],
        edge: &Edge,
    ) -> GraphResult<Option<WideWeight>> {
        let Some(dist_u) = distances[edge.source] else {
            return Ok(None);
        };

        let new_dist = dist_u
            .checked_add(edge.weight.into())
            .ok_or(GraphError::WeightOverflow {
                from: edge.source,
                to: edge.destination,
            })?;

        match distances[edge.destination] {
            Some(dist_v) if dist_v <= new_dist => Ok(None),
            _ => Ok(Some(new_dist)),
        }
    }

    /// 查找图中任意一个负权环（如果存在）
    ///
    /// 所有顶点初始距离为0，相当于从一个连向全部顶点的虚拟起点出发，
    /// 因此不要求负权环从某个特定起点可达。返回的顶点序列按环上的前进方向排列。
    pub fn find_negative_cycle(graph: &WeightedGraph) -> GraphResult<Option<Vec<usize>>> {
        let n = graph.vertex_count();
        let mut distances: Vec<Option<WideWeight>> = vec![Some(0); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut last_updated = None;

        // 执行n次松弛，第n次仍有更新说明存在负权环
        for _ in 0..n {
            last_updated = None;

            for edge in graph.edges() {
                if let Some(new_dist) = Self::relaxed_distance(&distances, &edge)? {
                    distances[edge.destination] = Some(new_dist);
                    predecessors[edge.destination] = Some(edge.source);
                    last_updated = Some(edge.destination);
                }
            }

            if last_updated.is_none() {
                return Ok(None);
            }
        }

        let Some(mut current) = last_updated else {
            return Ok(None);
        };

        // 回溯n步，确保进入环
        for _ in 0..n {
            match predecessors[current] {
                Some(pred) => current = pred,
                None => return Ok(None),
            }
        }

        let cycle_start = current;
        let mut cycle = vec![cycle_start];
        while let Some(pred) = predecessors[current] {
            if pred == cycle_start {
                break;
            }
            cycle.push(pred);
            current = pred;
        }

        cycle.reverse();
        Ok(Some(cycle))
    }

    /// 获取从起点可达的所有顶点
    pub fn reachable_vertices(graph: &WeightedGraph, source: usize) -> GraphResult<Vec<usize>> {
        Ok(Self::shortest_paths(graph, source)?.reachable_vertices())
    }
}
