//! 路径重建模块
//!
//! 从单源结果的前驱数组或全源结果的距离矩阵还原最短路径上的顶点序列

use std::collections::VecDeque;

use crate::core::error::{GraphError, GraphResult};

use super::distance::Distance;
use super::floyd_warshall::AllPairsResult;
use super::graph::WeightedGraph;
use super::result::{PathOutcome, ShortestPathResult};

/// 路径重建器
pub struct PathReconstructor;

impl PathReconstructor {
    /// 根据单源最短路径结果重建从起点到目标顶点的路径
    ///
    /// 结果带有负权环标志时返回 `NegativeCycle`，目标不可达时返回 `Unreachable`。
    /// 目标为起点时路径只包含起点本身。
    pub fn reconstruct(result: &ShortestPathResult, target: usize) -> GraphResult<PathOutcome> {
        GraphError::check_vertex(target, result.vertex_count())?;

        if result.has_negative_cycle {
            return Ok(PathOutcome::NegativeCycle);
        }
        if !result.distances[target].is_reachable() {
            return Ok(PathOutcome::Unreachable);
        }

        Self::from_predecessors(&result.predecessors, target)
    }

    /// 根据前驱数组回溯路径
    ///
    /// 从目标沿前驱一直走到没有前驱的顶点（起点）。仅凭前驱数组无法区分
    /// 起点与不可达顶点，调用方需自行确认目标可达。前驱链长度超过顶点数
    /// 说明链上有环，返回 `NegativeCycle`。
    pub fn from_predecessors(
        predecessors: &[Option<usize>],
        target: usize,
    ) -> GraphResult<PathOutcome> {
        let n = predecessors.len();
        GraphError::check_vertex(target, n)?;

        let mut path = vec![target];
        let mut current = target;

        while let Some(predecessor) = predecessors[current] {
            GraphError::check_vertex(predecessor, n)?;
            if path.len() >= n {
                return Ok(PathOutcome::NegativeCycle);
            }
            path.push(predecessor);
            current = predecessor;
        }

        path.reverse();
        Ok(PathOutcome::Found(path))
    }

    /// 根据全源距离矩阵与原图重建路径
    ///
    /// 沿 [`PathReconstructor::all_pairs_tree`] 得到的前驱树回溯，结果是边数最少的最短路径。
    pub fn from_all_pairs(
        graph: &WeightedGraph,
        result: &AllPairsResult,
        source: usize,
        target: usize,
    ) -> GraphResult<PathOutcome> {
        Self::check_matrix(graph, result)?;
        GraphError::check_vertex(source, result.vertex_count())?;
        GraphError::check_vertex(target, result.vertex_count())?;

        if result.has_negative_cycle {
            return Ok(PathOutcome::NegativeCycle);
        }
        if source == target {
            return Ok(PathOutcome::Found(vec![source]));
        }
        if !result.distances[source][target].is_reachable() {
            return Ok(PathOutcome::Unreachable);
        }

        let tree = Self::all_pairs_tree(graph, result, source)?;
        if tree[target].is_none() {
            return Ok(PathOutcome::Unreachable);
        }
        Self::from_predecessors(&tree, target)
    }

    /// 以 `source` 为根的最短路径前驱树
    ///
    /// 边 (x, y) 满足 dist(source, x) + w(x, y) == dist(source, y) 时称为紧边，
    /// 最短路径上的边都是紧边。沿紧边按编号顺序做BFS，树上每条前驱链都是边数最少的最短路径。
    /// 根与不在树上的顶点前驱为None。距离矩阵带负权环标志时树没有意义。
    pub fn all_pairs_tree(
        graph: &WeightedGraph,
        result: &AllPairsResult,
        source: usize,
    ) -> GraphResult<Vec<Option<usize>>> {
        Self::check_matrix(graph, result)?;
        let n = result.vertex_count();
        GraphError::check_vertex(source, n)?;

        let dist_from_source = |v: usize| {
            if v == source {
                Distance::ZERO
            } else {
                result.distances[source][v]
            }
        };

        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut visited = vec![false; n];
        let mut queue = VecDeque::new();
        visited[source] = true;
        queue.push_back(source);

        while let Some(x) = queue.pop_front() {
            let Distance::Finite(dist_x) = dist_from_source(x) else {
                continue;
            };

            for (y, weight) in graph.neighbors(x)? {
                if visited[y] {
                    continue;
                }
                let tight = dist_x
                    .checked_add(weight)
                    .is_some_and(|d| Distance::Finite(d) == dist_from_source(y));
                if !tight {
                    continue;
                }

                visited[y] = true;
                predecessors[y] = Some(x);
                queue.push_back(y);
            }
        }

        Ok(predecessors)
    }

    fn check_matrix(graph: &WeightedGraph, result: &AllPairsResult) -> GraphResult<()> {
        if graph.vertex_count() != result.vertex_count() {
            return Err(GraphError::InvalidGraph(format!(
                "图有{}个顶点，距离矩阵为{}阶",
                graph.vertex_count(),
                result.vertex_count()
            )));
        }
        Ok(())
    }
}
