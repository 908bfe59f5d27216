//! 单源最短路径结果模块
//!
//! Dijkstra与Bellman-Ford共用的结果记录

use serde::Serialize;

use crate::core::error::{GraphError, GraphResult};

use super::distance::{Distance, WideWeight};
use super::path::PathReconstructor;

/// 单源最短路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult {
    /// 起点
    pub source: usize,
    /// 从起点到各顶点的最短距离
    pub distances: Vec<Distance>,
    /// 前驱顶点，起点与不可达顶点为None
    pub predecessors: Vec<Option<usize>>,
    /// 是否检测到从起点可达的负权环（仅Bellman-Ford会设置）
    pub has_negative_cycle: bool,
}

impl ShortestPathResult {
    /// 由松弛时的宽整数距离构造结果
    ///
    /// 带负权环标志时距离本身无意义，超出范围的值截断；否则无法放入 `Weight`
    /// 的距离报告为 `WeightOverflow`，边取该顶点与其前驱。
    pub(crate) fn from_wide(
        source: usize,
        distances: &[Option<WideWeight>],
        predecessors: Vec<Option<usize>>,
        has_negative_cycle: bool,
    ) -> GraphResult<Self> {
        let distances = if has_negative_cycle {
            distances
                .iter()
                .map(|&d| Distance::saturating_from_wide(d))
                .collect()
        } else {
            distances
                .iter()
                .enumerate()
                .map(|(v, &d)| {
                    Distance::from_wide(d).ok_or(GraphError::WeightOverflow {
                        from: predecessors[v].unwrap_or(source),
                        to: v,
                    })
                })
                .collect::<GraphResult<Vec<_>>>()?
        };
        Ok(Self {
            source,
            distances,
            predecessors,
            has_negative_cycle,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.distances.len()
    }

    /// 获取到目标顶点的最短距离
    pub fn distance_to(&self, target: usize) -> GraphResult<Distance> {
        GraphError::check_vertex(target, self.vertex_count())?;
        Ok(self.distances[target])
    }

    /// 重建从起点到目标顶点的路径
    pub fn path_to(&self, target: usize) -> GraphResult<PathOutcome> {
        PathReconstructor::reconstruct(self, target)
    }

    /// 所有可达顶点（按编号升序）
    pub fn reachable_vertices(&self) -> Vec<usize> {
        self.distances
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_reachable())
            .map(|(v, _)| v)
            .collect()
    }
}

/// 路径重建结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum PathOutcome {
    /// 从起点到目标的顶点序列（含两端）
    Found(Vec<usize>),
    /// 目标不可达
    Unreachable,
    /// 存在负权环，最短路径无定义
    NegativeCycle,
}

impl PathOutcome {
    pub fn vertices(&self) -> Option<&[usize]> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    pub fn into_vertices(self) -> Option<Vec<usize>> {
        match self {
            PathOutcome::Found(path) => Some(path),
            _ => None,
        }
    }
}
