use anyhow::Result;
use clap::ValueEnum;
use log::info;
use serde::{Deserialize, Serialize};

pub mod demo;
pub mod graph_file;
pub mod report;

use crate::config::OutputConfig;
use crate::services::algorithm::{FloydWarshall, SingleSourceAlgorithm, WeightedGraph};

/// 单条路径查询使用的算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PathAlgorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
}

/// 运行单源算法并渲染报告
pub fn run_single_source(
    graph: &WeightedGraph,
    source: usize,
    algorithm: SingleSourceAlgorithm,
    output: &OutputConfig,
) -> Result<String> {
    info!(
        "running {} from vertex {} on {} vertices",
        algorithm.name(),
        source,
        graph.vertex_count()
    );
    let result = algorithm.run(graph, source)?;
    report::single_source(algorithm.name(), &result, output)
}

/// 运行Floyd-Warshall并渲染报告
pub fn run_all_pairs(graph: &WeightedGraph, output: &OutputConfig) -> Result<String> {
    info!("running floyd-warshall on {} vertices", graph.vertex_count());
    let result = FloydWarshall::shortest_paths(graph)?;
    report::all_pairs(graph, &result, output)
}

/// 查询两点之间的最短路径
pub fn run_path(
    graph: &WeightedGraph,
    source: usize,
    target: usize,
    algorithm: PathAlgorithm,
    output: &OutputConfig,
) -> Result<String> {
    info!(
        "querying path {} -> {} with {:?}",
        source, target, algorithm
    );
    let (distance, outcome) = match algorithm {
        PathAlgorithm::Dijkstra | PathAlgorithm::BellmanFord => {
            let single = if algorithm == PathAlgorithm::Dijkstra {
                SingleSourceAlgorithm::Dijkstra
            } else {
                SingleSourceAlgorithm::BellmanFord
            };
            let result = single.run(graph, source)?;
            (result.distance_to(target)?, result.path_to(target)?)
        }
        PathAlgorithm::FloydWarshall => {
            let result = FloydWarshall::shortest_paths(graph)?;
            (
                result.distance(source, target)?,
                result.path(graph, source, target)?,
            )
        }
    };
    report::path(source, target, distance, &outcome, output)
}
