//! 演示图
//!
//! 提供与命令行 `demo` 子命令对应的固定图，0表示两顶点之间没有边。

use std::fmt::Write;

use anyhow::Result;

use serde_json::{json, Value};

use crate::config::{OutputConfig, OutputFormat};
use crate::core::error::GraphResult;
use crate::services::algorithm::{
    AllPairsResult, BellmanFord, Dijkstra, FloydWarshall, ShortestPathResult, Weight,
    WeightedGraph,
};

use super::report;

const NO_EDGE: Weight = 0;

/// 9个顶点的无向图，V7 -> V6、V8 -> V7 为单向边
pub fn dijkstra_graph() -> GraphResult<WeightedGraph> {
    WeightedGraph::from_marked_matrix(
        &[
            vec![0, 0, 1, 2, 0, 0, 0, 0, 0],
            vec![0, 0, 2, 0, 0, 3, 0, 0, 0],
            vec![1, 2, 0, 1, 3, 0, 0, 0, 0],
            vec![2, 0, 1, 0, 0, 0, 1, 0, 0],
            vec![0, 0, 3, 0, 0, 2, 0, 0, 0],
            vec![0, 3, 0, 0, 2, 0, 1, 0, 0],
            vec![0, 0, 0, 1, 0, 1, 0, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 4, 0, 0],
            vec![0, 0, 0, 0, 0, 0, 0, 2, 0],
        ],
        NO_EDGE,
    )
}

/// 在 [`dijkstra_graph`] 基础上把 V0 -> V2 改为-1，没有负权环
pub fn bellman_ford_graph() -> GraphResult<WeightedGraph> {
    WeightedGraph::from_marked_matrix(&bellman_ford_rows(2), NO_EDGE)
}

/// 再把 V3 -> V0 改为-2，形成负权环 0 -> 2 -> 3 -> 0
pub fn bellman_ford_negative_cycle_graph() -> GraphResult<WeightedGraph> {
    WeightedGraph::from_marked_matrix(&bellman_ford_rows(-2), NO_EDGE)
}

fn bellman_ford_rows(back_edge: Weight) -> Vec<Vec<Weight>> {
    vec![
        vec![0, 0, -1, 2, 0, 0, 0, 0, 0],
        vec![0, 0, 2, 0, 0, 3, 0, 0, 0],
        vec![1, 2, 0, 1, 3, 0, 0, 0, 0],
        vec![back_edge, 0, 1, 0, 0, 0, 1, 0, 0],
        vec![0, 0, 3, 0, 0, 2, 0, 0, 0],
        vec![0, 3, 0, 0, 2, 0, 1, 0, 0],
        vec![0, 0, 0, 1, 0, 1, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 4, 0, 0],
        vec![0, 0, 0, 0, 0, 0, 0, 2, 0],
    ]
}

/// 4个顶点的有向图
pub fn floyd_warshall_graph() -> GraphResult<WeightedGraph> {
    WeightedGraph::from_matrix(&[
        vec![None, Some(3), None, Some(5)],
        vec![Some(2), None, None, Some(4)],
        vec![None, Some(1), None, None],
        vec![None, None, Some(2), None],
    ])
}

/// 负权环 0 -> 1 -> 2 -> 3 -> 0，总权重为-2
pub fn floyd_warshall_negative_cycle_graph() -> GraphResult<WeightedGraph> {
    WeightedGraph::from_matrix(&[
        vec![None, Some(1), None, None],
        vec![None, None, Some(-1), None],
        vec![None, None, None, Some(-1)],
        vec![Some(-1), None, None, None],
    ])
}

enum DemoRun {
    SingleSource(&'static str, ShortestPathResult),
    AllPairs(WeightedGraph, AllPairsResult),
}

fn runs() -> Result<Vec<(&'static str, DemoRun)>> {
    let floyd_graph = floyd_warshall_graph()?;
    let floyd_cycle_graph = floyd_warshall_negative_cycle_graph()?;

    Ok(vec![
        (
            "dijkstra",
            DemoRun::SingleSource("dijkstra", Dijkstra::shortest_paths(&dijkstra_graph()?, 0)?),
        ),
        (
            "bellman-ford, graph with no negative cycle",
            DemoRun::SingleSource(
                "bellman-ford",
                BellmanFord::shortest_paths(&bellman_ford_graph()?, 0)?,
            ),
        ),
        (
            "bellman-ford, graph with negative cycle",
            DemoRun::SingleSource(
                "bellman-ford",
                BellmanFord::shortest_paths(&bellman_ford_negative_cycle_graph()?, 0)?,
            ),
        ),
        (
            "floyd-warshall, graph with no negative cycle",
            DemoRun::AllPairs(floyd_graph.clone(), FloydWarshall::shortest_paths(&floyd_graph)?),
        ),
        (
            "floyd-warshall, graph with negative cycle",
            DemoRun::AllPairs(
                floyd_cycle_graph.clone(),
                FloydWarshall::shortest_paths(&floyd_cycle_graph)?,
            ),
        ),
    ])
}

/// 依次运行三种算法并输出报告
pub fn render(output: &OutputConfig) -> Result<String> {
    let runs = runs()?;

    match output.format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (index, (title, run)) in runs.iter().enumerate() {
                if index > 0 {
                    writeln!(out)?;
                }
                writeln!(out, "{}:", title)?;
                match run {
                    DemoRun::SingleSource(_, result) => {
                        out.push_str(&report::single_source_text(result)?)
                    }
                    DemoRun::AllPairs(graph, result) => {
                        out.push_str(&report::all_pairs_text(graph, result, output.show_matrix)?)
                    }
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut sections = Vec::with_capacity(runs.len());
            for (title, run) in &runs {
                let report = match run {
                    DemoRun::SingleSource(algorithm, result) => {
                        report::single_source_json(algorithm, result)?
                    }
                    DemoRun::AllPairs(_, result) => report::all_pairs_json(result)?,
                };
                sections.push(json!({ "title": title, "report": report }));
            }
            report::to_json(&Value::Array(sections))
        }
    }
}
