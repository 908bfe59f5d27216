//! 结果报告
//!
//! 把算法结果渲染为文本或JSON。文本格式的距离行形如
//! `Distance from vertex[0] to vertex[6] is 3: 0->3->6`。
//! 检测到负权环时两种格式都只报告负权环，不输出任何路径。

use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::config::{OutputConfig, OutputFormat};
use crate::services::algorithm::{
    AllPairsResult, Distance, PathOutcome, PathReconstructor, ShortestPathResult, WeightedGraph,
};

pub const NEGATIVE_CYCLE_MESSAGE: &str = "graph contains negative cycle";

#[derive(Debug, Serialize)]
struct SingleSourceReport<'a> {
    algorithm: &'a str,
    source: usize,
    has_negative_cycle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    vertices: Option<Vec<VertexReport>>,
}

#[derive(Debug, Serialize)]
struct VertexReport {
    vertex: usize,
    distance: Distance,
    path: Option<Vec<usize>>,
}

#[derive(Debug, Serialize)]
struct AllPairsReport<'a> {
    has_negative_cycle: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    distances: Option<&'a [Vec<Distance>]>,
}

#[derive(Debug, Serialize)]
struct PathReport<'a> {
    source: usize,
    target: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<Distance>,
    outcome: &'a PathOutcome,
}

/// 按配置的格式渲染单源结果
pub fn single_source(
    algorithm: &str,
    result: &ShortestPathResult,
    output: &OutputConfig,
) -> Result<String> {
    match output.format {
        OutputFormat::Text => single_source_text(result),
        OutputFormat::Json => to_json(&single_source_json(algorithm, result)?),
    }
}

pub fn single_source_text(result: &ShortestPathResult) -> Result<String> {
    let mut out = String::new();
    if result.has_negative_cycle {
        writeln!(out, "{}", NEGATIVE_CYCLE_MESSAGE)?;
        return Ok(out);
    }

    for vertex in result.reachable_vertices() {
        if let PathOutcome::Found(path) = result.path_to(vertex)? {
            writeln!(
                out,
                "{}",
                distance_line(result.source, vertex, result.distances[vertex], &path)
            )?;
        }
    }
    Ok(out)
}

pub fn single_source_json(algorithm: &str, result: &ShortestPathResult) -> Result<Value> {
    let vertices = if result.has_negative_cycle {
        None
    } else {
        let mut vertices = Vec::with_capacity(result.vertex_count());
        for (vertex, &distance) in result.distances.iter().enumerate() {
            vertices.push(VertexReport {
                vertex,
                distance,
                path: result.path_to(vertex)?.into_vertices(),
            });
        }
        Some(vertices)
    };

    let report = SingleSourceReport {
        algorithm,
        source: result.source,
        has_negative_cycle: result.has_negative_cycle,
        vertices,
    };
    Ok(serde_json::to_value(report)?)
}

/// 按配置的格式渲染全源结果
pub fn all_pairs(
    graph: &WeightedGraph,
    result: &AllPairsResult,
    output: &OutputConfig,
) -> Result<String> {
    match output.format {
        OutputFormat::Text => all_pairs_text(graph, result, output.show_matrix),
        OutputFormat::Json => to_json(&all_pairs_json(result)?),
    }
}

pub fn all_pairs_text(
    graph: &WeightedGraph,
    result: &AllPairsResult,
    show_matrix: bool,
) -> Result<String> {
    let mut out = String::new();
    if result.has_negative_cycle {
        writeln!(out, "{}", NEGATIVE_CYCLE_MESSAGE)?;
        return Ok(out);
    }

    if show_matrix {
        for row in &result.distances {
            let cells: Vec<String> = row.iter().map(|d| format!("{:>5}", d)).collect();
            writeln!(out, "{}", cells.join(" ").trim_end())?;
        }
        writeln!(out)?;
    }

    // 每个起点只建一棵前驱树，所有终点共用
    let n = result.vertex_count();
    for source in 0..n {
        let tree = PathReconstructor::all_pairs_tree(graph, result, source)?;
        for target in 0..n {
            let distance = result.distances[source][target];
            if !distance.is_reachable() || (target != source && tree[target].is_none()) {
                continue;
            }
            if let PathOutcome::Found(path) = PathReconstructor::from_predecessors(&tree, target)? {
                writeln!(out, "{}", distance_line(source, target, distance, &path))?;
            }
        }
    }
    Ok(out)
}

pub fn all_pairs_json(result: &AllPairsResult) -> Result<Value> {
    let report = AllPairsReport {
        has_negative_cycle: result.has_negative_cycle,
        distances: (!result.has_negative_cycle).then_some(result.distances.as_slice()),
    };
    Ok(serde_json::to_value(report)?)
}

/// 渲染单条路径查询的结果
pub fn path(
    source: usize,
    target: usize,
    distance: Distance,
    outcome: &PathOutcome,
    output: &OutputConfig,
) -> Result<String> {
    match output.format {
        OutputFormat::Text => {
            let line = match outcome {
                PathOutcome::Found(path) => distance_line(source, target, distance, path),
                PathOutcome::Unreachable => {
                    format!("vertex[{}] is unreachable from vertex[{}]", target, source)
                }
                PathOutcome::NegativeCycle => NEGATIVE_CYCLE_MESSAGE.to_string(),
            };
            Ok(format!("{}\n", line))
        }
        OutputFormat::Json => {
            let report = PathReport {
                source,
                target,
                distance: (*outcome != PathOutcome::NegativeCycle).then_some(distance),
                outcome,
            };
            to_json(&serde_json::to_value(report)?)
        }
    }
}

/// 以 `->` 连接路径顶点
pub fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("->")
}

fn distance_line(source: usize, target: usize, distance: Distance, path: &[usize]) -> String {
    format!(
        "Distance from vertex[{}] to vertex[{}] is {}: {}",
        source,
        target,
        distance,
        format_path(path)
    )
}

pub(crate) fn to_json(value: &Value) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
