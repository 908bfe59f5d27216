//! 图描述文件模块
//!
//! 从TOML或JSON文件加载图。文件既可以给出边列表，也可以（仅JSON）给出
//! 以null表示无边的邻接矩阵。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{GraphError, GraphFileError, GraphResult};
use crate::services::algorithm::{Edge, Weight, WeightedGraph};

/// 图文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFileFormat {
    Toml,
    Json,
}

impl GraphFileFormat {
    /// 根据扩展名判断格式
    pub fn from_path(path: &Path) -> Result<Self, GraphFileError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(GraphFileFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(GraphFileFormat::Json),
            _ => Err(GraphFileError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 图描述
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphSpec {
    /// 顶点数；给出矩阵时可省略
    #[serde(default)]
    pub vertex_count: Option<usize>,
    /// 为true时每条边双向
    #[serde(default)]
    pub undirected: bool,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub matrix: Option<Vec<Vec<Option<Weight>>>>,
}

impl GraphSpec {
    pub fn into_graph(self) -> GraphResult<WeightedGraph> {
        match self.matrix {
            Some(matrix) => {
                if !self.edges.is_empty() {
                    return Err(GraphError::InvalidGraph(
                        "不能同时给出edges与matrix".to_string(),
                    ));
                }
                if self.undirected {
                    return Err(GraphError::InvalidGraph(
                        "undirected仅适用于边列表".to_string(),
                    ));
                }
                if let Some(n) = self.vertex_count {
                    if n != matrix.len() {
                        return Err(GraphError::InvalidGraph(format!(
                            "vertex_count为{}，矩阵为{}阶",
                            n,
                            matrix.len()
                        )));
                    }
                }
                WeightedGraph::from_matrix(&matrix)
            }
            None => {
                let vertex_count = self.vertex_count.ok_or_else(|| {
                    GraphError::InvalidGraph("边列表必须给出vertex_count".to_string())
                })?;
                if self.undirected {
                    WeightedGraph::from_undirected_edges(vertex_count, self.edges)
                } else {
                    WeightedGraph::from_edges(vertex_count, self.edges)
                }
            }
        }
    }
}

/// 解析图描述文本
pub fn parse_graph(content: &str, format: GraphFileFormat) -> Result<WeightedGraph, GraphFileError> {
    let spec: GraphSpec = match format {
        GraphFileFormat::Toml => toml::from_str(content)?,
        GraphFileFormat::Json => serde_json::from_str(content)?,
    };
    Ok(spec.into_graph()?)
}

/// 从文件加载图
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<WeightedGraph, GraphFileError> {
    let path = path.as_ref();
    let format = GraphFileFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let graph = parse_graph(&content, format)?;
    log::debug!(
        "loaded graph from {}: {} vertices, {} edges",
        path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
