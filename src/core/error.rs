//! 统一错误处理 for GraphPath
//!
//! ## 设计理念
//!
//! 1. **结构性错误即错误**：顶点越界、负权边、权重溢出等在调用边界立即失败
//! 2. **算法结论即数据**：负权环与不可达不是错误，而是结果中的标志位与哨兵值
//! 3. **统一接口**：`GraphResult<T>` 提供统一的返回类型，简化错误传播

use thiserror::Error;

use crate::services::algorithm::Weight;

/// 图算法错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("顶点越界: {vertex} 不在 [0, {vertex_count}) 范围内")]
    OutOfRange { vertex: usize, vertex_count: usize },

    #[error("Dijkstra不支持负权边: {from} -> {to} 权重为 {weight}，请改用Bellman-Ford")]
    NegativeWeightNotSupported { from: usize, to: usize, weight: Weight },

    #[error("松弛边 {from} -> {to} 时权重溢出")]
    WeightOverflow { from: usize, to: usize },

    #[error("重复边: {from} -> {to}，不支持多重图")]
    DuplicateEdge { from: usize, to: usize },

    #[error("无效的图: {0}")]
    InvalidGraph(String),
}

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    /// 校验顶点是否在范围内
    pub fn check_vertex(vertex: usize, vertex_count: usize) -> GraphResult<()> {
        if vertex >= vertex_count {
            return Err(GraphError::OutOfRange {
                vertex,
                vertex_count,
            });
        }
        Ok(())
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("配置序列化错误: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 图描述文件加载错误
#[derive(Error, Debug)]
pub enum GraphFileError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML解析错误: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("图构造错误: {0}")]
    Graph(#[from] GraphError),

    #[error("不支持的图文件格式: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_vertex() {
        assert!(GraphError::check_vertex(2, 3).is_ok());
        assert_eq!(
            GraphError::check_vertex(3, 3),
            Err(GraphError::OutOfRange {
                vertex: 3,
                vertex_count: 3
            })
        );
    }

    #[test]
    fn test_graph_error_into_file_error() {
        let err: GraphFileError = GraphError::InvalidGraph("非方阵".to_string()).into();
        assert!(matches!(err, GraphFileError::Graph(GraphError::InvalidGraph(_))));
        assert!(err.to_string().contains("非方阵"));
    }

    #[test]
    fn test_negative_weight_message() {
        let err = GraphError::NegativeWeightNotSupported {
            from: 0,
            to: 2,
            weight: -1,
        };
        let msg = err.to_string();
        assert!(msg.contains("0 -> 2"));
        assert!(msg.contains("-1"));
    }
}
