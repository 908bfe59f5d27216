pub mod error;

// 错误和结果类型
pub use error::{ConfigError, GraphError, GraphFileError, GraphResult};
