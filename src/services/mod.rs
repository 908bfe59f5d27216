//! 服务层模块
//!
//! 包含最短路径算法服务

pub mod algorithm;

// 重新导出常用服务
pub use algorithm::*;
