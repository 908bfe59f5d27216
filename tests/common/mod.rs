//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// 测试图文件目录
///
/// 每个测试独立的临时目录，drop时自动清理
pub struct TestGraphDir {
    dir: TempDir,
}

impl TestGraphDir {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    /// 写入文件并返回其路径
    pub fn write(&self, name: &str, content: &str) -> anyhow::Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }
}
