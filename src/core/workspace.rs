//! 工作区路径 (传统原则：常识性接口设计)
//!
//! `.env` 和 `.tmp/` 都相对于工作区根目录解析。

use crate::error::{EnvError, Result};
use std::path::{Path, PathBuf};

/// 环境文件名
pub const ENV_FILE: &str = ".env";

/// 中间产物目录名
pub const SCRATCH_DIR: &str = ".tmp";

/// 工作区：决定 `.env` 与 `.tmp/` 的位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// 以指定目录为根
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 以当前工作目录为根，路径保持相对形式（如 `.tmp/out.json`）
    pub fn current() -> Self {
        Self {
            root: PathBuf::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `.env` 文件路径
    pub fn env_path(&self) -> PathBuf {
        self.root.join(ENV_FILE)
    }

    /// `.tmp/` 目录路径
    pub fn scratch_dir(&self) -> PathBuf {
        self.root.join(SCRATCH_DIR)
    }

    /// `.tmp/<filename>`，不做路径穿越校验
    pub fn scratch_path(&self, filename: impl AsRef<Path>) -> PathBuf {
        self.scratch_dir().join(filename)
    }

    /// 确保 `.tmp/` 存在 (幂等操作)
    pub fn ensure_scratch_dir(&self) -> Result<PathBuf> {
        let dir = self.scratch_dir();
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::current()
    }
}

/// 读取文件内容，文件缺失时返回 [`EnvError::FileNotFound`]
pub fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(EnvError::FileNotFound(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}
