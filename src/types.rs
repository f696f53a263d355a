//! 核心数据结构定义

use crate::core::Workspace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// .env 中的一条赋值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
}

impl EnvEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for EnvEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Env,
    Json,
}

impl OutputFormat {
    /// 从字符串转换
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "env" => Some(OutputFormat::Env),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// 运行配置（由命令行参数构建）
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub verbose: bool,
    /// 工作区根目录，`None` 表示当前目录
    pub root: Option<PathBuf>,
}

impl Config {
    pub fn workspace(&self) -> Workspace {
        match &self.root {
            Some(root) => Workspace::new(root.clone()),
            None => Workspace::current(),
        }
    }
}
