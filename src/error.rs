//! 错误处理模块 (修复原则：明确抛出异常，不做隐藏的恢复)

use std::error::Error;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EnvError {
    #[error("文件IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON序列化错误: {0}")]
    Json(#[from] serde_json::Error),

    /// 非注释行缺少 `=`
    #[error(".env 第 {line} 行缺少 '=': {content}")]
    Parse { line: usize, content: String },

    /// 操作系统环境表无法容纳的键或值（空键、含 NUL）
    #[error(".env 第 {line} 行的变量无效: {key:?}")]
    InvalidKey { line: usize, key: String },

    #[error("文件不存在: {0}")]
    FileNotFound(PathBuf),

    #[error("无效参数: {0}")]
    InvalidArgument(String),
}

impl EnvError {
    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);

            if let Some(source) = self.source() {
                eprintln!("  └─ 原因: {}", source);
                let mut current = source.source();
                while let Some(next) = current {
                    eprintln!("     └─ {}", next);
                    current = next.source();
                }
            }
        } else {
            match self {
                EnvError::Io(err) => eprintln!("文件错误: {}", err),
                EnvError::Parse { line, .. } => eprintln!("解析失败: .env 第 {} 行", line),
                EnvError::FileNotFound(path) => eprintln!("文件不存在: {}", path.display()),
                _ => eprintln!("错误: {}", self),
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, EnvError>;
