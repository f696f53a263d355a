//! agentenv - Agent 执行环境工具
//!
//! 两个互相独立的操作：
//! - [`load_env`]: 把 `.env` 中的 `KEY=VALUE` 写入进程环境
//! - [`save_intermediate`]: 把数据以 JSON 写入 `.tmp/<filename>`

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use crate::core::{
    EnvLoader, Workspace, load_env, load_env_from, load_intermediate, save_intermediate,
    save_intermediate_in,
};
pub use error::{EnvError, Result};
pub use types::{Config, EnvEntry, OutputFormat};

/// 直接运行时打印的初始化信息
pub const INIT_MESSAGE: &str = "Agent Execution Environment initialized.";
