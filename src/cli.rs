//! CLI 参数定义

use crate::error::{EnvError, Result};
use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// agentenv - Agent 执行环境工具
#[derive(Parser, Debug)]
#[command(
    name = "agentenv",
    version,
    about = "Agent 执行环境工具",
    long_about = "加载 .env 到进程环境，并将中间数据以 JSON 保存到 .tmp/ 目录"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 工作区根目录（默认当前目录）
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 加载 .env 并初始化执行环境
    Init,

    /// 解析 .env 并打印其中的变量（不修改环境）
    Show {
        /// 输出格式 (env/json)
        #[arg(short, long, default_value = "env")]
        format: String,
    },

    /// 将 JSON 数据保存到 .tmp/<FILENAME>
    Save {
        /// 目标文件名
        filename: PathBuf,
        /// JSON 数据，缺省时从标准输入读取
        #[arg(short, long)]
        data: Option<String>,
    },
}

/// 解析输出格式
pub fn parse_format(format: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(format)
        .ok_or_else(|| EnvError::InvalidArgument(format!("未知的输出格式: {format}")))
}
