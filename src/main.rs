//! agentenv 主程序入口
//!
//! 设计原则：
//! - 入口代码简洁，逻辑委托给库
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use agentenv::cli::{self, Cli, Commands};
use agentenv::config::format::dotenv::DotenvParser;
use agentenv::{Config, EnvLoader, INIT_MESSAGE, OutputFormat, Result};
use clap::Parser;
use log::debug;
use std::io::Read;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = init_config(&cli);
    debug!("工作区: {:?}", config.workspace());

    if let Err(e) = run_command(cli.command, &config) {
        e.report(config.verbose);
        std::process::exit(1);
    }
}

/// 初始化配置
fn init_config(cli: &Cli) -> Config {
    Config {
        verbose: cli.verbose,
        root: cli.root.clone(),
    }
}

/// 运行具体命令
fn run_command(command: Option<Commands>, config: &Config) -> Result<()> {
    let workspace = config.workspace();

    match command {
        None => println!("{INIT_MESSAGE}"),

        Some(Commands::Init) => {
            let count = EnvLoader::load(&workspace)?;
            if config.verbose {
                println!("✓ 从 {} 加载了 {} 个变量", workspace.env_path().display(), count);
            }
            println!("{INIT_MESSAGE}");
        }

        Some(Commands::Show { format }) => {
            let output_format = cli::parse_format(&format)?;
            let entries = EnvLoader::read(&workspace)?.unwrap_or_default();

            match output_format {
                OutputFormat::Env => {
                    if !entries.is_empty() {
                        println!("{}", DotenvParser::serialize(&entries));
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
            }
        }

        Some(Commands::Save { filename, data }) => {
            let raw = match data {
                Some(data) => data,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let value: serde_json::Value = serde_json::from_str(&raw)?;
            agentenv::save_intermediate_in(&workspace, &value, &filename)?;
        }
    }

    Ok(())
}
