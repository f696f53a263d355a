//! 核心操作 (模块原则：清晰分离的读取、写入与路径逻辑)
//!
//! - env_loader: `.env` 加载到进程环境
//! - intermediate: `.tmp/` 下的 JSON 中间产物
//! - workspace: 路径解析

pub mod env_loader;
pub mod intermediate;
pub mod workspace;

pub use env_loader::{EnvLoader, load_env, load_env_from};
pub use intermediate::{load_intermediate, save_intermediate, save_intermediate_in};
pub use workspace::Workspace;
