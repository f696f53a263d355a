//! .env 加载器
//!
//! 解析与写入分离：[`EnvLoader::read`] 是纯读取，
//! [`EnvLoader::apply`] 是整个 crate 唯一修改进程环境的地方。

use crate::config::format::dotenv::DotenvParser;
use crate::core::workspace::{self, Workspace};
use crate::error::Result;
use crate::types::EnvEntry;
use log::{debug, info};

/// .env 加载器
pub struct EnvLoader;

impl EnvLoader {
    /// 读取并解析工作区中的 `.env`
    ///
    /// 文件不存在时返回 `Ok(None)`；`.env` 存在但无法读取（如是目录）时报错。
    pub fn read(workspace: &Workspace) -> Result<Option<Vec<EnvEntry>>> {
        let path = workspace.env_path();
        if !path.exists() {
            info!("{} 不存在，跳过加载", path.display());
            return Ok(None);
        }

        let content = workspace::read_file(&path)?;
        DotenvParser::parse(&content).map(Some)
    }

    /// 将条目写入进程环境，同名键后者覆盖前者
    ///
    /// 应在其它线程启动之前调用。
    pub fn apply(entries: &[EnvEntry]) {
        for entry in entries {
            debug!("设置环境变量 {}", entry.key);
            // SAFETY: 键值已由 DotenvParser 校验（非空、无 NUL、无 '='），
            // 且调用方保证此时没有其它线程读写环境。
            unsafe {
                std::env::set_var(&entry.key, &entry.value);
            }
        }
    }

    /// 读取 `.env` 并写入进程环境，返回写入的条目数
    ///
    /// 文件解析失败时不会写入任何变量。
    pub fn load(workspace: &Workspace) -> Result<usize> {
        let Some(entries) = Self::read(workspace)? else {
            return Ok(0);
        };

        Self::apply(&entries);
        info!(
            "从 {} 加载了 {} 个变量",
            workspace.env_path().display(),
            entries.len()
        );
        Ok(entries.len())
    }
}

/// 从当前目录的 `.env` 加载环境变量
pub fn load_env() -> Result<usize> {
    EnvLoader::load(&Workspace::current())
}

/// 从指定工作区的 `.env` 加载环境变量
pub fn load_env_from(workspace: &Workspace) -> Result<usize> {
    EnvLoader::load(workspace)
}
