//! 中间产物存取：`.tmp/<filename>` 下的 JSON 文件

use crate::core::workspace::{self, Workspace};
use crate::error::Result;
use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// 将数据以 2 空格缩进的 JSON 写入 `.tmp/<filename>`
///
/// 先序列化再写文件，序列化失败时原文件保持不变。
/// 写入为整文件覆盖，同名并发写入以最后一次为准。
pub fn save_intermediate_in<T>(
    workspace: &Workspace,
    data: &T,
    filename: impl AsRef<Path>,
) -> Result<PathBuf>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string_pretty(data)?;

    workspace.ensure_scratch_dir()?;
    let path = workspace.scratch_path(filename);
    debug!("写入 {} 字节到 {}", json.len(), path.display());
    std::fs::write(&path, json)?;

    println!("Saved to {}", path.display());
    Ok(path)
}

/// 保存到当前目录下的 `.tmp/<filename>`
pub fn save_intermediate<T>(data: &T, filename: impl AsRef<Path>) -> Result<PathBuf>
where
    T: Serialize + ?Sized,
{
    save_intermediate_in(&Workspace::current(), data, filename)
}

/// 读回之前保存的中间产物
pub fn load_intermediate<T: DeserializeOwned>(
    workspace: &Workspace,
    filename: impl AsRef<Path>,
) -> Result<T> {
    let path = workspace.scratch_path(filename);
    let content = workspace::read_file(&path)?;
    Ok(serde_json::from_str(&content)?)
}
