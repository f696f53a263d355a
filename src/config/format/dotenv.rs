//! .env 格式解析器 (简单原则：透明的文本解析)

use crate::error::{EnvError, Result};
use crate::types::EnvEntry;

/// .env 格式解析器
pub struct DotenvParser;

impl DotenvParser {
    /// 解析 .env 文件内容
    ///
    /// 规则：
    /// - 忽略空行（trim 后为空）
    /// - 忽略以 # 开头的注释行；判断基于原始行，缩进的 `#` 不算注释
    /// - 其余行 trim 后按第一个 `=` 拆分为 KEY 和 VALUE，两侧不再 trim
    /// - 不支持引号、转义和多行值
    ///
    /// # Errors
    ///
    /// 非注释行缺少 `=` 时返回 [`EnvError::Parse`]；
    /// 空键或包含 NUL 的键值返回 [`EnvError::InvalidKey`]。
    pub fn parse(content: &str) -> Result<Vec<EnvEntry>> {
        let mut entries = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();

            // 跳过空行和顶格注释
            if line.is_empty() || raw.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(EnvError::Parse {
                    line: index + 1,
                    content: line.to_string(),
                });
            };

            if key.is_empty() || key.contains('\0') || value.contains('\0') {
                return Err(EnvError::InvalidKey {
                    line: index + 1,
                    key: key.to_string(),
                });
            }

            entries.push(EnvEntry::new(key, value));
        }

        Ok(entries)
    }

    /// 序列化为 .env 格式
    #[must_use]
    pub fn serialize(entries: &[EnvEntry]) -> String {
        entries
            .iter()
            .map(EnvEntry::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
