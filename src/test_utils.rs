//! 测试工具模块
//!
//! 进程环境和当前目录都是全局状态，使用这些守卫的测试需要标注 `#[serial]`。

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 环境变量守卫：记录指定键的原值，释放时恢复
pub struct EnvGuard {
    saved: HashMap<String, Option<String>>,
}

impl EnvGuard {
    /// 记录给定键的当前值
    pub fn track(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| (key.to_string(), env::var(key).ok()))
            .collect();
        Self { saved }
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: &str, value: &str) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: &str) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, original) in &self.saved {
            match original {
                Some(value) => self.set_var(key, value),
                None => self.remove_var(key),
            }
        }
    }
}

/// 临时目录守卫：切换当前目录，释放时切回
pub struct TempDirGuard {
    temp_dir: TempDir,
    original_dir: PathBuf,
}

impl TempDirGuard {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let original_dir = env::current_dir().unwrap();
        env::set_current_dir(&temp_dir).unwrap();

        Self {
            temp_dir,
            original_dir,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        env::set_current_dir(&self.original_dir).unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_guard_restores_missing() {
        {
            let guard = EnvGuard::track(&["AGENTENV_GUARD_NEW"]);
            guard.set_var("AGENTENV_GUARD_NEW", "temp");
            assert_eq!(env::var("AGENTENV_GUARD_NEW").unwrap(), "temp");
        }
        assert!(env::var("AGENTENV_GUARD_NEW").is_err());
    }

    #[test]
    #[serial]
    fn test_env_guard_restores_original() {
        let outer = EnvGuard::track(&["AGENTENV_GUARD_OLD"]);
        outer.set_var("AGENTENV_GUARD_OLD", "original");
        {
            let inner = EnvGuard::track(&["AGENTENV_GUARD_OLD"]);
            inner.set_var("AGENTENV_GUARD_OLD", "changed");
        }
        assert_eq!(env::var("AGENTENV_GUARD_OLD").unwrap(), "original");
    }

    #[test]
    #[serial]
    fn test_temp_dir_guard() {
        let before = env::current_dir().unwrap();
        {
            let guard = TempDirGuard::new();
            std::fs::write("marker.txt", "x").unwrap();
            assert!(guard.path().join("marker.txt").exists());
        }
        assert_eq!(env::current_dir().unwrap(), before);
    }
}
