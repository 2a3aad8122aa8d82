//! 应用配置持久化
//!
//! 只保存外观与弹窗设置；任务列表本身从不落盘。

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{data_dir, load_toml};
use crate::error::Result;

/// 完成弹窗默认显示时长（秒）
pub const DEFAULT_POPUP_SECS: u64 = 3;

/// 完成弹窗最长显示时长（秒）
pub const MAX_POPUP_SECS: u64 = 60 * 60;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub popup: PopupConfig,
}

/// 主题配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 完成弹窗配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupConfig {
    #[serde(default = "default_popup_secs")]
    pub duration_secs: u64,
}

fn default_popup_secs() -> u64 {
    DEFAULT_POPUP_SECS
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_popup_secs(),
        }
    }
}

impl Config {
    pub fn popup_duration(&self) -> Duration {
        Duration::from_secs(self.popup.duration_secs.min(MAX_POPUP_SECS))
    }

    /// 命令行参数覆盖（仅本次运行生效，不写回文件）
    pub fn with_overrides(mut self, theme: Option<String>, popup_secs: Option<u64>) -> Self {
        if let Some(name) = theme {
            self.theme.name = name;
        }
        if let Some(secs) = popup_secs {
            self.popup.duration_secs = secs;
        }
        self
    }
}

/// 获取配置文件路径
pub fn config_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("config.toml"))
}

/// 加载配置（不存在或解析失败则返回默认值）
pub fn load_config() -> Config {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(e) => {
            warn!(error = %e, "config path unavailable, using defaults");
            Config::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    load_toml(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "invalid config, using defaults");
        Config::default()
    })
}
