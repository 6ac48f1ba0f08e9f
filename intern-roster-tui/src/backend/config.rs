//! 配置加载
//!
//! 配置文件：`<config_dir>/intern-roster/config.json`，缺失时用默认值。
//! 除主题和 API 基地址外不持久化任何 UI 状态，重启即重置。

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 远端 API 默认基地址
pub const DEFAULT_API_BASE_URL: &str = "https://intern-management-backend-kubj.onrender.com/";

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 远端 API 基地址
    pub api_base_url: String,
    /// 主题索引：0 = Dark, 1 = Light
    pub theme: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            theme: 0,
        }
    }
}

/// 获取配置目录路径
fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("intern-roster")
}

/// 获取配置文件路径
fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// 日志文件目录（与配置同级）
pub fn log_dir() -> PathBuf {
    config_dir().join("logs")
}

/// 加载配置；文件不存在时返回默认配置
pub fn load_config() -> Result<AppConfig> {
    let path = config_file();

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_deployed_api() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.theme, 0);
    }

    #[test]
    fn partial_config_files_fall_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"theme": 1}"#).expect("valid json");
        assert_eq!(config.theme, 1);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
