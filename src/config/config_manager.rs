// ==========================================
// 风光氢储综合评估系统 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: <用户配置目录>/h2-energy-eval/config.json (key-value)
// ==========================================

use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置目录名
pub const CONFIG_DIR_NAME: &str = "h2-energy-eval";
/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "config.json";

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("无法定位用户配置目录")]
    NoConfigDir,

    #[error("配置文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("配置文件格式错误 ({path}): {message}")]
    ParseError { path: String, message: String },

    #[error("配置文件写入失败 ({path}): {message}")]
    WriteError { path: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    /// 配置文件路径；None 表示仅内存
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
    /// 存在未落盘的修改
    dirty: bool,
}

impl ConfigManager {
    /// 默认配置文件路径
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// 从指定文件加载
    ///
    /// 文件不存在时返回空配置（所有键取默认值），首次 save 时创建。
    /// 非字符串的 JSON 值按其 JSON 文本保存。
    pub fn new(path: impl Into<PathBuf>) -> ConfigResult<Self> {
        let path = path.into();
        let values = if path.exists() {
            read_values(&path)?
        } else {
            tracing::debug!(path = %path.display(), "配置文件不存在，使用默认配置");
            BTreeMap::new()
        };

        Ok(Self {
            path: Some(path),
            values,
            dirty: false,
        })
    }

    /// 加载默认位置的配置文件
    pub fn load_default() -> ConfigResult<Self> {
        Self::new(Self::default_path()?)
    }

    /// 仅内存的配置（测试、无配置目录的环境）
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 读取配置值
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 读取配置值，带默认值
    pub fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .map(str::to_string)
            .unwrap_or_else(|| default.to_string())
    }

    /// 覆写配置值（仅内存，需 save 落盘）
    pub fn set_config_value(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// 写回配置文件；仅内存配置时为空操作
    pub fn save(&mut self) -> ConfigResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let write_error = |message: String| ConfigError::WriteError {
            path: path.display().to_string(),
            message,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_error(e.to_string()))?;
        }
        let body =
            serde_json::to_string_pretty(&self.values).map_err(|e| write_error(e.to_string()))?;
        fs::write(path, body).map_err(|e| write_error(e.to_string()))?;

        tracing::debug!(path = %path.display(), "配置已保存");
        self.dirty = false;
        Ok(())
    }

    // ===== 业务配置 =====

    /// 新建项目的默认父目录（默认: 用户主目录）
    pub fn default_project_root(&self) -> Option<PathBuf> {
        match self.get_config_value(config_keys::DEFAULT_PROJECT_ROOT) {
            Some(v) if !v.trim().is_empty() => Some(PathBuf::from(v.trim())),
            _ => dirs::home_dir(),
        }
    }

    /// 场景工作簿方案列数（默认 3，至少 1）
    pub fn scenario_scheme_columns(&self) -> u16 {
        let value = self.get_config_or_default(
            config_keys::SCENARIO_SCHEME_COLUMNS,
            &defaults::SCENARIO_SCHEME_COLUMNS.to_string(),
        );
        match value.trim().parse::<u16>() {
            Ok(n) if n >= 1 => n,
            _ => {
                tracing::warn!(
                    config_key = config_keys::SCENARIO_SCHEME_COLUMNS,
                    raw_value = %value,
                    "方案列数配置格式错误，使用默认值"
                );
                defaults::SCENARIO_SCHEME_COLUMNS
            }
        }
    }

    /// 日志过滤器（RUST_LOG 未设置时使用）
    pub fn log_filter(&self) -> String {
        self.get_config_or_default(config_keys::LOG_FILTER, defaults::LOG_FILTER)
    }

    /// 界面语言（zh-CN / en）
    pub fn locale(&self) -> String {
        let value = self.get_config_or_default(config_keys::LOCALE, defaults::LOCALE);
        match value.as_str() {
            "zh-CN" | "en" => value,
            _ => {
                tracing::warn!(
                    config_key = config_keys::LOCALE,
                    raw_value = %value,
                    "不支持的语言配置，使用默认语言"
                );
                defaults::LOCALE.to_string()
            }
        }
    }
}

fn read_values(path: &Path) -> ConfigResult<BTreeMap<String, String>> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let parsed: BTreeMap<String, Value> =
        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(parsed
        .into_iter()
        .map(|(k, v)| match v {
            Value::String(s) => (k, s),
            other => (k, other.to_string()),
        })
        .collect())
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 新建项目默认父目录
    pub const DEFAULT_PROJECT_ROOT: &str = "default_project_root";

    // 场景工作簿方案列数
    pub const SCENARIO_SCHEME_COLUMNS: &str = "scenario_scheme_columns";

    // 日志
    pub const LOG_FILTER: &str = "log_filter";

    // 界面语言
    pub const LOCALE: &str = "locale";
}

mod defaults {
    pub const SCENARIO_SCHEME_COLUMNS: u16 = 3;
    pub const LOG_FILTER: &str = "info";
    pub const LOCALE: &str = "zh-CN";
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_empty() {
        let config = ConfigManager::in_memory();
        assert_eq!(config.scenario_scheme_columns(), 3);
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.locale(), "zh-CN");
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let mut config = ConfigManager::in_memory();
        config.set_config_value(config_keys::SCENARIO_SCHEME_COLUMNS, "abc");
        config.set_config_value(config_keys::LOCALE, "fr");

        assert_eq!(config.scenario_scheme_columns(), 3);
        assert_eq!(config.locale(), "zh-CN");

        config.set_config_value(config_keys::SCENARIO_SCHEME_COLUMNS, "0");
        assert_eq!(config.scenario_scheme_columns(), 3);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut config = ConfigManager::new(&path).unwrap();
        config.set_config_value(config_keys::SCENARIO_SCHEME_COLUMNS, "5");
        config.set_config_value(config_keys::DEFAULT_PROJECT_ROOT, "/data/projects");
        assert!(config.is_dirty());
        config.save().unwrap();
        assert!(!config.is_dirty());

        let reloaded = ConfigManager::new(&path).unwrap();
        assert_eq!(reloaded.scenario_scheme_columns(), 5);
        assert_eq!(
            reloaded.default_project_root(),
            Some(PathBuf::from("/data/projects"))
        );
    }

    #[test]
    fn test_non_string_json_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"scenario_scheme_columns": 4}"#).unwrap();

        let config = ConfigManager::new(&path).unwrap();
        assert_eq!(config.scenario_scheme_columns(), 4);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            ConfigManager::new(&path),
            Err(ConfigError::ParseError { .. })
        ));
    }
}
