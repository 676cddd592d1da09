// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置读取、默认值与落盘
// ==========================================

use h2_energy_eval::config::{config_keys, ConfigManager};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");

    let config = ConfigManager::new(&path).expect("Failed to create ConfigManager");
    assert_eq!(config.path(), Some(path.as_path()));
    assert_eq!(config.scenario_scheme_columns(), 3);
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.locale(), "zh-CN");
    assert!(!path.exists(), "loading must not create the file");
}

#[test]
fn test_get_config_or_default() {
    let mut config = ConfigManager::in_memory();
    assert_eq!(config.get_config_value(config_keys::LOG_FILTER), None);
    assert_eq!(
        config.get_config_or_default(config_keys::LOG_FILTER, "warn"),
        "warn"
    );

    config.set_config_value(config_keys::LOG_FILTER, "h2_energy_eval=debug");
    assert_eq!(config.log_filter(), "h2_energy_eval=debug");
}

#[test]
fn test_persisted_values() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
  "default_project_root": "/srv/h2/projects",
  "scenario_scheme_columns": "6",
  "locale": "en"
}"#,
    )
    .expect("write config");

    let config = ConfigManager::new(&path).expect("Failed to create ConfigManager");
    assert_eq!(
        config.default_project_root(),
        Some(PathBuf::from("/srv/h2/projects"))
    );
    assert_eq!(config.scenario_scheme_columns(), 6);
    assert_eq!(config.locale(), "en");
}

#[test]
fn test_in_memory_save_is_noop() {
    let mut config = ConfigManager::in_memory();
    config.set_config_value(config_keys::LOCALE, "en");
    assert!(config.save().is_ok());
    assert!(config.path().is_none());
}
