// ==========================================
// 风光氢储综合评估系统 - 配置层
// ==========================================
// 职责: 用户级应用配置（默认项目目录、工作簿列数、日志、语言）
// 存储: config.json (key-value)
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, ConfigError, ConfigManager, ConfigResult};
