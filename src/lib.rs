// ==========================================
// 风光氢储综合评估系统 - 核心库
// ==========================================
// 系统定位: 风光氢储耦合系统技术经济参数录入与项目文件管理
// 存储: 项目目录（User_input.json / IndicatorSystem.json / xlsx 工作簿）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 项目文件结构
pub mod domain;

// 默认结构提供层
pub mod schema;

// 界面绑定层 - 扁平表单映射
pub mod binding;

// 项目存储层
pub mod store;

// 配置层 - 应用配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 应用层 - 界面调用入口
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{IndicatorCode, IndicatorSystem, ParamRecord, ParamValue, ProjectInput};

pub use binding::{FieldMapper, FormValue, IndicatorForm, ProjectForm};

pub use store::{ProjectStore, StoreError, StoreResult};

pub use app::AppSession;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "风光氢储综合评估系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
