// ==========================================
// 风光氢储综合评估系统 - 项目存储层
// ==========================================
// 职责: 项目目录的新建、保存、加载
// 存储: 项目目录下的 JSON 文档与 xlsx 工作簿
// ==========================================

pub mod error;
pub mod json_io;
pub mod project_store;
pub mod workbook;

pub use error::{StoreError, StoreResult};
pub use project_store::{
    is_valid_project_dir, ProjectStore, SaveReport, INDICATOR_SYSTEM_FILE, USER_INPUT_FILE,
};
pub use workbook::{ScenarioRow, ScenarioTable, WorkbookWriter, DEFAULT_SCHEME_COLUMNS};
