// ==========================================
// 风光氢储综合评估系统 - 默认结构提供层
// ==========================================
// 职责: 默认参数树、默认指标体系、项目工作簿清单
// ==========================================

pub mod defaults;
pub mod issues;
pub mod workbooks;

pub use defaults::{default_indicator_system, default_project_input};
pub use issues::{schema_issues, IssueLevel, SchemaIssue};
pub use workbooks::{
    output_workbook_names, scenario_workbook_names, DATA_SHEET_NAME, OUTPUT_FOLDER,
};
