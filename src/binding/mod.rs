// ==========================================
// 风光氢储综合评估系统 - 界面绑定层
// ==========================================
// 职责: 扁平表单 ↔ 嵌套参数树 的映射、值解析与表单校验
// ==========================================

pub mod field_mapper;
pub mod form;
pub mod indicator_map;
pub mod validator;
pub mod value_parser;

pub use field_mapper::{Codec, FieldBinding, FieldMapper, MergeSummary, ToggleBinding};
pub use form::{FormValue, IndicatorForm, ProjectForm};
pub use indicator_map::{apply_selection, code_from_ui_id, project_selection, ui_id};
pub use validator::{FieldViolation, FormValidator, ValidationReport};
pub use value_parser::{
    format_number, format_price_list, parse_capacity_list, parse_number, parse_price_list,
};
