// ==========================================
// 风光氢储综合评估系统 - 表单校验器
// ==========================================
// 职责: 必填项 / 数值格式 / 百分比范围 / 方案容量个数
// 说明: 仅给出校验报告，保存流程不依赖校验结果
// ==========================================

use crate::binding::form::ProjectForm;
use crate::binding::value_parser::{parse_capacity_list, parse_number};
use crate::schema::issues::IssueLevel;
use serde::Serialize;

const REQUIRED_FIELDS: [&str; 3] = ["project_name", "project_life", "project_people"];

const NUMERIC_FIELDS: [&str; 9] = [
    "project_life",
    "project_people",
    "vat_rate",
    "income_tax_rate",
    "vat_additional_rate",
    "equity_ratio",
    "loan_rate",
    "nominal_discount_rate",
    "inflation_rate",
];

const PERCENTAGE_FIELDS: [&str; 7] = [
    "vat_rate",
    "income_tax_rate",
    "vat_additional_rate",
    "equity_ratio",
    "loan_rate",
    "nominal_discount_rate",
    "inflation_rate",
];

const CAPACITY_FIELDS: [&str; 6] = [
    "wt_total_capacity",
    "pv_total_capacity",
    "el_total_capacity",
    "hes_total_capacity",
    "hfc_total_capacity",
    "ess_total_capacity",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub level: IssueLevel,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<FieldViolation>,
}

impl ValidationReport {
    /// 无 Error 级问题即视为通过
    pub fn is_valid(&self) -> bool {
        !self.violations.iter().any(|v| v.level == IssueLevel::Error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldViolation> {
        self.violations.iter().filter(|v| v.level == IssueLevel::Error)
    }

    fn push(&mut self, level: IssueLevel, field: &str, message: String) {
        self.violations.push(FieldViolation {
            level,
            field: field.to_string(),
            message,
        });
    }
}

pub struct FormValidator {
    percentage_min: f64,
    percentage_max: f64,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            percentage_min: 0.0,
            percentage_max: 100.0,
        }
    }

    pub fn validate(&self, form: &ProjectForm) -> ValidationReport {
        let mut report = ValidationReport::default();

        // 必填项
        for field in REQUIRED_FIELDS {
            if form.text(field).trim().is_empty() {
                report.push(IssueLevel::Error, field, format!("缺少必填项: {}", field));
            }
        }

        // 数值格式
        for field in NUMERIC_FIELDS {
            let raw = form.text(field);
            if !raw.trim().is_empty() && parse_number(form.get(field)).is_none() {
                report.push(
                    IssueLevel::Error,
                    field,
                    format!("数值格式错误: {} = {}", field, raw),
                );
            }
        }

        // 百分比范围
        for field in PERCENTAGE_FIELDS {
            if let Some(value) = parse_number(form.get(field)) {
                if value < self.percentage_min || value > self.percentage_max {
                    report.push(
                        IssueLevel::Error,
                        field,
                        format!(
                            "百分比字段超出范围 ({}-{}): {} = {}",
                            self.percentage_min, self.percentage_max, field, value
                        ),
                    );
                }
            }
        }

        // 方案容量个数（仅提示，不阻断）
        if let Some(schemes) = parse_number(form.get("scheme_count")) {
            for field in CAPACITY_FIELDS {
                if let Some(capacities) = parse_capacity_list(form.get(field)) {
                    if capacities.len() as f64 != schemes {
                        report.push(
                            IssueLevel::Warning,
                            field,
                            format!(
                                "方案容量个数 {} 与方案数量 {} 不一致",
                                capacities.len(),
                                schemes
                            ),
                        );
                    }
                }
            }
        }

        if !report.is_valid() {
            tracing::debug!(violations = report.violations.len(), "表单校验未通过");
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ProjectForm {
        [
            ("project_name", "示范项目"),
            ("project_life", "25"),
            ("project_people", "12"),
            ("vat_rate", "13"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_complete_form_passes() {
        let report = FormValidator::new().validate(&complete_form());
        assert!(report.is_valid());
        assert!(report.violations.is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        let report = FormValidator::new().validate(&ProjectForm::new());
        let fields: Vec<&str> = report.errors().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, REQUIRED_FIELDS.to_vec());
    }

    #[test]
    fn test_numeric_format_error() {
        let mut form = complete_form();
        form.set("project_life", "二十五");
        let report = FormValidator::new().validate(&form);
        assert!(!report.is_valid());
        assert_eq!(report.errors().next().unwrap().field, "project_life");
    }

    #[test]
    fn test_percentage_out_of_range() {
        let mut form = complete_form();
        form.set("loan_rate", "120");
        let report = FormValidator::new().validate(&form);
        assert!(!report.is_valid());
        assert!(report.violations[0].message.contains("loan_rate"));
    }

    #[test]
    fn test_scheme_mismatch_is_warning() {
        let mut form = complete_form();
        form.set("scheme_count", "3").set("pv_total_capacity", "100,200");
        let report = FormValidator::new().validate(&form);
        assert!(report.is_valid());
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].level, IssueLevel::Warning);
    }
}
