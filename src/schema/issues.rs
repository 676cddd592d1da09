// ==========================================
// 风光氢储综合评估系统 - 参数树结构检查
// ==========================================
// 职责: 报告分时序列长度异常、多方案序列与方案数量不一致
// 说明: 只报告，不修正；方案序列长度不做强制校验
// ==========================================

use crate::domain::project_input::ProjectInput;
use crate::domain::types::HOURS_PER_DAY;
use serde::Serialize;
use std::fmt;

/// 问题级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueLevel {
    Error,   // 阻断
    Warning, // 警告
    Info,    // 提示
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueLevel::Error => write!(f, "ERROR"),
            IssueLevel::Warning => write!(f, "WARNING"),
            IssueLevel::Info => write!(f, "INFO"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaIssue {
    pub level: IssueLevel,
    /// 参数路径，如 "价格参数/电能销售价格"
    pub path: String,
    pub message: String,
}

/// 检查参数树
pub fn schema_issues(input: &ProjectInput) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();

    for (name, record) in input.hourly_records() {
        if let Some(series) = record.series() {
            if series.len() != HOURS_PER_DAY {
                issues.push(SchemaIssue {
                    level: IssueLevel::Warning,
                    path: format!("价格参数/{}", name),
                    message: format!(
                        "分时序列应为 {} 点，实际 {} 点",
                        HOURS_PER_DAY,
                        series.len()
                    ),
                });
            }
        }
    }

    // 方案数量未填写时不比较
    let scheme_count = input
        .basic
        .scheme_count
        .number()
        .filter(|n| *n >= 1.0 && n.fract() == 0.0)
        .map(|n| n as usize);

    if let Some(expected) = scheme_count {
        for (equipment, record) in input.particular_records() {
            if let Some(series) = record.series() {
                if series.len() != expected {
                    issues.push(SchemaIssue {
                        level: IssueLevel::Info,
                        path: format!("{}/容量", equipment),
                        message: format!(
                            "方案容量个数 {} 与方案数量 {} 不一致",
                            series.len(),
                            expected
                        ),
                    });
                }
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::ParamValue;
    use crate::schema::defaults::default_project_input;

    #[test]
    fn test_defaults_have_no_issues() {
        assert!(schema_issues(&default_project_input()).is_empty());
    }

    #[test]
    fn test_short_hourly_series_reported() {
        let mut input = default_project_input();
        input.prices.hydrogen_price.value = Some(ParamValue::Series(vec![30.0; 12]));

        let issues = schema_issues(&input);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Warning);
        assert_eq!(issues[0].path, "价格参数/单位质量氢能的价格");
    }

    #[test]
    fn test_scheme_mismatch_is_info_only() {
        let mut input = default_project_input();
        input.basic.scheme_count.value = Some(ParamValue::Number(3.0));
        input.wt.total_capacity.value = Some(ParamValue::Series(vec![100.0, 200.0]));
        input.pv.total_capacity.value = Some(ParamValue::Series(vec![1.0, 2.0, 3.0]));

        let issues = schema_issues(&input);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].level, IssueLevel::Info);
        assert!(issues[0].path.starts_with("WT"));
        // 原值保持不变
        assert_eq!(input.wt.total_capacity.series().unwrap().len(), 2);
    }
}
