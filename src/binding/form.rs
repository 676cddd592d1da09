// ==========================================
// 风光氢储综合评估系统 - 界面扁平表单
// ==========================================
// 职责: 界面控件与参数树之间的键值绑定载体
// 约定: 缺失键读取为空串 / false
// ==========================================

use crate::binding::value_parser::{format_number, format_price_list, parse_flag};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// FormValue - 表单字段值
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<f64>),
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

impl From<String> for FormValue {
    fn from(s: String) -> Self {
        FormValue::Text(s)
    }
}

impl From<bool> for FormValue {
    fn from(b: bool) -> Self {
        FormValue::Flag(b)
    }
}

impl From<f64> for FormValue {
    fn from(n: f64) -> Self {
        FormValue::Number(n)
    }
}

impl From<Vec<f64>> for FormValue {
    fn from(v: Vec<f64>) -> Self {
        FormValue::List(v)
    }
}

// ==========================================
// ProjectForm - 项目参数表单
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectForm {
    fields: BTreeMap<String, FormValue>,
}

impl ProjectForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: impl Into<FormValue>) -> &mut Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&FormValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// 以文本读取，缺失为空串
    pub fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            Some(FormValue::Text(s)) => s.clone(),
            Some(FormValue::Number(n)) => format_number(*n),
            Some(FormValue::List(v)) => format_price_list(v),
            Some(FormValue::Flag(_)) | None => String::new(),
        }
    }

    /// 以勾选状态读取，缺失为 false
    pub fn flag(&self, key: &str) -> bool {
        parse_flag(self.fields.get(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<FormValue>> FromIterator<(K, V)> for ProjectForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ==========================================
// IndicatorForm - 指标选择表单
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorForm {
    #[serde(default)]
    pub selected_indicators: Vec<String>,

    #[serde(default)]
    pub financial_indicators: Vec<String>,

    #[serde(default)]
    pub technical_indicators: Vec<String>,

    #[serde(default)]
    pub environmental_indicators: Vec<String>,
}

impl IndicatorForm {
    /// 仅含已选指标的表单
    pub fn with_selected<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected_indicators: ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_indicators.iter().any(|s| s == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default() {
        let form = ProjectForm::new();
        assert_eq!(form.text("wt_lifetime"), "");
        assert!(!form.flag("wind_turbine"));
    }

    #[test]
    fn test_form_json_shape() {
        let mut form = ProjectForm::new();
        form.set("project_name", "示范项目")
            .set("pv", true)
            .set("oxygen_price", vec![0.5, 0.6]);

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["project_name"], "示范项目");
        assert_eq!(json["pv"], true);
        assert_eq!(json["oxygen_price"][1], 0.6);

        let back: ProjectForm = serde_json::from_value(json).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn test_indicator_form_tolerates_missing_lists() {
        let form: IndicatorForm =
            serde_json::from_str(r#"{"selected_indicators": ["npv"]}"#).unwrap();
        assert!(form.is_selected("npv"));
        assert!(form.financial_indicators.is_empty());
    }
}
