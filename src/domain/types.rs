// ==========================================
// 风光氢储综合评估系统 - 领域类型定义
// ==========================================
// 职责: 参数记录、参数类型、指标极性等基础类型
// 序列化: 中文键名与原有项目文件保持一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 分时序列的固定长度（24 小时）
pub const HOURS_PER_DAY: usize = 24;

/// 结构体未声明的键，读入后原样写回
pub type ExtraFields = BTreeMap<String, serde_json::Value>;

// ==========================================
// 参数类型 (General / Particular)
// ==========================================
// General: 各方案共用一个值
// Particular: 每个方案一个值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    General,
    Particular,
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKind::General => write!(f, "General"),
            ParamKind::Particular => write!(f, "Particular"),
        }
    }
}

// ==========================================
// 参数数值
// ==========================================
// 标量 / 序列（24 点分时或多方案）/ 文本（项目名称）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Series(Vec<f64>),
    Text(String),
}

impl ParamValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_series(&self) -> Option<&[f64]> {
        match self {
            ParamValue::Series(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

// ==========================================
// ParamRecord - 参数记录（叶子节点）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamRecord {
    #[serde(rename = "单位")]
    pub unit: String,

    #[serde(rename = "类型")]
    pub kind: ParamKind,

    /// 选择状态
    #[serde(rename = "选择状态")]
    pub enabled: bool,

    /// 数值（缺省时写出为 null，不省略键）
    #[serde(rename = "数值")]
    pub value: Option<ParamValue>,

    #[serde(rename = "备注")]
    pub note: String,
}

impl ParamRecord {
    /// General 类型、选中、无默认值
    pub fn general(unit: &str) -> Self {
        Self {
            unit: unit.to_string(),
            kind: ParamKind::General,
            enabled: true,
            value: None,
            note: String::new(),
        }
    }

    /// Particular 类型（每方案一个值）
    pub fn particular(unit: &str) -> Self {
        Self {
            kind: ParamKind::Particular,
            ..Self::general(unit)
        }
    }

    pub fn with_number(mut self, value: f64) -> Self {
        self.value = Some(ParamValue::Number(value));
        self
    }

    /// 24 点常数分时序列
    pub fn with_hourly(mut self, value: f64) -> Self {
        self.value = Some(ParamValue::Series(vec![value; HOURS_PER_DAY]));
        self
    }

    pub fn number(&self) -> Option<f64> {
        self.value.as_ref().and_then(ParamValue::as_number)
    }

    pub fn series(&self) -> Option<&[f64]> {
        self.value.as_ref().and_then(ParamValue::as_series)
    }

    /// 数值缺省时取默认值
    pub fn number_or(&self, default: f64) -> f64 {
        self.number().unwrap_or(default)
    }
}

// ==========================================
// Toggle - 仅含设备选择状态的节点
// ==========================================
// 外部电网 / 外部氢网 / 各类负荷
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toggle {
    #[serde(rename = "设备选择状态")]
    pub enabled: bool,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Default for Toggle {
    fn default() -> Self {
        Self {
            enabled: true,
            extra: ExtraFields::new(),
        }
    }
}

// ==========================================
// 指标极性
// ==========================================
// 序列化为 1 / -1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Polarity {
    /// 越大越优 (+1)
    Benefit,
    /// 越小越优 (-1)
    Cost,
}

impl From<Polarity> for i8 {
    fn from(p: Polarity) -> i8 {
        match p {
            Polarity::Benefit => 1,
            Polarity::Cost => -1,
        }
    }
}

impl TryFrom<i8> for Polarity {
    type Error = String;

    fn try_from(v: i8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(Polarity::Benefit),
            -1 => Ok(Polarity::Cost),
            other => Err(format!("指标类型必须为 1 或 -1，实际 {}", other)),
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Benefit => write!(f, "+1"),
            Polarity::Cost => write!(f, "-1"),
        }
    }
}
