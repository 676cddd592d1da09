// ==========================================
// 风光氢储综合评估系统 - 评估指标体系
// ==========================================
// 对应文件: IndicatorSystem.json
// 职责: 财务/技术/环境三类指标记录与编码表
// ==========================================

use crate::domain::types::{ExtraFields, Polarity};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// ==========================================
// 指标编码 (A1..A6 / B1..B4 / C1)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndicatorCode {
    A1, // 初始投资成本
    A2, // 年运维成本
    A3, // 能源外购成本
    A4, // 净现值
    A5, // 内部收益率
    A6, // 投资回收期
    B1, // 能源网供应占比
    B2, // 电储能利用水平
    B3, // 氢储能利用水平
    B4, // 等效可利用小时数
    C1, // 可再生能源供应占比
}

/// 指标类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorCategory {
    Financial,
    Technical,
    Environmental,
}

impl IndicatorCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            IndicatorCategory::Financial => "财务效益指标",
            IndicatorCategory::Technical => "技术效益指标",
            IndicatorCategory::Environmental => "环境效益指标",
        }
    }
}

impl IndicatorCode {
    pub const ALL: [IndicatorCode; 11] = [
        IndicatorCode::A1,
        IndicatorCode::A2,
        IndicatorCode::A3,
        IndicatorCode::A4,
        IndicatorCode::A5,
        IndicatorCode::A6,
        IndicatorCode::B1,
        IndicatorCode::B2,
        IndicatorCode::B3,
        IndicatorCode::B4,
        IndicatorCode::C1,
    ];

    /// 指标中文名称（即 JSON 中的键）
    pub fn display_name(self) -> &'static str {
        match self {
            IndicatorCode::A1 => "初始投资成本",
            IndicatorCode::A2 => "年运维成本",
            IndicatorCode::A3 => "能源外购成本",
            IndicatorCode::A4 => "净现值",
            IndicatorCode::A5 => "内部收益率",
            IndicatorCode::A6 => "投资回收期",
            IndicatorCode::B1 => "能源网供应占比",
            IndicatorCode::B2 => "电储能利用水平",
            IndicatorCode::B3 => "氢储能利用水平",
            IndicatorCode::B4 => "等效可利用小时数",
            IndicatorCode::C1 => "可再生能源供应占比",
        }
    }

    pub fn category(self) -> IndicatorCategory {
        match self {
            IndicatorCode::A1
            | IndicatorCode::A2
            | IndicatorCode::A3
            | IndicatorCode::A4
            | IndicatorCode::A5
            | IndicatorCode::A6 => IndicatorCategory::Financial,
            IndicatorCode::B1 | IndicatorCode::B2 | IndicatorCode::B3 | IndicatorCode::B4 => {
                IndicatorCategory::Technical
            }
            IndicatorCode::C1 => IndicatorCategory::Environmental,
        }
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.display_name() == name)
    }
}

impl fmt::Display for IndicatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

// ==========================================
// IndicatorRecord - 指标记录
// ==========================================
// 数值/规范化值/得分/权重字段仅占位，本系统不计算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRecord {
    #[serde(rename = "指标编码")]
    pub code: IndicatorCode,

    #[serde(rename = "指标类型")]
    pub polarity: Polarity,

    #[serde(rename = "单位")]
    pub unit: String,

    #[serde(rename = "选择状态")]
    pub selected: bool,

    #[serde(rename = "数值")]
    pub value: Option<f64>,

    #[serde(rename = "规范化值")]
    pub normalized_value: Option<f64>,

    #[serde(rename = "综合评估得分分量")]
    pub score_component: Option<f64>,

    #[serde(rename = "critic")]
    pub critic: Option<f64>,

    #[serde(rename = "demantel")]
    pub demantel: Option<f64>,

    #[serde(rename = "组合权值")]
    pub combined_weight: Option<f64>,

    #[serde(rename = "备注")]
    pub note: String,
}

impl IndicatorRecord {
    pub fn new(code: IndicatorCode, polarity: Polarity, unit: &str, selected: bool) -> Self {
        Self {
            code,
            polarity,
            unit: unit.to_string(),
            selected,
            value: None,
            normalized_value: None,
            score_component: None,
            critic: None,
            demantel: None,
            combined_weight: None,
            note: String::new(),
        }
    }
}

// ==========================================
// 指标类别
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialIndicators {
    #[serde(rename = "初始投资成本")]
    pub initial_investment: IndicatorRecord,
    #[serde(rename = "年运维成本")]
    pub annual_maintenance: IndicatorRecord,
    #[serde(rename = "能源外购成本")]
    pub energy_purchase: IndicatorRecord,
    #[serde(rename = "净现值")]
    pub npv: IndicatorRecord,
    #[serde(rename = "内部收益率")]
    pub irr: IndicatorRecord,
    #[serde(rename = "投资回收期")]
    pub dpp: IndicatorRecord,
    /// 未内置的指标条目（键为指标名称）
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    #[serde(rename = "能源网供应占比")]
    pub energy_supply_ratio: IndicatorRecord,
    #[serde(rename = "电储能利用水平")]
    pub battery_utilization: IndicatorRecord,
    #[serde(rename = "氢储能利用水平")]
    pub hydrogen_utilization: IndicatorRecord,
    #[serde(rename = "等效可利用小时数")]
    pub equivalent_hours: IndicatorRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalIndicators {
    #[serde(rename = "可再生能源供应占比")]
    pub renewable_ratio: IndicatorRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

// ==========================================
// IndicatorSystem - 指标体系（根节点）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSystem {
    #[serde(rename = "财务效益指标")]
    pub financial: FinancialIndicators,

    #[serde(rename = "技术效益指标")]
    pub technical: TechnicalIndicators,

    #[serde(rename = "环境效益指标")]
    pub environmental: EnvironmentalIndicators,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl IndicatorSystem {
    /// 按编码顺序遍历全部指标
    pub fn records(&self) -> [&IndicatorRecord; 11] {
        [
            &self.financial.initial_investment,
            &self.financial.annual_maintenance,
            &self.financial.energy_purchase,
            &self.financial.npv,
            &self.financial.irr,
            &self.financial.dpp,
            &self.technical.energy_supply_ratio,
            &self.technical.battery_utilization,
            &self.technical.hydrogen_utilization,
            &self.technical.equivalent_hours,
            &self.environmental.renewable_ratio,
        ]
    }

    pub fn records_mut(&mut self) -> [&mut IndicatorRecord; 11] {
        [
            &mut self.financial.initial_investment,
            &mut self.financial.annual_maintenance,
            &mut self.financial.energy_purchase,
            &mut self.financial.npv,
            &mut self.financial.irr,
            &mut self.financial.dpp,
            &mut self.technical.energy_supply_ratio,
            &mut self.technical.battery_utilization,
            &mut self.technical.hydrogen_utilization,
            &mut self.technical.equivalent_hours,
            &mut self.environmental.renewable_ratio,
        ]
    }

    pub fn get(&self, code: IndicatorCode) -> Option<&IndicatorRecord> {
        self.records().into_iter().find(|r| r.code == code)
    }

    /// 已选中指标的编码
    pub fn selected_codes(&self) -> Vec<IndicatorCode> {
        self.records()
            .into_iter()
            .filter(|r| r.selected)
            .map(|r| r.code)
            .collect()
    }

    /// 某类别下文件中额外出现的指标条目
    pub fn extra_indicators(&self, category: IndicatorCategory) -> &ExtraFields {
        match category {
            IndicatorCategory::Financial => &self.financial.extra,
            IndicatorCategory::Technical => &self.technical.extra,
            IndicatorCategory::Environmental => &self.environmental.extra,
        }
    }

    pub fn extra_indicators_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.financial
            .extra
            .iter_mut()
            .chain(self.technical.extra.iter_mut())
            .chain(self.environmental.extra.iter_mut())
    }
}

/// 额外指标条目的选择状态；非对象或缺键视为未选
pub fn extra_selected(entry: &Value) -> bool {
    entry
        .get("选择状态")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}
