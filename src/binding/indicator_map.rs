// ==========================================
// 风光氢储综合评估系统 - 指标选择映射
// ==========================================
// 职责: 指标编码 ↔ 界面标识 双向表；选择状态的写入与读出
// 规则: 每次保存对全部指标逐一写入选择状态（在列表中即选中，否则不选）
// 额外指标: 文件中未内置的指标条目以其名称作为界面标识
// ==========================================

use crate::binding::form::IndicatorForm;
use crate::domain::indicator::{
    extra_selected, IndicatorCategory, IndicatorCode, IndicatorSystem,
};
use serde_json::Value;

/// 编码 → 界面标识
const INDICATOR_UI_IDS: [(IndicatorCode, &str); 11] = [
    (IndicatorCode::A1, "initial_investment"),
    (IndicatorCode::A2, "annual_maintenance"),
    (IndicatorCode::A3, "energy_purchase"),
    (IndicatorCode::A4, "npv"),
    (IndicatorCode::A5, "irr"),
    (IndicatorCode::A6, "dpp"),
    (IndicatorCode::B1, "energy_supply_ratio"),
    (IndicatorCode::B2, "battery_utilization"),
    (IndicatorCode::B3, "hydrogen_utilization"),
    (IndicatorCode::B4, "equivalent_hours"),
    (IndicatorCode::C1, "renewable_ratio"),
];

pub fn ui_id(code: IndicatorCode) -> &'static str {
    INDICATOR_UI_IDS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, id)| *id)
        .unwrap_or_default()
}

pub fn code_from_ui_id(id: &str) -> Option<IndicatorCode> {
    INDICATOR_UI_IDS
        .iter()
        .find(|(_, ui)| *ui == id)
        .map(|(c, _)| *c)
}

fn category_ids(system: &IndicatorSystem, category: IndicatorCategory) -> Vec<String> {
    INDICATOR_UI_IDS
        .iter()
        .filter(|(c, _)| c.category() == category)
        .map(|(_, id)| id.to_string())
        .chain(system.extra_indicators(category).keys().cloned())
        .collect()
}

const ALL_CATEGORIES: [IndicatorCategory; 3] = [
    IndicatorCategory::Financial,
    IndicatorCategory::Technical,
    IndicatorCategory::Environmental,
];

/// 写入选择状态（全量覆盖）
///
/// 返回未识别的界面标识
pub fn apply_selection(system: &mut IndicatorSystem, form: &IndicatorForm) -> Vec<String> {
    for record in system.records_mut() {
        record.selected = form.is_selected(ui_id(record.code));
    }
    for (name, entry) in system.extra_indicators_mut() {
        if let Some(fields) = entry.as_object_mut() {
            fields.insert("选择状态".to_string(), Value::Bool(form.is_selected(name)));
        }
    }

    form.selected_indicators
        .iter()
        .filter(|id| {
            code_from_ui_id(id).is_none()
                && !ALL_CATEGORIES
                    .into_iter()
                    .any(|c| system.extra_indicators(c).contains_key(id.as_str()))
        })
        .cloned()
        .collect()
}

/// 读出选择状态
pub fn project_selection(system: &IndicatorSystem) -> IndicatorForm {
    let extras = ALL_CATEGORIES.into_iter().flat_map(|c| {
        system
            .extra_indicators(c)
            .iter()
            .filter(|(_, entry)| extra_selected(entry))
            .map(|(name, _)| name.clone())
    });

    IndicatorForm {
        selected_indicators: system
            .selected_codes()
            .into_iter()
            .map(|c| ui_id(c).to_string())
            .chain(extras)
            .collect(),
        financial_indicators: category_ids(system, IndicatorCategory::Financial),
        technical_indicators: category_ids(system, IndicatorCategory::Technical),
        environmental_indicators: category_ids(system, IndicatorCategory::Environmental),
    }
}
