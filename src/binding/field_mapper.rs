// ==========================================
// 风光氢储综合评估系统 - 字段映射器实现
// ==========================================
// 职责: 界面字段键 ↔ 参数树叶子的双向映射 + 类型转换
// 形式: 数据驱动的绑定表（界面键 → 参数路径 → 编解码方式）
// ==========================================

use crate::binding::form::{FormValue, ProjectForm};
use crate::binding::value_parser::{
    format_param_value, parse_capacity_list, parse_flag, parse_number, parse_price_list,
    parse_text,
};
use crate::domain::project_input::ProjectInput;
use crate::domain::types::{ParamRecord, ParamValue};

/// 叶子选择状态的伴随键后缀，如 `site_cost_enabled`
pub const ENABLED_SUFFIX: &str = "_enabled";

/// 仅在 `<键>_enabled` 勾选时才写入数值的叶子
const VALUE_GATED_BY_ENABLED: [&str; 1] = ["inflation_rate"];

pub type ParamGetter = fn(&ProjectInput) -> &ParamRecord;
pub type ParamGetterMut = fn(&mut ProjectInput) -> &mut ParamRecord;

// ==========================================
// Codec - 字段编解码方式
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// 标量数值
    Number,
    /// 文本（项目名称）
    Text,
    /// 24 点分时序列
    HourlySeries,
    /// 多方案序列（长度不限）
    SchemeSeries,
}

impl Codec {
    pub fn decode(self, value: Option<&FormValue>) -> Option<ParamValue> {
        match self {
            Codec::Number => parse_number(value).map(ParamValue::Number),
            Codec::Text => parse_text(value).map(ParamValue::Text),
            Codec::HourlySeries => parse_price_list(value).map(ParamValue::Series),
            Codec::SchemeSeries => parse_capacity_list(value).map(ParamValue::Series),
        }
    }
}

// ==========================================
// 绑定表条目
// ==========================================

/// 参数叶子绑定
pub struct FieldBinding {
    pub ui_key: &'static str,
    pub codec: Codec,
    /// 设备勾选键；未勾选时该设备参数保持不变
    pub gate: Option<&'static str>,
    pub get: ParamGetter,
    pub get_mut: ParamGetterMut,
}

/// 设备/负荷选择状态绑定
pub struct ToggleBinding {
    pub ui_key: &'static str,
    pub get: fn(&ProjectInput) -> bool,
    pub set: fn(&mut ProjectInput, bool),
}

macro_rules! bind {
    ($key:literal, $codec:ident, gate = $gate:literal, $($path:ident).+) => {
        FieldBinding {
            ui_key: $key,
            codec: Codec::$codec,
            gate: Some($gate),
            get: |p| &p.$($path).+,
            get_mut: |p| &mut p.$($path).+,
        }
    };
    ($key:literal, $codec:ident, $($path:ident).+) => {
        FieldBinding {
            ui_key: $key,
            codec: Codec::$codec,
            gate: None,
            get: |p| &p.$($path).+,
            get_mut: |p| &mut p.$($path).+,
        }
    };
}

macro_rules! toggle {
    ($key:literal, $($path:ident).+) => {
        ToggleBinding {
            ui_key: $key,
            get: |p| p.$($path).+,
            set: |p, v| p.$($path).+ = v,
        }
    };
}

fn project_bindings() -> Vec<FieldBinding> {
    vec![
        // 项目基本信息
        bind!("project_name", Text, basic.project_name),
        bind!("project_life", Number, basic.project_life),
        bind!("project_people", Number, basic.project_people),
        bind!("scheme_count", Number, basic.scheme_count),
        // 财税与融资参数
        bind!("vat_rate", Number, tax_finance.vat_rate),
        bind!("income_tax_rate", Number, tax_finance.income_tax_rate),
        bind!("vat_additional_rate", Number, tax_finance.vat_additional_rate),
        bind!("equity_ratio", Number, tax_finance.equity_ratio),
        bind!("loan_rate", Number, tax_finance.loan_rate),
        // 财务分析参数
        bind!("nominal_discount_rate", Number, financial_analysis.nominal_discount_rate),
        bind!("inflation_rate", Number, financial_analysis.inflation_rate),
        // 价格参数
        bind!("oxygen_price", HourlySeries, prices.oxygen_price),
        bind!("electricity_sell_price", HourlySeries, prices.electricity_sell_price),
        bind!("electricity_buy_price", HourlySeries, prices.electricity_buy_price),
        bind!("hydrogen_price", HourlySeries, prices.hydrogen_price),
        // 成本参数
        bind!("site_cost", Number, costs.site_cost),
        bind!("construction_cost", Number, costs.construction_cost),
        bind!("personnel_cost", Number, costs.personnel_cost),
        // WT
        bind!("wt_lifetime", Number, gate = "wind_turbine", wt.lifetime),
        bind!("wt_power_electronics_ratio", Number, gate = "wind_turbine", wt.power_electronics_ratio),
        bind!("wt_investment_cost", Number, gate = "wind_turbine", wt.investment_cost),
        bind!("wt_maintenance_cost", Number, gate = "wind_turbine", wt.maintenance_cost),
        bind!("wt_residual_value", Number, gate = "wind_turbine", wt.residual_value),
        bind!("wt_total_capacity", SchemeSeries, gate = "wind_turbine", wt.total_capacity),
        // PV
        bind!("pv_lifetime", Number, gate = "pv", pv.lifetime),
        bind!("pv_power_electronics_ratio", Number, gate = "pv", pv.power_electronics_ratio),
        bind!("pv_investment_cost", Number, gate = "pv", pv.investment_cost),
        bind!("pv_maintenance_cost", Number, gate = "pv", pv.maintenance_cost),
        bind!("pv_residual_value", Number, gate = "pv", pv.residual_value),
        bind!("pv_total_capacity", SchemeSeries, gate = "pv", pv.total_capacity),
        // EL
        bind!("el_lifetime", Number, gate = "electrolyzer", el.lifetime),
        bind!("el_efficiency", Number, gate = "electrolyzer", el.efficiency),
        bind!("el_power_electronics_ratio", Number, gate = "electrolyzer", el.power_electronics_ratio),
        bind!("el_investment_cost", Number, gate = "electrolyzer", el.investment_cost),
        bind!("el_maintenance_cost", Number, gate = "electrolyzer", el.maintenance_cost),
        bind!("el_residual_value", Number, gate = "electrolyzer", el.residual_value),
        bind!("el_total_capacity", SchemeSeries, gate = "electrolyzer", el.total_capacity),
        // HES
        bind!("hes_lifetime", Number, gate = "hydrogen_storage", hes.lifetime),
        bind!("hes_investment_cost", Number, gate = "hydrogen_storage", hes.investment_cost),
        bind!("hes_maintenance_cost", Number, gate = "hydrogen_storage", hes.maintenance_cost),
        bind!("hes_residual_value", Number, gate = "hydrogen_storage", hes.residual_value),
        bind!("hes_total_capacity", SchemeSeries, gate = "hydrogen_storage", hes.total_capacity),
        // HFC
        bind!("hfc_lifetime", Number, gate = "fuel_cell", hfc.lifetime),
        bind!("hfc_power_electronics_ratio", Number, gate = "fuel_cell", hfc.power_electronics_ratio),
        bind!("hfc_investment_cost", Number, gate = "fuel_cell", hfc.investment_cost),
        bind!("hfc_maintenance_cost", Number, gate = "fuel_cell", hfc.maintenance_cost),
        bind!("hfc_residual_value", Number, gate = "fuel_cell", hfc.residual_value),
        bind!("hfc_total_capacity", SchemeSeries, gate = "fuel_cell", hfc.total_capacity),
        // ESS
        bind!("ess_efficiency", Number, gate = "battery_storage", ess.efficiency),
        bind!("ess_operation_cost", Number, gate = "battery_storage", ess.operation_cost),
        bind!("ess_lifetime", Number, gate = "battery_storage", ess.lifetime),
        bind!("ess_power_electronics_ratio", Number, gate = "battery_storage", ess.power_electronics_ratio),
        bind!("ess_investment_cost", Number, gate = "battery_storage", ess.investment_cost),
        bind!("ess_total_capacity", SchemeSeries, gate = "battery_storage", ess.total_capacity),
    ]
}

fn toggle_bindings() -> Vec<ToggleBinding> {
    vec![
        // 系统拓扑
        toggle!("wind_turbine", wt.enabled),
        toggle!("pv", pv.enabled),
        toggle!("electrolyzer", el.enabled),
        toggle!("hydrogen_storage", hes.enabled),
        toggle!("fuel_cell", hfc.enabled),
        toggle!("battery_storage", ess.enabled),
        toggle!("external_grid", external_grid.enabled),
        toggle!("external_hydrogen", external_hydrogen.enabled),
        // 消费侧
        toggle!("oxygen_sell", oxygen_load.enabled),
        toggle!("ammonia", hydrogen_loads.ammonia.enabled),
        toggle!("methanol", hydrogen_loads.methanol.enabled),
        toggle!("oil_processing", hydrogen_loads.oil_processing.enabled),
        toggle!("fuel_cell_vehicle", hydrogen_loads.fuel_cell_vehicle.enabled),
        toggle!("steel_making", hydrogen_loads.steel_making.enabled),
        toggle!("other_hydrogen", hydrogen_loads.other_hydrogen.enabled),
        toggle!("internal_power", electric_load.enabled),
    ]
}

/// 伴随选择状态键
pub fn enabled_key(ui_key: &str) -> String {
    format!("{}{}", ui_key, ENABLED_SUFFIX)
}

/// 一次合并的统计
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeSummary {
    /// 写入的参数叶子数
    pub updated: usize,
    /// 因设备或勾选框未勾选而跳过的参数叶子数
    pub gated: usize,
    /// 未识别（已忽略）的界面键
    pub unknown_keys: Vec<String>,
}

// ==========================================
// FieldMapper - 字段映射器
// ==========================================
pub struct FieldMapper {
    bindings: Vec<FieldBinding>,
    toggles: Vec<ToggleBinding>,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldMapper {
    pub fn new() -> Self {
        Self {
            bindings: project_bindings(),
            toggles: toggle_bindings(),
        }
    }

    pub fn bindings(&self) -> &[FieldBinding] {
        &self.bindings
    }

    pub fn toggles(&self) -> &[ToggleBinding] {
        &self.toggles
    }

    pub fn binding(&self, ui_key: &str) -> Option<&FieldBinding> {
        self.bindings.iter().find(|b| b.ui_key == ui_key)
    }

    fn is_known_key(&self, key: &str) -> bool {
        let base = key.strip_suffix(ENABLED_SUFFIX).unwrap_or(key);
        self.bindings.iter().any(|b| b.ui_key == key || b.ui_key == base)
            || self.toggles.iter().any(|t| t.ui_key == key)
    }

    /// 扁平表单 → 参数树（原地合并）
    ///
    /// - 绑定叶子: 按编解码方式写入；缺失键按空值处理
    /// - `<键>_enabled`: 存在时写入该叶子的选择状态
    /// - 预期通货膨胀率: 仅在 `inflation_rate_enabled` 勾选时写入数值
    /// - 设备参数: 对应设备未勾选时保持不变
    /// - 未绑定叶子保持不变，未识别键忽略
    pub fn merge_into(&self, input: &mut ProjectInput, form: &ProjectForm) -> MergeSummary {
        let mut summary = MergeSummary::default();

        for binding in &self.bindings {
            if let Some(gate) = binding.gate {
                if !form.flag(gate) {
                    summary.gated += 1;
                    continue;
                }
            }

            let enabled = form
                .get(&enabled_key(binding.ui_key))
                .map(|flag| parse_flag(Some(flag)));
            let record = (binding.get_mut)(input);
            if let Some(enabled) = enabled {
                record.enabled = enabled;
            }

            // 预期通货膨胀率: 未勾选（或未提交勾选框）时保留文件中的数值
            if VALUE_GATED_BY_ENABLED.contains(&binding.ui_key) && enabled != Some(true) {
                summary.gated += 1;
                continue;
            }

            record.value = binding.codec.decode(form.get(binding.ui_key));
            summary.updated += 1;
        }

        for toggle in &self.toggles {
            (toggle.set)(input, form.flag(toggle.ui_key));
        }

        summary.unknown_keys = form
            .keys()
            .filter(|k| !self.is_known_key(k))
            .map(str::to_string)
            .collect();

        if !summary.unknown_keys.is_empty() {
            tracing::debug!(
                unknown_keys = ?summary.unknown_keys,
                "忽略未识别的界面字段"
            );
        }

        summary
    }

    /// 参数树 → 扁平表单
    pub fn project(&self, input: &ProjectInput) -> ProjectForm {
        let mut form = ProjectForm::new();

        for binding in &self.bindings {
            let record = (binding.get)(input);
            form.set(binding.ui_key, format_param_value(record.value.as_ref()));
            form.set(&enabled_key(binding.ui_key), record.enabled);
        }

        for toggle in &self.toggles {
            form.set(toggle.ui_key, (toggle.get)(input));
        }

        form
    }
}
