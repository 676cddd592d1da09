// ==========================================
// 风光氢储综合评估系统 - 用户输入参数树
// ==========================================
// 对应文件: User_input.json
// 职责: 按类别/设备划分的参数记录
// 键名: 原样保留中文键，字段顺序即写出顺序
// ==========================================

use crate::domain::types::{ExtraFields, ParamKind, ParamRecord, Toggle};
use serde::{Deserialize, Serialize};

// ==========================================
// ProjectInput - 用户输入参数（根节点）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInput {
    #[serde(rename = "项目基本信息")]
    pub basic: BasicInfo,

    #[serde(rename = "财税与融资参数")]
    pub tax_finance: TaxFinance,

    #[serde(rename = "财务分析参数")]
    pub financial_analysis: FinancialAnalysis,

    #[serde(rename = "价格参数")]
    pub prices: Prices,

    #[serde(rename = "成本参数")]
    pub costs: Costs,

    #[serde(rename = "WT")]
    pub wt: WindTurbine,

    #[serde(rename = "PV")]
    pub pv: Photovoltaic,

    #[serde(rename = "EL")]
    pub el: Electrolyzer,

    #[serde(rename = "HES")]
    pub hes: HydrogenStorage,

    #[serde(rename = "HFC")]
    pub hfc: FuelCell,

    #[serde(rename = "ESS")]
    pub ess: BatteryStorage,

    #[serde(rename = "外部电网")]
    pub external_grid: Toggle,

    #[serde(rename = "外部氢网")]
    pub external_hydrogen: Toggle,

    #[serde(rename = "氧负荷")]
    pub oxygen_load: Toggle,

    #[serde(rename = "氢负荷")]
    pub hydrogen_loads: HydrogenLoads,

    #[serde(rename = "电负荷")]
    pub electric_load: Toggle,

    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    #[serde(rename = "项目名称")]
    pub project_name: ParamRecord,
    #[serde(rename = "项目生命周期")]
    pub project_life: ParamRecord,
    #[serde(rename = "项目人数")]
    pub project_people: ParamRecord,
    /// 方案数量（原文件键名为"方案人数"）
    #[serde(rename = "方案人数")]
    pub scheme_count: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxFinance {
    #[serde(rename = "增值税率")]
    pub vat_rate: ParamRecord,
    #[serde(rename = "企业所得税率")]
    pub income_tax_rate: ParamRecord,
    #[serde(rename = "增值税附加税率")]
    pub vat_additional_rate: ParamRecord,
    #[serde(rename = "自有资金比例")]
    pub equity_ratio: ParamRecord,
    #[serde(rename = "贷款利率")]
    pub loan_rate: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialAnalysis {
    #[serde(rename = "名义贴现率")]
    pub nominal_discount_rate: ParamRecord,
    #[serde(rename = "预期通货膨胀率")]
    pub inflation_rate: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// 价格参数（分时序列，24 点）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    #[serde(rename = "氧气的销售价格")]
    pub oxygen_price: ParamRecord,
    #[serde(rename = "电能销售价格")]
    pub electricity_sell_price: ParamRecord,
    #[serde(rename = "电能的购买价格")]
    pub electricity_buy_price: ParamRecord,
    #[serde(rename = "单位质量氢能的价格")]
    pub hydrogen_price: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Costs {
    #[serde(rename = "场地购置费用")]
    pub site_cost: ParamRecord,
    #[serde(rename = "工程施工费用")]
    pub construction_cost: ParamRecord,
    #[serde(rename = "年人员费用")]
    pub personnel_cost: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

// ==========================================
// 设备参数
// ==========================================

/// WT - 风力发电单元
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindTurbine {
    #[serde(rename = "设备选择状态")]
    pub enabled: bool,
    #[serde(rename = "设备使用寿命")]
    pub lifetime: ParamRecord,
    #[serde(rename = "电力电子接口装置成本设备成本的比例")]
    pub power_electronics_ratio: ParamRecord,
    #[serde(rename = "单位容量投资成本")]
    pub investment_cost: ParamRecord,
    #[serde(rename = "单位容量维护成本")]
    pub maintenance_cost: ParamRecord,
    #[serde(rename = "单位容量残值系数")]
    pub residual_value: ParamRecord,
    #[serde(rename = "风力发电总装机")]
    pub total_capacity: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// PV - 光伏机组
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photovoltaic {
    #[serde(rename = "设备选择状态")]
    pub enabled: bool,
    #[serde(rename = "设备使用寿命")]
    pub lifetime: ParamRecord,
    #[serde(rename = "电力电子接口装置成本设备成本的比例")]
    pub power_electronics_ratio: ParamRecord,
    #[serde(rename = "单位容量投资成本")]
    pub investment_cost: ParamRecord,
    #[serde(rename = "单位容量维护成本")]
    pub maintenance_cost: ParamRecord,
    #[serde(rename = "单位容量残值系数")]
    pub residual_value: ParamRecord,
    #[serde(rename = "光伏机组总装机")]
    pub total_capacity: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// EL - 电解槽
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Electrolyzer {
    #[serde(rename = "设备选择状态")]
    pub enabled: bool,
    #[serde(rename = "设备使用寿命")]
    pub lifetime: ParamRecord,
    #[serde(rename = "能量转化系数")]
    pub efficiency: ParamRecord,
    #[serde(rename = "电力电子接口装置成本设备成本的比例")]
    pub power_electronics_ratio: ParamRecord,
    #[serde(rename = "单位容量投资成本")]
    pub investment_cost: ParamRecord,
    #[serde(rename = "单位容量维护成本")]
    pub maintenance_cost: ParamRecord,
    #[serde(rename = "单位容量残值系数")]
    pub residual_value: ParamRecord,
    #[serde(rename = "设备配置容量")]
    pub total_capacity: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// HES - 氢储能装置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrogenStorage {
    #[serde(rename = "设备选择状态")]
    pub enabled: bool,
    #[serde(rename = "设备使用寿命")]
    pub lifetime: ParamRecord,
    #[serde(rename = "单位容量投资成本")]
    pub investment_cost: ParamRecord,
    #[serde(rename = "单位容量维护成本")]
    pub maintenance_cost: ParamRecord,
    #[serde(rename = "单位容量残值系数")]
    pub residual_value: ParamRecord,
    #[serde(rename = "设备配置容量")]
    pub total_capacity: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// HFC - 氢燃料电池
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelCell {
    #[serde(rename = "设备选择状态")]
    pub enabled: bool,
    #[serde(rename = "设备使用寿命")]
    pub lifetime: ParamRecord,
    #[serde(rename = "电力电子接口装置成本设备成本的比例")]
    pub power_electronics_ratio: ParamRecord,
    #[serde(rename = "单位容量投资成本")]
    pub investment_cost: ParamRecord,
    #[serde(rename = "单位容量维护成本")]
    pub maintenance_cost: ParamRecord,
    #[serde(rename = "单位容量残值系数")]
    pub residual_value: ParamRecord,
    #[serde(rename = "设备配置容量")]
    pub total_capacity: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// ESS - 电储能装置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryStorage {
    #[serde(rename = "设备选择状态")]
    pub enabled: bool,
    #[serde(rename = "蓄电池充放电效率")]
    pub efficiency: ParamRecord,
    #[serde(rename = "蓄电池单位运行成本")]
    pub operation_cost: ParamRecord,
    #[serde(rename = "设备使用寿命")]
    pub lifetime: ParamRecord,
    #[serde(rename = "电力电子接口装置成本设备成本的比例")]
    pub power_electronics_ratio: ParamRecord,
    #[serde(rename = "单位容量投资成本")]
    pub investment_cost: ParamRecord,
    #[serde(rename = "设备配置容量")]
    pub total_capacity: ParamRecord,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// 氢负荷（按用途划分）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HydrogenLoads {
    #[serde(rename = "合成氨")]
    pub ammonia: Toggle,
    #[serde(rename = "合成甲醇")]
    pub methanol: Toggle,
    #[serde(rename = "成品油加工")]
    pub oil_processing: Toggle,
    #[serde(rename = "燃料电池汽车加氢")]
    pub fuel_cell_vehicle: Toggle,
    #[serde(rename = "钢铁冶炼")]
    pub steel_making: Toggle,
    #[serde(rename = "其他用途售氢")]
    pub other_hydrogen: Toggle,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl ProjectInput {
    /// 所有 Particular 类型的参数（设备装机/配置容量），附带所属设备代码
    pub fn particular_records(&self) -> Vec<(&'static str, &ParamRecord)> {
        [
            ("WT", &self.wt.total_capacity),
            ("PV", &self.pv.total_capacity),
            ("EL", &self.el.total_capacity),
            ("HES", &self.hes.total_capacity),
            ("HFC", &self.hfc.total_capacity),
            ("ESS", &self.ess.total_capacity),
        ]
        .into_iter()
        .filter(|(_, r)| r.kind == ParamKind::Particular)
        .collect()
    }

    /// 分时价格参数（应为 24 点序列）
    pub fn hourly_records(&self) -> [(&'static str, &ParamRecord); 4] {
        [
            ("氧气的销售价格", &self.prices.oxygen_price),
            ("电能销售价格", &self.prices.electricity_sell_price),
            ("电能的购买价格", &self.prices.electricity_buy_price),
            ("单位质量氢能的价格", &self.prices.hydrogen_price),
        ]
    }

    /// 参与拓扑的设备代码
    pub fn enabled_equipment(&self) -> Vec<&'static str> {
        [
            ("WT", self.wt.enabled),
            ("PV", self.pv.enabled),
            ("EL", self.el.enabled),
            ("HES", self.hes.enabled),
            ("HFC", self.hfc.enabled),
            ("ESS", self.ess.enabled),
        ]
        .into_iter()
        .filter_map(|(code, on)| on.then_some(code))
        .collect()
    }
}
