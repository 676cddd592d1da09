// ==========================================
// 风光氢储综合评估系统 - 领域层
// ==========================================
// 职责: 项目文件的强类型结构
// ==========================================

pub mod indicator;
pub mod project_input;
pub mod types;

// 重导出核心类型
pub use indicator::{
    EnvironmentalIndicators, FinancialIndicators, IndicatorCategory, IndicatorCode,
    IndicatorRecord, IndicatorSystem, TechnicalIndicators,
};
pub use project_input::{
    BasicInfo, BatteryStorage, Costs, Electrolyzer, FinancialAnalysis, FuelCell,
    HydrogenLoads, HydrogenStorage, Photovoltaic, Prices, ProjectInput, TaxFinance,
    WindTurbine,
};
pub use types::{
    ExtraFields, ParamKind, ParamRecord, ParamValue, Polarity, Toggle, HOURS_PER_DAY,
};
