// ==========================================
// 风光氢储综合评估系统 - 默认参数构造
// ==========================================
// 职责: 新建项目时写出的 User_input.json / IndicatorSystem.json 默认内容
// 说明: 税率/贴现率等给出内置默认值；容量、寿命、成本等场地相关参数为 null
// ==========================================

use crate::domain::indicator::{
    EnvironmentalIndicators, FinancialIndicators, IndicatorCode, IndicatorRecord,
    IndicatorSystem, TechnicalIndicators,
};
use crate::domain::project_input::{
    BasicInfo, BatteryStorage, Costs, Electrolyzer, FinancialAnalysis, FuelCell,
    HydrogenLoads, HydrogenStorage, Photovoltaic, Prices, ProjectInput, TaxFinance,
    WindTurbine,
};
use crate::domain::types::{ExtraFields, ParamRecord, Polarity, Toggle};

/// 电力电子接口装置成本占设备成本比例（%）
const POWER_ELECTRONICS_RATIO_PCT: f64 = 5.0;
/// 单位容量残值系数（%）
const RESIDUAL_VALUE_PCT: f64 = 5.0;

/// 默认用户输入参数
pub fn default_project_input() -> ProjectInput {
    ProjectInput {
        basic: BasicInfo {
            project_name: ParamRecord::general("-"),
            project_life: ParamRecord::general("年"),
            project_people: ParamRecord::general("人"),
            scheme_count: ParamRecord::general("个"),
            extra: ExtraFields::new(),
        },
        tax_finance: TaxFinance {
            vat_rate: ParamRecord::general("%").with_number(13.0),
            income_tax_rate: ParamRecord::general("%").with_number(25.0),
            vat_additional_rate: ParamRecord::general("%").with_number(3.14),
            equity_ratio: ParamRecord::general("%"),
            loan_rate: ParamRecord::general("%").with_number(4.9),
            extra: ExtraFields::new(),
        },
        financial_analysis: FinancialAnalysis {
            nominal_discount_rate: ParamRecord::general("%").with_number(8.0),
            inflation_rate: ParamRecord::general("%").with_number(2.0),
            extra: ExtraFields::new(),
        },
        prices: Prices {
            oxygen_price: ParamRecord::general("元/kg").with_hourly(0.5),
            electricity_sell_price: ParamRecord::general("元/kW·h").with_hourly(0.3),
            electricity_buy_price: ParamRecord::general("元/kW·h"),
            hydrogen_price: ParamRecord::general("元/kg").with_hourly(33.4),
            extra: ExtraFields::new(),
        },
        costs: Costs {
            site_cost: ParamRecord::general("万元"),
            construction_cost: ParamRecord::general("万元"),
            personnel_cost: ParamRecord::general("元/年·人"),
            extra: ExtraFields::new(),
        },
        wt: WindTurbine {
            enabled: true,
            lifetime: ParamRecord::general("年"),
            power_electronics_ratio: power_electronics_ratio(),
            investment_cost: ParamRecord::general("元/kW"),
            maintenance_cost: ParamRecord::general("元/kW"),
            residual_value: residual_value(),
            total_capacity: ParamRecord::particular("kW"),
            extra: ExtraFields::new(),
        },
        pv: Photovoltaic {
            enabled: true,
            lifetime: ParamRecord::general("年"),
            power_electronics_ratio: power_electronics_ratio(),
            investment_cost: ParamRecord::general("元/kW"),
            maintenance_cost: ParamRecord::general("元/kW"),
            residual_value: residual_value(),
            total_capacity: ParamRecord::particular("kW"),
            extra: ExtraFields::new(),
        },
        el: Electrolyzer {
            enabled: true,
            lifetime: ParamRecord::general("年"),
            efficiency: ParamRecord::general("1").with_number(39.4),
            power_electronics_ratio: power_electronics_ratio(),
            investment_cost: ParamRecord::general("元/kW"),
            maintenance_cost: ParamRecord::general("元/kW"),
            residual_value: residual_value(),
            total_capacity: ParamRecord::particular("kW"),
            extra: ExtraFields::new(),
        },
        hes: HydrogenStorage {
            enabled: true,
            lifetime: ParamRecord::general("年"),
            investment_cost: ParamRecord::general("元/kW"),
            maintenance_cost: ParamRecord::general("元/kW"),
            residual_value: residual_value(),
            total_capacity: ParamRecord::particular("kW"),
            extra: ExtraFields::new(),
        },
        hfc: FuelCell {
            enabled: true,
            lifetime: ParamRecord::general("年"),
            power_electronics_ratio: power_electronics_ratio(),
            investment_cost: ParamRecord::general("元/kW"),
            maintenance_cost: ParamRecord::general("元/kW"),
            residual_value: residual_value(),
            total_capacity: ParamRecord::particular("kW"),
            extra: ExtraFields::new(),
        },
        ess: BatteryStorage {
            enabled: true,
            // 单位沿用既有项目文件中的 kW
            efficiency: ParamRecord::general("kW").with_number(90.0),
            operation_cost: ParamRecord::general("元"),
            lifetime: ParamRecord::general("年"),
            power_electronics_ratio: power_electronics_ratio(),
            investment_cost: ParamRecord::general("元/kW"),
            total_capacity: ParamRecord::particular("kW"),
            extra: ExtraFields::new(),
        },
        external_grid: Toggle::default(),
        external_hydrogen: Toggle::default(),
        oxygen_load: Toggle::default(),
        hydrogen_loads: HydrogenLoads {
            ammonia: Toggle::default(),
            methanol: Toggle::default(),
            oil_processing: Toggle::default(),
            fuel_cell_vehicle: Toggle::default(),
            steel_making: Toggle::default(),
            other_hydrogen: Toggle::default(),
            extra: ExtraFields::new(),
        },
        electric_load: Toggle::default(),
        extra: ExtraFields::new(),
    }
}

fn power_electronics_ratio() -> ParamRecord {
    ParamRecord::general("%").with_number(POWER_ELECTRONICS_RATIO_PCT)
}

fn residual_value() -> ParamRecord {
    ParamRecord::general("%").with_number(RESIDUAL_VALUE_PCT)
}

/// 默认指标体系
///
/// 6 项财务 + 4 项技术 + 1 项环境指标；
/// 能源网供应占比 (B1)、等效可利用小时数 (B4) 默认不选。
pub fn default_indicator_system() -> IndicatorSystem {
    use IndicatorCode::*;
    use Polarity::{Benefit, Cost};

    IndicatorSystem {
        financial: FinancialIndicators {
            initial_investment: IndicatorRecord::new(A1, Cost, "万元", true),
            annual_maintenance: IndicatorRecord::new(A2, Cost, "万元", true),
            energy_purchase: IndicatorRecord::new(A3, Cost, "万元", true),
            npv: IndicatorRecord::new(A4, Benefit, "万元", true),
            irr: IndicatorRecord::new(A5, Benefit, "%", true),
            dpp: IndicatorRecord::new(A6, Benefit, "年", true),
            extra: ExtraFields::new(),
        },
        technical: TechnicalIndicators {
            energy_supply_ratio: IndicatorRecord::new(B1, Cost, "%", false),
            battery_utilization: IndicatorRecord::new(B2, Benefit, "%", true),
            hydrogen_utilization: IndicatorRecord::new(B3, Benefit, "%", true),
            equivalent_hours: IndicatorRecord::new(B4, Benefit, "小时", false),
            extra: ExtraFields::new(),
        },
        environmental: EnvironmentalIndicators {
            renewable_ratio: IndicatorRecord::new(C1, Benefit, "%", true),
            extra: ExtraFields::new(),
        },
        extra: ExtraFields::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ParamKind, HOURS_PER_DAY};

    #[test]
    fn test_default_tax_rates() {
        let input = default_project_input();
        assert_eq!(input.tax_finance.vat_rate.number(), Some(13.0));
        assert_eq!(input.tax_finance.income_tax_rate.number(), Some(25.0));
        assert_eq!(input.tax_finance.equity_ratio.number(), None);
        assert_eq!(input.financial_analysis.nominal_discount_rate.number(), Some(8.0));
    }

    #[test]
    fn test_default_site_specific_fields_are_null() {
        let input = default_project_input();
        assert!(input.wt.lifetime.value.is_none());
        assert!(input.wt.total_capacity.value.is_none());
        assert!(input.costs.site_cost.value.is_none());
        assert_eq!(input.wt.total_capacity.kind, ParamKind::Particular);
    }

    #[test]
    fn test_default_hourly_prices() {
        let input = default_project_input();
        let oxygen = input.prices.oxygen_price.series().unwrap();
        assert_eq!(oxygen.len(), HOURS_PER_DAY);
        assert!(oxygen.iter().all(|v| *v == 0.5));
        assert!(input.prices.electricity_buy_price.value.is_none());
    }

    #[test]
    fn test_default_json_key_order() {
        let json = serde_json::to_string(&default_project_input()).unwrap();
        let basic = json.find("项目基本信息").unwrap();
        let wt = json.find("\"WT\"").unwrap();
        let electric = json.find("电负荷").unwrap();
        assert!(basic < wt && wt < electric);
    }

    #[test]
    fn test_default_indicator_selection() {
        let system = default_indicator_system();
        let unselected: Vec<IndicatorCode> = system
            .records()
            .into_iter()
            .filter(|r| !r.selected)
            .map(|r| r.code)
            .collect();
        assert_eq!(unselected, vec![IndicatorCode::B1, IndicatorCode::B4]);
        assert_eq!(system.selected_codes().len(), 9);
    }

    #[test]
    fn test_default_indicator_polarity() {
        let system = default_indicator_system();
        assert_eq!(system.financial.initial_investment.polarity, Polarity::Cost);
        assert_eq!(system.financial.npv.polarity, Polarity::Benefit);
        assert_eq!(system.technical.energy_supply_ratio.polarity, Polarity::Cost);
    }

    #[test]
    fn test_defaults_are_deterministic() {
        assert_eq!(default_project_input(), default_project_input());
        assert_eq!(default_indicator_system(), default_indicator_system());
    }
}
