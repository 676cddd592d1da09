// ==========================================
// 风光氢储综合评估系统 - 项目工作簿清单
// ==========================================
// 文件名需逐字保持，与既有项目目录兼容
// ==========================================

/// 输出表格子目录
pub const OUTPUT_FOLDER: &str = "输出表格";

/// 工作簿内唯一工作表名称
pub const DATA_SHEET_NAME: &str = "数据";

/// 场景时序工作簿（项目根目录）
pub const SCENARIO_WORKBOOKS: [&str; 14] = [
    "ESS-电储能装置充放功率(kW).xlsx",
    "HES-氢储能装置加氢放氢(kg).xlsx",
    "PV-光伏机组出力(kW).xlsx",
    "WT-风力发电单元出力(kW).xlsx",
    "外部能源网-系统与外部氢源的交互质量(kg).xlsx",
    "外部能源网-系统与外部电网的交互功率(kW).xlsx",
    "氢负荷-合成氨所耗氢气质量(kg).xlsx",
    "氢负荷-氢燃料电池汽车加氢所耗氢气质量(kg).xlsx",
    "氢负荷-生产甲醇所耗氢气质量(kg).xlsx",
    "氢负荷-用于其他方面的销售氢气年总质量(kg).xlsx",
    "氢负荷-用于炼油所耗氢气质量(kg).xlsx",
    "氢负荷-用于钢铁冶炼所耗氢气质量(kg).xlsx",
    "氧负荷-销售氧气的质量(kg).xlsx",
    "电负荷-电负荷所消耗的功率(kW).xlsx",
];

/// 财务报表输出工作簿（输出表格/ 目录）
pub const OUTPUT_WORKBOOKS: [&str; 4] = [
    "利润表.xlsx",
    "成本费用表.xlsx",
    "现金流量表.xlsx",
    "还本付息表.xlsx",
];

pub fn scenario_workbook_names() -> &'static [&'static str] {
    &SCENARIO_WORKBOOKS
}

pub fn output_workbook_names() -> &'static [&'static str] {
    &OUTPUT_WORKBOOKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_workbook_names_unique() {
        let scenario: HashSet<_> = scenario_workbook_names().iter().collect();
        assert_eq!(scenario.len(), 14);
        let output: HashSet<_> = output_workbook_names().iter().collect();
        assert_eq!(output.len(), 4);
    }

    #[test]
    fn test_workbook_names_are_xlsx() {
        assert!(scenario_workbook_names()
            .iter()
            .chain(output_workbook_names())
            .all(|n| n.ends_with(".xlsx")));
    }
}
