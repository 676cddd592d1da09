// ==========================================
// 风光氢储综合评估系统 - 项目工作簿读写
// ==========================================
// 写出: 场景时序模板（表头 + 24 个整点行）、空白财务报表
// 读取: 场景时序表（第一个表头行为"时间/方案N"）
// ==========================================

use crate::domain::types::HOURS_PER_DAY;
use crate::schema::workbooks::DATA_SHEET_NAME;
use crate::store::error::{StoreError, StoreResult};
use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::{Workbook, XlsxError};
use serde::Serialize;
use std::path::Path;

/// 场景工作簿默认方案列数
pub const DEFAULT_SCHEME_COLUMNS: u16 = 3;

const TIME_HEADER: &str = "时间";

// ==========================================
// WorkbookWriter - 工作簿写出
// ==========================================
#[derive(Debug, Clone)]
pub struct WorkbookWriter {
    scheme_columns: u16,
}

impl Default for WorkbookWriter {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEME_COLUMNS)
    }
}

impl WorkbookWriter {
    pub fn new(scheme_columns: u16) -> Self {
        Self {
            scheme_columns: scheme_columns.max(1),
        }
    }

    pub fn scheme_columns(&self) -> u16 {
        self.scheme_columns
    }

    /// 场景时序模板：A1="时间"，B1..="方案1".. ，A2..A25="00:00".."23:00"
    pub fn write_scenario_template(&self, path: &Path) -> StoreResult<()> {
        self.build_scenario_template(path)
            .map_err(|e| write_error(path, e))
    }

    fn build_scenario_template(&self, path: &Path) -> Result<(), XlsxError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(DATA_SHEET_NAME)?;

        worksheet.write_string(0, 0, TIME_HEADER)?;
        for scheme in 1..=self.scheme_columns {
            worksheet.write_string(0, scheme, format!("方案{}", scheme))?;
        }

        for hour in 0..HOURS_PER_DAY as u32 {
            worksheet.write_string(hour + 1, 0, format!("{:02}:00", hour))?;
        }

        workbook.save(path)
    }

    /// 空白工作簿（仅一个"数据"工作表）
    pub fn write_blank(&self, path: &Path) -> StoreResult<()> {
        let build = || -> Result<(), XlsxError> {
            let mut workbook = Workbook::new();
            workbook.add_worksheet().set_name(DATA_SHEET_NAME)?;
            workbook.save(path)
        };
        build().map_err(|e| write_error(path, e))
    }
}

fn write_error(path: &Path, err: XlsxError) -> StoreError {
    StoreError::WorkbookWriteError {
        file: path.display().to_string(),
        message: err.to_string(),
    }
}

// ==========================================
// 场景时序表读取
// ==========================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioRow {
    /// 时间标签，如 "08:00"
    pub time: String,
    /// 各方案数值，空单元格为 None
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioTable {
    /// 方案列表头
    pub schemes: Vec<String>,
    pub rows: Vec<ScenarioRow>,
}

impl ScenarioTable {
    /// 某一方案的整列数值
    pub fn scheme_series(&self, scheme_index: usize) -> Vec<Option<f64>> {
        self.rows
            .iter()
            .map(|r| r.values.get(scheme_index).copied().flatten())
            .collect()
    }

    /// 是否尚未填写任何数值
    pub fn is_unfilled(&self) -> bool {
        self.rows.iter().all(|r| r.values.iter().all(Option::is_none))
    }
}

fn cell_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// 列出工作表名称
pub fn sheet_names(path: &Path) -> StoreResult<Vec<String>> {
    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }
    let workbook: Xlsx<_> = open_workbook(path)?;
    Ok(workbook.sheet_names())
}

/// 读取场景时序表（"数据"工作表，缺失时取第一个工作表）
pub fn read_scenario_table(path: &Path) -> StoreResult<ScenarioTable> {
    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheet_names = workbook.sheet_names();
    let sheet_name = sheet_names
        .iter()
        .find(|n| n.as_str() == DATA_SHEET_NAME)
        .or_else(|| sheet_names.first())
        .cloned()
        .ok_or_else(|| StoreError::ExcelParseError("Excel 文件无工作表".to_string()))?;

    let range = workbook.worksheet_range(&sheet_name)?;
    let mut rows = range.rows();

    // 空白工作簿
    let Some(header_row) = rows.next() else {
        return Ok(ScenarioTable {
            schemes: Vec::new(),
            rows: Vec::new(),
        });
    };

    let schemes: Vec<String> = header_row
        .iter()
        .skip(1)
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let mut table_rows = Vec::new();
    for data_row in rows {
        let time = data_row
            .first()
            .map(|c| c.to_string().trim().to_string())
            .unwrap_or_default();

        let values: Vec<Option<f64>> = (0..schemes.len())
            .map(|i| data_row.get(i + 1).and_then(cell_number))
            .collect();

        // 跳过完全空白的行
        if time.is_empty() && values.iter().all(Option::is_none) {
            continue;
        }

        table_rows.push(ScenarioRow { time, values });
    }

    Ok(ScenarioTable {
        schemes,
        rows: table_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scenario_template_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("PV-光伏机组出力(kW).xlsx");

        WorkbookWriter::default().write_scenario_template(&path).unwrap();
        let table = read_scenario_table(&path).unwrap();

        assert_eq!(table.schemes, vec!["方案1", "方案2", "方案3"]);
        assert_eq!(table.rows.len(), 24);
        assert_eq!(table.rows[0].time, "00:00");
        assert_eq!(table.rows[23].time, "23:00");
        assert!(table.is_unfilled());
    }

    #[test]
    fn test_scheme_columns_configurable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("WT.xlsx");

        WorkbookWriter::new(5).write_scenario_template(&path).unwrap();
        let table = read_scenario_table(&path).unwrap();
        assert_eq!(table.schemes.len(), 5);
        assert_eq!(table.scheme_series(4).len(), 24);
    }

    #[test]
    fn test_blank_workbook_has_data_sheet() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("利润表.xlsx");

        WorkbookWriter::default().write_blank(&path).unwrap();
        assert_eq!(sheet_names(&path).unwrap(), vec![DATA_SHEET_NAME.to_string()]);
    }

    #[test]
    fn test_read_missing_workbook() {
        let dir = TempDir::new().unwrap();
        let result = read_scenario_table(&dir.path().join("none.xlsx"));
        assert!(matches!(result, Err(StoreError::FileNotFound(_))));
    }
}
