// ==========================================
// 风光氢储综合评估系统 - 表单值解析器
// ==========================================
// 职责: 界面文本 → 参数数值的宽松转换
// 规则: 解析失败一律降级为安全默认值 (None / 0.0 / 补齐序列)，不向调用方报错
// ==========================================

use crate::binding::form::FormValue;
use crate::domain::types::{ParamValue, HOURS_PER_DAY};

/// 全角逗号
const FULLWIDTH_COMMA: char = '，';

/// 按半角/全角逗号切分，去除空白片段
fn split_list(text: &str) -> Vec<&str> {
    text.split([',', FULLWIDTH_COMMA])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// 解析标量数值
///
/// - None / 空串 → None
/// - 可解析的十进制数 → Some
/// - 解析失败 → None
pub fn parse_number(value: Option<&FormValue>) -> Option<f64> {
    match value? {
        FormValue::Number(n) => finite(*n),
        FormValue::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().and_then(finite)
        }
        FormValue::Flag(_) | FormValue::List(_) => None,
    }
}

/// 解析 24 点分时价格序列
///
/// - 已是列表: 非有限值记 0.0，再截断/补齐到 24 点（用末值补齐，空列表补 0.0）
/// - 逗号分隔文本: 逐项解析，非法项记 0.0，再截断/补齐
/// - 单个标量: 广播到 24 点
/// - None / 空串 → None（保持"未填写"状态）
pub fn parse_price_list(value: Option<&FormValue>) -> Option<Vec<f64>> {
    match value? {
        FormValue::List(values) => Some(fit_hourly(
            values.iter().map(|v| finite(*v).unwrap_or(0.0)).collect(),
        )),
        FormValue::Number(n) => Some(vec![finite(*n).unwrap_or(0.0); HOURS_PER_DAY]),
        FormValue::Text(s) => {
            if s.trim().is_empty() {
                return None;
            }
            let prices: Vec<f64> = split_list(s)
                .into_iter()
                .map(|x| x.parse::<f64>().ok().and_then(finite).unwrap_or(0.0))
                .collect();
            Some(fit_hourly(prices))
        }
        FormValue::Flag(_) => None,
    }
}

/// 截断/补齐到 24 点
fn fit_hourly(mut values: Vec<f64>) -> Vec<f64> {
    let pad = values.last().copied().unwrap_or(0.0);
    values.resize(HOURS_PER_DAY, pad);
    values
}

/// 解析多方案容量序列（长度不限）
///
/// - 半角/全角逗号分隔文本 → 浮点列表
/// - 单个标量 → 单元素列表
/// - 空 / 任一项无法解析或非有限值 → None
pub fn parse_capacity_list(value: Option<&FormValue>) -> Option<Vec<f64>> {
    match value? {
        FormValue::Number(n) => finite(*n).map(|v| vec![v]),
        FormValue::List(values) => {
            let capacities = values
                .iter()
                .map(|v| finite(*v))
                .collect::<Option<Vec<f64>>>()?;
            (!capacities.is_empty()).then_some(capacities)
        }
        FormValue::Text(s) => {
            let capacities = split_list(s)
                .into_iter()
                .map(|x| x.parse::<f64>().ok().and_then(finite))
                .collect::<Option<Vec<f64>>>()?;
            (!capacities.is_empty()).then_some(capacities)
        }
        FormValue::Flag(_) => None,
    }
}

/// 解析文本（项目名称），去除首尾空白，空串 → None
pub fn parse_text(value: Option<&FormValue>) -> Option<String> {
    match value? {
        FormValue::Text(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        FormValue::Number(n) => Some(format_number(*n)),
        FormValue::Flag(_) | FormValue::List(_) => None,
    }
}

/// 解析勾选状态，缺省为 false
pub fn parse_flag(value: Option<&FormValue>) -> bool {
    match value {
        Some(FormValue::Flag(b)) => *b,
        Some(FormValue::Number(n)) => *n != 0.0,
        Some(FormValue::Text(s)) => matches!(
            s.trim().to_uppercase().as_str(),
            "1" | "Y" | "是" | "TRUE"
        ),
        Some(FormValue::List(_)) | None => false,
    }
}

/// 数值 → 文本（最短可往返表示，13.0 → "13"）
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// 序列 → 逗号分隔文本
pub fn format_price_list(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join(",")
}

/// 参数值 → 界面文本，缺省为空串
pub fn format_param_value(value: Option<&ParamValue>) -> String {
    match value {
        None => String::new(),
        Some(ParamValue::Number(n)) => format_number(*n),
        Some(ParamValue::Series(values)) => format_price_list(values),
        Some(ParamValue::Text(s)) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FormValue {
        FormValue::Text(s.to_string())
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(None), None);
        assert_eq!(parse_number(Some(&text(""))), None);
        assert_eq!(parse_number(Some(&text("abc"))), None);
        assert_eq!(parse_number(Some(&text("42.5"))), Some(42.5));
        assert_eq!(parse_number(Some(&text("  7 "))), Some(7.0));
        assert_eq!(parse_number(Some(&FormValue::Number(3.0))), Some(3.0));
        assert_eq!(parse_number(Some(&text("NaN"))), None);
    }

    #[test]
    fn test_price_list_last_value_padding() {
        let prices = parse_price_list(Some(&text("1.0,2.0"))).unwrap();
        assert_eq!(prices.len(), 24);
        assert_eq!(&prices[..2], &[1.0, 2.0]);
        assert!(prices[2..].iter().all(|v| *v == 2.0));
    }

    #[test]
    fn test_price_list_truncation() {
        let input: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let prices = parse_price_list(Some(&FormValue::List(input.clone()))).unwrap();
        assert_eq!(prices, input[..24].to_vec());
    }

    #[test]
    fn test_price_list_malformed_entries_become_zero() {
        let prices = parse_price_list(Some(&text("1.5,abc，3"))).unwrap();
        assert_eq!(&prices[..3], &[1.5, 0.0, 3.0]);
        assert_eq!(prices[23], 3.0);
    }

    #[test]
    fn test_price_list_scalar_broadcast() {
        assert_eq!(
            parse_price_list(Some(&FormValue::Number(0.8))),
            Some(vec![0.8; 24])
        );
        assert_eq!(parse_price_list(Some(&text("0.8"))), Some(vec![0.8; 24]));
    }

    #[test]
    fn test_price_list_empty_input() {
        assert_eq!(parse_price_list(None), None);
        assert_eq!(parse_price_list(Some(&text("  "))), None);
        assert_eq!(
            parse_price_list(Some(&FormValue::List(vec![]))),
            Some(vec![0.0; 24])
        );
        assert_eq!(parse_price_list(Some(&text("abc"))), Some(vec![0.0; 24]));
    }

    #[test]
    fn test_price_list_non_finite_entries_become_zero() {
        let prices = parse_price_list(Some(&FormValue::List(vec![f64::NAN, 30.0]))).unwrap();
        assert_eq!(prices.len(), 24);
        assert_eq!(&prices[..2], &[0.0, 30.0]);
        assert_eq!(prices[23], 30.0);

        let prices =
            parse_price_list(Some(&FormValue::List(vec![1.0, f64::INFINITY]))).unwrap();
        assert_eq!(&prices[..2], &[1.0, 0.0]);
        assert!(prices.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_price_list_format_roundtrip() {
        let prices: Vec<f64> = (0..24).map(|h| 0.1 * h as f64 + 0.35).collect();
        let formatted = format_price_list(&prices);
        assert_eq!(parse_price_list(Some(&text(&formatted))), Some(prices));
    }

    #[test]
    fn test_capacity_list_mixed_commas() {
        assert_eq!(
            parse_capacity_list(Some(&text("10，20,30"))),
            Some(vec![10.0, 20.0, 30.0])
        );
    }

    #[test]
    fn test_capacity_list_edge_cases() {
        assert_eq!(parse_capacity_list(Some(&text("500"))), Some(vec![500.0]));
        assert_eq!(parse_capacity_list(Some(&FormValue::Number(5.0))), Some(vec![5.0]));
        assert_eq!(parse_capacity_list(Some(&text(""))), None);
        assert_eq!(parse_capacity_list(Some(&text("10,x"))), None);
        assert_eq!(parse_capacity_list(None), None);
        assert_eq!(parse_capacity_list(Some(&FormValue::List(vec![]))), None);
        assert_eq!(
            parse_capacity_list(Some(&FormValue::List(vec![100.0, 200.0]))),
            Some(vec![100.0, 200.0])
        );
    }

    #[test]
    fn test_capacity_list_rejects_non_finite() {
        assert_eq!(
            parse_capacity_list(Some(&FormValue::List(vec![100.0, f64::NAN]))),
            None
        );
        assert_eq!(
            parse_capacity_list(Some(&FormValue::List(vec![f64::NEG_INFINITY]))),
            None
        );
        assert_eq!(parse_capacity_list(Some(&FormValue::Number(f64::INFINITY))), None);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some(&FormValue::Flag(true))));
        assert!(parse_flag(Some(&text("是"))));
        assert!(!parse_flag(Some(&text("否"))));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(13.0), "13");
        assert_eq!(format_number(4.9), "4.9");
        assert_eq!(format_param_value(None), "");
    }
}
