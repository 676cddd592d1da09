// ==========================================
// 风光氢储综合评估系统 - JSON 文档读写
// ==========================================
// 格式: UTF-8，2 空格缩进，中文键原样输出
// ==========================================

use crate::store::error::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// 读取并解析 JSON 文档
pub fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    if !path.exists() {
        return Err(StoreError::FileNotFound(path.display().to_string()));
    }

    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| StoreError::JsonParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// 写出 JSON 文档（覆盖）
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let body = serde_json::to_string_pretty(value)
        .map_err(|e| StoreError::InternalError(format!("JSON 序列化失败: {}", e)))?;

    fs::write(path, body).map_err(|e| StoreError::FileWriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
