// ==========================================
// 风光氢储综合评估系统 - 项目存储错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 项目存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    // ===== 项目状态错误 =====
    #[error("尚未创建或打开项目")]
    NoActiveProject,

    #[error("不是有效的项目目录（缺少 User_input.json 或 IndicatorSystem.json）: {0}")]
    InvalidProjectDir(String),

    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("文件写入失败 ({path}): {message}")]
    FileWriteError { path: String, message: String },

    #[error("JSON 解析失败 ({path}): {message}")]
    JsonParseError { path: String, message: String },

    // ===== 工作簿错误 =====
    #[error("Excel 写出失败 ({file}): {message}")]
    WorkbookWriteError { file: String, message: String },

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("未知的场景工作簿: {0}")]
    UnknownWorkbook(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::FileReadError(err.to_string())
    }
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for StoreError {
    fn from(err: calamine::XlsxError) -> Self {
        StoreError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
