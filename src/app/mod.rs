// ==========================================
// 风光氢储综合评估系统 - 应用层
// ==========================================
// 职责: 界面外壳的调用入口，连接表单与项目存储
// ==========================================

pub mod session;

// 重导出
pub use session::AppSession;
