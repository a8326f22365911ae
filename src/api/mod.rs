// ==========================================
// 人员排班覆盖分析系统 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供外部 HTTP/工具层调用
// ==========================================

pub mod error;
pub mod insight_api;

// 重导出核心类型
pub use error::{InsightError, InsightResult};
pub use insight_api::{InsightApi, InsightFilter};
