// ==========================================
// 人员排班覆盖分析系统 - API层错误类型
// ==========================================
// 职责: 定义查询边界错误,转换仓储错误为调用方可见的错误
// 约定: 数据源问题映射为服务端失败,过滤条件问题映射为
//       调用方拒绝;状态码映射由外部 HTTP/工具层负责
// ==========================================

use crate::repository::error::StoreError;
use thiserror::Error;

/// API层错误类型
///
/// "无匹配数据"不是错误: 空结果是合法的成功返回。
#[derive(Error, Debug)]
pub enum InsightError {
    /// 数据源不可读或 schema 校验失败,对当前请求致命
    #[error("数据源不可用: {0}")]
    DataUnavailable(String),

    /// 过滤条件值不在已知枚举内,在任何计算发生前拒绝
    #[error("无效过滤条件: {field}={value}")]
    InvalidFilter { field: String, value: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 StoreError 转换
// ==========================================
impl From<StoreError> for InsightError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DataUnavailable { .. } => InsightError::DataUnavailable(err.to_string()),
            StoreError::Other(e) => InsightError::Other(e),
        }
    }
}

/// Result 类型别名
pub type InsightResult<T> = Result<T, InsightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_conversion() {
        let store_err = StoreError::unavailable("/data/daily_staff.json", "读取失败");
        let api_err: InsightError = store_err.into();
        match api_err {
            InsightError::DataUnavailable(msg) => {
                assert!(msg.contains("daily_staff.json"));
            }
            _ => panic!("Expected DataUnavailable"),
        }
    }
}
