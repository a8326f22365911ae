// ==========================================
// 人员排班覆盖分析系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
///
/// 数据源不可读与 schema 校验失败同属一类: 对当前请求致命,
/// 且重试静态文件不会改变结果,引擎内部不做重试。
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("数据源不可用: path={path}, 原因: {reason}")]
    DataUnavailable { path: String, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoreError {
    /// 构造数据源不可用错误
    pub fn unavailable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::DataUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
