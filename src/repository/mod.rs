// ==========================================
// 人员排班覆盖分析系统 - 数据仓储层
// ==========================================
// 职责: 提供数据集访问接口,屏蔽文件与缓存细节
// 红线: Repository 不含业务逻辑
// ==========================================

pub mod dataset_store;
pub mod error;

// 重导出核心仓储
pub use dataset_store::DatasetStore;
pub use error::{StoreError, StoreResult};
