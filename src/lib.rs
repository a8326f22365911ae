// ==========================================
// 人员排班覆盖分析系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (覆盖洞察引擎)
// 输入: 基线排班 + 更新事件数据集
// 输出: 按 (日期, 班次, 岗位) 的覆盖洞察
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据集访问
pub mod repository;

// 引擎层 - 业务规则
pub mod engine;

// 配置层 - 风险阈值等业务参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{AssignmentStatus, RiskLevel, Shift};

// 领域实体
pub use domain::{
    BucketKey, CoverageBucket, CoverageInsight, CoverageReport, DateRange, EffectiveAssignment,
    ScheduleEntry, ScheduleSnapshot, UpdateEvent, UpdateKind, UpdateSnapshot,
};

// 仓储
pub use repository::{DatasetStore, StoreError, StoreResult};

// 引擎
pub use engine::{CoverageAggregator, RiskClassifier, UpdateApplier};

// 配置
pub use config::{CoverageConfig, RiskThresholds};

// API
pub use api::{InsightApi, InsightError, InsightFilter, InsightResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "人员排班覆盖分析系统";
