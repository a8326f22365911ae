// ==========================================
// 人员排班覆盖分析系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod coverage;
pub mod schedule;
pub mod types;
pub mod update;

// 重导出核心类型
pub use coverage::{
    BucketKey, CoverageBucket, CoverageInsight, CoverageReport, EffectiveAssignment,
};
pub use schedule::{DateRange, ScheduleEntry, ScheduleSnapshot};
pub use types::{AssignmentStatus, RiskLevel, Shift};
pub use update::{UpdateEvent, UpdateKind, UpdateSnapshot};
