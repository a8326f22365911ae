// ==========================================
// 人员排班覆盖分析系统 - 引擎层
// ==========================================
// 职责: 实现覆盖分析的业务规则引擎
// 红线: 引擎不做 I/O,所有规则必须可解释
// ==========================================

pub mod aggregator;
pub mod applier;
pub mod risk;

// 重导出核心引擎
pub use aggregator::CoverageAggregator;
pub use applier::UpdateApplier;
pub use risk::RiskClassifier;
