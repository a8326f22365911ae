// ==========================================
// 人员排班覆盖分析系统 - 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 由嵌入引擎的外部服务进程在启动时调用
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 缺省日志级别
const DEFAULT_FILTER: &str = "info";

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器（默认: info）
///   例如: RUST_LOG=debug 或 RUST_LOG=workforce_coverage=trace
///
/// # 示例
/// ```no_run
/// use workforce_coverage::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 初始化测试环境的日志系统 (幂等,可在多个测试中重复调用)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
