// ==========================================
// 付款优先级排程核心 - 日志系统初始化
// ==========================================
// 使用 tracing / tracing-subscriber (EnvFilter)
// 引擎内部只打点,订阅器统一在进程入口装配
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统 (进程入口调用一次)
///
/// 日志级别通过 RUST_LOG 控制,默认 info,
/// 例如: RUST_LOG=payment_scheduler=trace
pub fn init() {
    init_with_default("info");
}

/// 初始化测试环境的日志系统 (可重复调用)
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn init_with_default(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}
