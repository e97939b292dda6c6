// ==========================================
// 付款优先级排程核心 - 命令行入口
// ==========================================
// 用法:
//   cargo run -- <items.json> <budget> [as_of]
//
// items.json: 归一化付款项目数组 (上游 CRUD 层导出格式)
// budget:     现金预算
// as_of:      基准日 (ISO 日期,缺省取今天; 引擎内部不读时钟)
// ==========================================

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use payment_scheduler::{logging, ScheduleItem, SmartScheduler};

fn main() -> Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", payment_scheduler::APP_NAME);
    tracing::info!("系统版本: {}", payment_scheduler::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let items_path = args
        .next()
        .ok_or_else(|| anyhow!("缺少参数: items.json 路径"))?;
    let budget: f64 = args
        .next()
        .ok_or_else(|| anyhow!("缺少参数: budget"))?
        .parse()
        .context("budget 必须是数字")?;

    // "今天"只在最外层边界兜底,引擎内部一律使用显式基准日
    let as_of: NaiveDate = match args.next() {
        Some(s) => s.parse().context("as_of 必须是 ISO 日期 (YYYY-MM-DD)")?,
        None => Local::now().date_naive(),
    };

    let raw = std::fs::read_to_string(&items_path)
        .with_context(|| format!("无法读取付款项目文件: {}", items_path))?;
    let items: Vec<ScheduleItem> =
        serde_json::from_str(&raw).context("付款项目 JSON 解析失败")?;

    tracing::info!(
        "载入 {} 个付款项目, 预算 {}, 基准日 {}",
        items.len(),
        budget,
        as_of
    );

    let scheduler = SmartScheduler::new();
    let result = scheduler.generate_smart_schedule(&items, budget, as_of)?;

    tracing::info!(
        "排入 {} 项 / 顺延 {} 项, 已分配 {}, 剩余预算 {}",
        result.scheduled_items.len(),
        result.deferred_items.len(),
        result.scheduled_total,
        result.remaining_budget
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
