// ==========================================
// 付款优先级排程核心 - 付款领域模型
// ==========================================
// 红线: ScheduleItem 是上游归一化后的只读输入,引擎不回写
// 用途: 上游付款清单服务写入,排程引擎只读
// ==========================================

use crate::domain::types::{CategoryType, PaymentType, PriorityLevel};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// ScheduleItem - 归一化付款项目
// ==========================================
// 约定 (由调用方保证,引擎不校验但也不会崩溃):
// - remaining_amount = total_amount - paid_amount
// - overdue_days > 0 当且仅当 is_overdue = true
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleItem {
    // ===== 标识 =====
    pub id: i64,      // 付款项目ID
    pub name: String, // 显示名称

    // ===== 金额 =====
    pub total_amount: f64,     // 应付总额
    pub paid_amount: f64,      // 已付金额
    pub remaining_amount: f64, // 剩余应付 (= total - paid)

    // ===== 时间 =====
    #[serde(default)]
    pub due_date: Option<NaiveDate>, // 到期日 (可缺失)

    // ===== 分类 =====
    #[serde(default)]
    pub payment_type: PaymentType, // 付款方式
    #[serde(default)]
    pub category_type: CategoryType, // 费用类别

    // ===== 状态标记 (调用方相对"今天"预计算) =====
    #[serde(default)]
    pub is_overdue: bool, // 是否逾期
    #[serde(default)]
    pub overdue_days: i64, // 逾期天数 (未逾期为 0)
    #[serde(default)]
    pub has_late_fee: bool, // 是否有滞纳金风险

    // ===== 展示元数据 =====
    #[serde(default)]
    pub project_name: Option<String>, // 所属项目名称
}

// ==========================================
// PrioritizedItem - 已评分付款项目
// ==========================================
// 由 PriorityScorer 派生,原始输入字段整体复制,不回写上游
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritizedItem {
    /// 原始付款项目 (整体复制)
    pub item: ScheduleItem,

    /// 优先级评分 (各规则加分之和)
    pub priority: u32,

    /// 优先级等级 (评分经阈值分类)
    pub priority_level: PriorityLevel,

    /// 命中规则说明 (按规则判定顺序以 ", " 连接, 可解释性)
    pub reason: String,
}

// ==========================================
// ScheduleSuggestion - 按日付款建议
// ==========================================
// 按到期日聚合的已评分项目分组,供付款日历类调用方使用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSuggestion {
    pub date: NaiveDate,              // 到期日
    pub items: Vec<PrioritizedItem>,  // 当日项目 (组内按优先级降序)
    pub daily_total: f64,             // 当日剩余应付合计
}

// ==========================================
// SmartScheduleResult - 预算分配结果
// ==========================================
// 由 SmartScheduler 产出: 在预算约束下的 scheduled/deferred 划分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmartScheduleResult {
    /// 全部项目剩余应付合计 (与预算无关)
    pub total_needed: f64,

    /// total_needed > budget
    pub is_over_budget: bool,

    /// 等级为 Critical 或 High 的项目 (纯过滤,不受预算限制)
    pub critical_items: Vec<PrioritizedItem>,

    /// 预算内选中付款的项目 (保持优先级降序)
    pub scheduled_items: Vec<PrioritizedItem>,

    /// 未选中的项目 (保持优先级降序)
    pub deferred_items: Vec<PrioritizedItem>,

    /// 已分配金额 (= budget - remaining_budget)
    pub scheduled_total: f64,

    /// 剩余预算
    pub remaining_budget: f64,
}
