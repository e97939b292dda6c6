// ==========================================
// 付款优先级排程核心 - 预算贪心分配引擎
// ==========================================
// 红线: 预算约束优先于单项优先级,但不做背包回溯
// 红线: 项目不可拆分,要么全额排入,要么整体顺延
// ==========================================
// 职责: 在现金预算约束下划分 scheduled/deferred
// 输入: 归一化付款项目列表 + 预算 + 基准日
// 输出: SmartScheduleResult / 逾期视图 / 按日建议
// ==========================================

use crate::config::ScoringProfile;
use crate::domain::payment::{
    PrioritizedItem, ScheduleItem, ScheduleSuggestion, SmartScheduleResult,
};
use crate::domain::types::PriorityLevel;
use crate::engine::error::{EngineError, EngineResult};
use crate::engine::scoring::PriorityScorer;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// SmartScheduler - 预算贪心分配引擎
// ==========================================
pub struct SmartScheduler {
    scorer: PriorityScorer,
}

impl SmartScheduler {
    /// 按默认评分策略构造
    pub fn new() -> Self {
        Self {
            scorer: PriorityScorer::new(),
        }
    }

    /// 按指定评分策略构造
    pub fn with_profile(profile: ScoringProfile) -> Self {
        Self {
            scorer: PriorityScorer::with_profile(profile),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 预算约束下的贪心分配
    ///
    /// 算法:
    /// 1) 全量评分
    /// 2) 按优先级稳定降序排序 (同分保持输入顺序)
    /// 3) total_needed = Σ 剩余应付 (负值/非有限值按 0 计)
    /// 4) critical_items = 等级 ∈ {Critical, High} 的纯过滤,不受预算限制
    /// 5) 单次遍历: 剩余预算够付则排入并扣减,否则顺延;
    ///    不回溯已跳过项目 (贪心,非背包最优)
    ///
    /// # 参数
    /// - `items`: 归一化付款项目列表 (可为空)
    /// - `budget`: 现金预算 (必须为非负有限数,否则 InvalidBudget)
    /// - `as_of`: 基准日
    ///
    /// # 返回
    /// SmartScheduleResult; 恒有 scheduled_total + remaining_budget = budget
    #[instrument(skip(self, items), fields(count = items.len(), budget = budget, as_of = %as_of))]
    pub fn generate_smart_schedule(
        &self,
        items: &[ScheduleItem],
        budget: f64,
        as_of: NaiveDate,
    ) -> EngineResult<SmartScheduleResult> {
        // 预算校验: 负预算/NaN/无穷直接拒绝
        if !budget.is_finite() || budget < 0.0 {
            return Err(EngineError::InvalidBudget { budget });
        }

        let scored = self.scorer.score_batch(items, as_of);
        let ranked = PriorityScorer::sort_by_priority(scored);

        let total_needed: f64 = ranked.iter().map(|p| Self::payable_amount(&p.item)).sum();

        let critical_items: Vec<PrioritizedItem> = ranked
            .iter()
            .filter(|p| p.priority_level >= PriorityLevel::High)
            .cloned()
            .collect();

        // 贪心分配: 单次遍历,不拆分,不回溯
        let mut remaining_budget = budget;
        let mut scheduled_items = Vec::new();
        let mut deferred_items = Vec::new();
        for prioritized in ranked {
            let amount = Self::payable_amount(&prioritized.item);
            if remaining_budget >= amount {
                remaining_budget -= amount;
                scheduled_items.push(prioritized);
            } else {
                deferred_items.push(prioritized);
            }
        }

        let scheduled_total = budget - remaining_budget;

        Ok(SmartScheduleResult {
            total_needed,
            is_over_budget: total_needed > budget,
            critical_items,
            scheduled_items,
            deferred_items,
            scheduled_total,
            remaining_budget,
        })
    }

    /// 逾期改排视图 (只读)
    ///
    /// 过滤 is_overdue 项目并按优先级稳定降序返回;
    /// 不修改任何排期字段,实际改排由持久层负责
    #[instrument(skip(self, items), fields(count = items.len(), as_of = %as_of))]
    pub fn get_overdue_reschedule_items(
        &self,
        items: &[ScheduleItem],
        as_of: NaiveDate,
    ) -> Vec<PrioritizedItem> {
        let overdue: Vec<ScheduleItem> = items
            .iter()
            .filter(|item| item.is_overdue)
            .cloned()
            .collect();
        let scored = self.scorer.score_batch(&overdue, as_of);
        PriorityScorer::sort_by_priority(scored)
    }

    /// 按到期日聚合付款建议
    ///
    /// 无到期日的项目不参与聚合; 日期升序,
    /// 组内按优先级稳定降序,daily_total 为当日剩余应付合计
    pub fn suggest_by_due_date(
        &self,
        items: &[ScheduleItem],
        as_of: NaiveDate,
    ) -> Vec<ScheduleSuggestion> {
        let scored = self.scorer.score_batch(items, as_of);

        // 按到期日分组 (BTreeMap 保证日期升序)
        let mut grouped: BTreeMap<NaiveDate, Vec<PrioritizedItem>> = BTreeMap::new();
        for prioritized in scored {
            if let Some(due) = prioritized.item.due_date {
                grouped.entry(due).or_default().push(prioritized);
            }
        }

        grouped
            .into_iter()
            .map(|(date, group)| {
                let group = PriorityScorer::sort_by_priority(group);
                let daily_total = group.iter().map(|p| Self::payable_amount(&p.item)).sum();
                ScheduleSuggestion {
                    date,
                    items: group,
                    daily_total,
                }
            })
            .collect()
    }

    // ==========================================
    // 金额口径
    // ==========================================

    /// 参与分配的金额口径: 负值/非有限值在边界钳制为 0
    ///
    /// 钳制后的零额项目视为"免费",永远排入 (与预算无关)
    fn payable_amount(item: &ScheduleItem) -> f64 {
        if item.remaining_amount.is_finite() {
            item.remaining_amount.max(0.0)
        } else {
            0.0
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for SmartScheduler {
    fn default() -> Self {
        Self::new()
    }
}
