// ==========================================
// 付款优先级排程核心 - 优先级评分引擎
// ==========================================
// 红线: 全函数,可缺失字段视为"规则不命中",永不 panic
// 红线: 所有规则必须输出 reason
// ==========================================
// 职责: 对单个付款项目累加评分并分类等级
// 输入: ScheduleItem + 基准日 as_of (时钟由调用方注入)
// 输出: PrioritizedItem (评分 + 等级 + 命中规则说明)
// ==========================================

use crate::config::ScoringProfile;
use crate::domain::payment::{PrioritizedItem, ScheduleItem};
use crate::domain::types::{CategoryType, PaymentType};
use chrono::NaiveDate;
use tracing::instrument;

/// 兜底说明 (无任何规则命中时)
const FALLBACK_REASON: &str = "general item";

/// 命中规则 (加分 + 说明)
#[derive(Debug, Clone)]
struct FiredRule {
    points: u32,
    reason: String,
}

// ==========================================
// PriorityScorer - 优先级评分引擎
// ==========================================
pub struct PriorityScorer {
    profile: ScoringProfile,
}

impl PriorityScorer {
    /// 按默认评分策略构造
    pub fn new() -> Self {
        Self {
            profile: ScoringProfile::default(),
        }
    }

    /// 按指定评分策略构造
    pub fn with_profile(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 对单个付款项目评分
    ///
    /// 规则加分独立累加,判定顺序只影响 reason 的排列:
    /// 1) 逾期            → +overdue_weight ("overdue {n} days")
    /// 2) 滞纳金风险      → +late_fee_weight ("late-fee risk")
    /// 3) 房租            → +rent_weight ("rent contract")
    /// 4) 强制保险        → +insurance_weight ("mandatory insurance")
    /// 5) 0~3日内到期     → +due_within_3_weight ("due within 3 days")
    /// 6) 4~7日内到期     → +due_within_7_weight ("due within 7 days")
    ///    (5/6 互斥,每个项目最多命中其一)
    /// 7) 分期付款        → +installment_weight ("installment obligation")
    /// 8) 按月付款        → +monthly_weight ("monthly payment")
    ///
    /// # 参数
    /// - `item`: 归一化付款项目
    /// - `as_of`: 基准日 (临期天数 = due_date - as_of,整天)
    ///
    /// # 返回
    /// PrioritizedItem (输入字段整体复制 + 派生字段)
    pub fn score(&self, item: &ScheduleItem, as_of: NaiveDate) -> PrioritizedItem {
        let fired = self.evaluate_rules(item, as_of);

        let priority: u32 = fired.iter().map(|r| r.points).sum();
        let reason = if fired.is_empty() {
            FALLBACK_REASON.to_string()
        } else {
            fired
                .iter()
                .map(|r| r.reason.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };

        PrioritizedItem {
            item: item.clone(),
            priority,
            priority_level: self.profile.level_for(priority),
            reason,
        }
    }

    /// 批量评分
    #[instrument(skip(self, items), fields(count = items.len(), as_of = %as_of))]
    pub fn score_batch(&self, items: &[ScheduleItem], as_of: NaiveDate) -> Vec<PrioritizedItem> {
        items.iter().map(|item| self.score(item, as_of)).collect()
    }

    /// 按优先级降序排序 (稳定: 同分保持原相对顺序)
    ///
    /// 评分无次级排序键,输入顺序即同分项的先后
    pub fn sort_by_priority(mut items: Vec<PrioritizedItem>) -> Vec<PrioritizedItem> {
        items.sort_by(|a, b| b.priority.cmp(&a.priority));
        items
    }

    // ==========================================
    // 规则判定
    // ==========================================

    /// 按固定顺序判定全部规则,返回命中列表
    fn evaluate_rules(&self, item: &ScheduleItem, as_of: NaiveDate) -> Vec<FiredRule> {
        let mut fired = Vec::new();

        // 规则1: 逾期
        if item.is_overdue {
            fired.push(FiredRule {
                points: self.profile.overdue_weight,
                reason: format!("overdue {} days", item.overdue_days),
            });
        }

        // 规则2: 滞纳金风险
        if item.has_late_fee {
            fired.push(FiredRule {
                points: self.profile.late_fee_weight,
                reason: "late-fee risk".to_string(),
            });
        }

        // 规则3: 房租(租赁合同)
        if item.category_type == CategoryType::Rent {
            fired.push(FiredRule {
                points: self.profile.rent_weight,
                reason: "rent contract".to_string(),
            });
        }

        // 规则4: 强制保险
        if item.category_type == CategoryType::Insurance {
            fired.push(FiredRule {
                points: self.profile.insurance_weight,
                reason: "mandatory insurance".to_string(),
            });
        }

        // 规则5/6: 临期 (互斥,负天数不命中,逾期只走 is_overdue 标记)
        if let Some(days) = Self::days_until_due(item, as_of) {
            if (0..=3).contains(&days) {
                fired.push(FiredRule {
                    points: self.profile.due_within_3_weight,
                    reason: "due within 3 days".to_string(),
                });
            } else if (4..=7).contains(&days) {
                fired.push(FiredRule {
                    points: self.profile.due_within_7_weight,
                    reason: "due within 7 days".to_string(),
                });
            }
        }

        // 规则7: 分期付款
        if item.payment_type == PaymentType::Installment {
            fired.push(FiredRule {
                points: self.profile.installment_weight,
                reason: "installment obligation".to_string(),
            });
        }

        // 规则8: 按月付款
        if item.payment_type == PaymentType::Monthly {
            fired.push(FiredRule {
                points: self.profile.monthly_weight,
                reason: "monthly payment".to_string(),
            });
        }

        fired
    }

    /// 距到期整天数 (due_date - as_of); 无到期日返回 None
    fn days_until_due(item: &ScheduleItem, as_of: NaiveDate) -> Option<i64> {
        item.due_date.map(|due| (due - as_of).num_days())
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PriorityScorer {
    fn default() -> Self {
        Self::new()
    }
}
