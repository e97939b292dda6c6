// ==========================================
// 付款优先级排程核心 - 评分策略配置
// ==========================================
// 职责: 集中管理规则权重与等级阈值
// 默认值即产品口径,引擎默认按此构造
// ==========================================

use crate::domain::types::PriorityLevel;
use serde::{Deserialize, Serialize};

/// 评分策略 (权重/阈值)
///
/// 所有字段支持从配置 JSON 部分覆盖,缺失字段取默认值
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringProfile {
    // ===== 规则权重 =====
    /// 逾期加分
    pub overdue_weight: u32,

    /// 滞纳金风险加分
    pub late_fee_weight: u32,

    /// 房租(租赁合同)加分
    pub rent_weight: u32,

    /// 强制保险加分
    pub insurance_weight: u32,

    /// 3日内到期加分
    pub due_within_3_weight: u32,

    /// 4~7日内到期加分
    pub due_within_7_weight: u32,

    /// 分期付款加分
    pub installment_weight: u32,

    /// 按月付款加分
    pub monthly_weight: u32,

    // ===== 等级阈值 =====
    /// priority >= critical_threshold → Critical
    pub critical_threshold: u32,

    /// priority >= high_threshold → High
    pub high_threshold: u32,

    /// priority >= medium_threshold → Medium
    pub medium_threshold: u32,
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self {
            overdue_weight: 100,
            late_fee_weight: 80,
            rent_weight: 60,
            insurance_weight: 50,
            due_within_3_weight: 40,
            due_within_7_weight: 20,
            installment_weight: 30,
            monthly_weight: 15,
            critical_threshold: 100,
            high_threshold: 50,
            medium_threshold: 20,
        }
    }
}

impl ScoringProfile {
    /// 评分 → 优先级等级 (从高到低判定)
    pub fn level_for(&self, score: u32) -> PriorityLevel {
        if score >= self.critical_threshold {
            PriorityLevel::Critical
        } else if score >= self.high_threshold {
            PriorityLevel::High
        } else if score >= self.medium_threshold {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }
}
