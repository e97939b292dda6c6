// ==========================================
// 付款优先级排程核心 - 领域类型定义
// ==========================================
// 红线: 优先级等级由评分阈值派生,阈值集中在 ScoringProfile
// 序列化格式: snake_case (与上游归一化 JSON 一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 付款方式 (Payment Type)
// ==========================================
// 来源: 上游付款项目记录的 payment_type 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    Single,      // 单次付款
    Monthly,     // 按月付款
    Installment, // 分期付款
    Recurring,   // 周期付款
    #[default]
    Unspecified, // 未指定
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Single => write!(f, "single"),
            PaymentType::Monthly => write!(f, "monthly"),
            PaymentType::Installment => write!(f, "installment"),
            PaymentType::Recurring => write!(f, "recurring"),
            PaymentType::Unspecified => write!(f, "unspecified"),
        }
    }
}

// ==========================================
// 费用类别 (Category Type)
// ==========================================
// 来源: 上游付款项目所属类别的 category_type 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryType {
    Rent,        // 房租(租赁合同)
    Insurance,   // 保险(强制性)
    Utility,     // 水电杂费
    Installment, // 分期类费用
    General,     // 一般费用
    #[default]
    Unspecified, // 未指定
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryType::Rent => write!(f, "rent"),
            CategoryType::Insurance => write!(f, "insurance"),
            CategoryType::Utility => write!(f, "utility"),
            CategoryType::Installment => write!(f, "installment"),
            CategoryType::General => write!(f, "general"),
            CategoryType::Unspecified => write!(f, "unspecified"),
        }
    }
}

// ==========================================
// 优先级等级 (Priority Level)
// ==========================================
// 顺序: Low < Medium < High < Critical
// 由最终评分经阈值分类得出,阈值见 ScoringProfile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityLevel {
    Low,      // 低
    Medium,   // 中
    High,     // 高
    Critical, // 紧急
}

impl PriorityLevel {
    /// 按默认阈值将评分分类为优先级等级
    ///
    /// 阈值 (从高到低判定):
    /// - priority >= 100 → Critical
    /// - priority >= 50  → High
    /// - priority >= 20  → Medium
    /// - 其他            → Low
    pub fn from_score(score: u32) -> Self {
        crate::config::ScoringProfile::default().level_for(score)
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityLevel::Low => write!(f, "low"),
            PriorityLevel::Medium => write!(f, "medium"),
            PriorityLevel::High => write!(f, "high"),
            PriorityLevel::Critical => write!(f, "critical"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_level_ordering() {
        assert!(PriorityLevel::Low < PriorityLevel::Medium);
        assert!(PriorityLevel::Medium < PriorityLevel::High);
        assert!(PriorityLevel::High < PriorityLevel::Critical);
    }

    #[test]
    fn test_priority_level_boundaries() {
        // 阈值边界: 19/20, 49/50, 99/100
        assert_eq!(PriorityLevel::from_score(0), PriorityLevel::Low);
        assert_eq!(PriorityLevel::from_score(19), PriorityLevel::Low);
        assert_eq!(PriorityLevel::from_score(20), PriorityLevel::Medium);
        assert_eq!(PriorityLevel::from_score(49), PriorityLevel::Medium);
        assert_eq!(PriorityLevel::from_score(50), PriorityLevel::High);
        assert_eq!(PriorityLevel::from_score(99), PriorityLevel::High);
        assert_eq!(PriorityLevel::from_score(100), PriorityLevel::Critical);
        assert_eq!(PriorityLevel::from_score(240), PriorityLevel::Critical);
    }

    #[test]
    fn test_serde_wire_names() {
        // 与上游归一化 JSON 的 snake_case 命名一致
        assert_eq!(
            serde_json::to_string(&PaymentType::Monthly).unwrap(),
            "\"monthly\""
        );
        assert_eq!(
            serde_json::to_string(&CategoryType::Rent).unwrap(),
            "\"rent\""
        );
        assert_eq!(
            serde_json::to_string(&PriorityLevel::Critical).unwrap(),
            "\"critical\""
        );
        assert_eq!(
            serde_json::from_str::<PaymentType>("\"installment\"").unwrap(),
            PaymentType::Installment
        );
    }
}
