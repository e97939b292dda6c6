// ==========================================
// 付款优先级排程核心 - 领域层
// ==========================================
// 职责: 领域实体与类型定义,不含业务规则
// ==========================================

pub mod payment;
pub mod types;

pub use payment::{PrioritizedItem, ScheduleItem, ScheduleSuggestion, SmartScheduleResult};
pub use types::{CategoryType, PaymentType, PriorityLevel};
