// ==========================================
// 记账付款管理系统 - 付款优先级排程核心
// ==========================================
// 技术栈: Rust (纯同步,无 I/O)
// 系统定位: 决策支持核心 (上游 CRUD 层提供归一化输入)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 评分与预算分配规则
pub mod engine;

// 配置层 - 评分权重与阈值
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CategoryType, PaymentType, PriorityLevel};

// 领域实体
pub use domain::{PrioritizedItem, ScheduleItem, ScheduleSuggestion, SmartScheduleResult};

// 引擎
pub use engine::{EngineError, EngineResult, PriorityScorer, SmartScheduler};

// 配置
pub use config::ScoringProfile;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "付款优先级排程核心";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
