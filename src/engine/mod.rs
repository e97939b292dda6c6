// ==========================================
// 付款优先级排程核心 - 引擎层
// ==========================================
// 职责: 实现评分与预算分配规则,无 I/O,无共享状态
// 红线: 引擎不读全局时钟,基准日 as_of 由调用方注入
// 红线: 所有规则必须输出 reason
// ==========================================

pub mod error;
pub mod scheduler;
pub mod scoring;

// 重导出核心引擎
pub use error::{EngineError, EngineResult};
pub use scheduler::SmartScheduler;
pub use scoring::PriorityScorer;
