// ==========================================
// 付款优先级排程核心 - 配置层
// ==========================================
// 职责: 评分权重与等级阈值配置
// ==========================================

pub mod scoring_profile;

pub use scoring_profile::ScoringProfile;
