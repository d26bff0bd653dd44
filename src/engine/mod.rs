// ==========================================
// 双人周菜单规划系统 - 引擎层
// ==========================================
// 职责: 实现菜单规划的业务规则引擎,不拼 SQL
// 红线: 引擎只消费内存中的目录集合,随机源显式注入
// ==========================================

pub mod assembler;
pub mod candidate_filter;
pub mod nutrition;
pub mod rng;
pub mod scoring;
pub mod selector;
pub mod shopping;
pub mod usage_state;

// 重导出核心引擎
pub use assembler::WeeklyAssembler;
pub use candidate_filter::CandidateFilter;
pub use nutrition::NutritionSummarizer;
pub use rng::PlannerRng;
pub use scoring::{HistoryRecord, PopularityCache, ScoringModel};
pub use selector::ProbabilisticSelector;
pub use shopping::{convert_to_market_unit, ShoppingListAggregator};
pub use usage_state::UsageState;
