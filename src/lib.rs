// ==========================================
// 双人周菜单规划系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 预算约束下的周菜单决策引擎
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 规划参数
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// 数据仓储层 - 数据访问
pub mod repository;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    ComponentRole, CuisineType, DietCategory, IngredientCategory, MealMoment, MenuComponent, Unit,
};

// 领域实体
pub use domain::{
    Dish, Ingredient, IngredientSpec, NutritionSummary, ShoppingList, ShoppingListItem, WeeklyMenu,
};

// 配置
pub use config::{PlannerSettings, BUDGET_MAX, BUDGET_MIN};

// 引擎
pub use engine::{
    CandidateFilter, NutritionSummarizer, PlannerRng, PopularityCache, ProbabilisticSelector,
    ScoringModel, ShoppingListAggregator, UsageState, WeeklyAssembler,
};

// API
pub use api::{GenerateMenuRequest, GeneratedMenu, MenuApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "双人周菜单规划系统";
