// ==========================================
// 双人周菜单规划系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod dish;
pub mod ingredient;
pub mod menu;
pub mod nutrition;
pub mod shopping;
pub mod types;

// 重导出核心类型
pub use dish::{Dish, IngredientSpec};
pub use ingredient::Ingredient;
pub use menu::{DayMenu, MealSlot, WeeklyMenu, DAY_NAMES, WEEKEND_START_INDEX};
pub use nutrition::NutritionSummary;
pub use shopping::{round2, ShoppingList, ShoppingListItem};
pub use types::{
    ComponentRole, CuisineType, DietCategory, IngredientCategory, MealMoment, MenuComponent, Unit,
};
