// ==========================================
// 双人周菜单规划系统 - 营养汇总引擎
// ==========================================
// 职责: 汇总周菜单的卡路里 (两人份)
// 红线: 纯函数式汇总,同一菜单重复计算结果一致
// ==========================================

use crate::domain::menu::WeeklyMenu;
use crate::domain::nutrition::NutritionSummary;
use crate::domain::shopping::round2;
use tracing::debug;

// ==========================================
// NutritionSummarizer - 营养汇总引擎
// ==========================================
pub struct NutritionSummarizer {
    // 无状态引擎,不需要注入依赖
}

impl NutritionSummarizer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 汇总周菜单的卡路里
    ///
    /// 每个非空槽位计入 菜品卡路里 × 2 (两人份);
    /// 周总量 ÷ 7 为日均,日均 ÷ 2 为人均;
    /// 所有数值在产出点保留两位小数
    pub fn summarize(&self, menu: &WeeklyMenu) -> NutritionSummary {
        let mut per_day = [0.0_f64; 7];
        let mut dish_count = 0;

        for (day_index, _, _, dish) in menu.iter_assignments() {
            per_day[day_index] += f64::from(dish.calories) * 2.0;
            dish_count += 1;
        }

        let weekly_total: f64 = per_day.iter().sum();
        let daily_average = weekly_total / 7.0;
        let per_person_average = daily_average / 2.0;

        debug!(weekly_total, dish_count, "营养汇总完成");

        NutritionSummary {
            weekly_total: round2(weekly_total),
            daily_average: round2(daily_average),
            per_person_average: round2(per_person_average),
            per_day: per_day.map(round2),
            dish_count,
        }
    }
}

impl Default for NutritionSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dish::Dish;
    use crate::domain::menu::MealSlot;
    use crate::domain::types::{
        ComponentRole, CuisineType, DietCategory, MealMoment, MenuComponent,
    };
    use std::collections::HashSet;

    fn dish(id: &str, calories: i32) -> Dish {
        Dish {
            id: id.to_string(),
            name: format!("plato {}", id),
            cuisine: CuisineType::Criolla,
            category: DietCategory::Normal,
            role: ComponentRole::MainCourse,
            calories,
            price: 3.0,
            moments: [MealMoment::Lunch].into_iter().collect::<HashSet<_>>(),
            ingredients: Vec::new(),
            preparation: String::new(),
        }
    }

    fn menu_with_two_dishes() -> WeeklyMenu {
        let mut menu = WeeklyMenu::empty();
        let mut slot = MealSlot::default();
        slot.components.insert(MenuComponent::MainCourse, dish("D1", 350));
        menu.days[0].meals.insert(MealMoment::Lunch, slot);

        let mut slot = MealSlot::default();
        slot.components.insert(MenuComponent::MainCourse, dish("D2", 400));
        menu.days[3].meals.insert(MealMoment::Dinner, slot);
        menu
    }

    #[test]
    fn test_summary_totals() {
        let summarizer = NutritionSummarizer::new();
        let summary = summarizer.summarize(&menu_with_two_dishes());

        // (350 + 400) × 2 = 1500
        assert_eq!(summary.weekly_total, 1500.0);
        assert_eq!(summary.per_day[0], 700.0);
        assert_eq!(summary.per_day[3], 800.0);
        assert_eq!(summary.per_day[1], 0.0);
        assert_eq!(summary.dish_count, 2);
        assert_eq!(summary.daily_average, round2(1500.0 / 7.0));
        assert_eq!(summary.per_person_average, round2(1500.0 / 7.0 / 2.0));
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let summarizer = NutritionSummarizer::new();
        let menu = menu_with_two_dishes();
        let first = summarizer.summarize(&menu);
        let second = summarizer.summarize(&menu);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_menu_summary() {
        let summarizer = NutritionSummarizer::new();
        let summary = summarizer.summarize(&WeeklyMenu::empty());
        assert_eq!(summary.weekly_total, 0.0);
        assert_eq!(summary.dish_count, 0);
    }
}
