// ==========================================
// 双人周菜单规划系统 - 候选准入引擎
// ==========================================
// 职责: 把菜品目录收窄为某个槽位的合格候选集
// 输入: 菜品目录 + 槽位上下文 + 用量状态
// 输出: 候选菜品引用列表 (可为空,空集不是错误)
// 红线: 只过滤不评分,规则失配静默排除
// ==========================================

use crate::config::PlannerSettings;
use crate::domain::dish::Dish;
use crate::domain::types::{CuisineType, DietCategory, MealMoment, MenuComponent};
use crate::engine::usage_state::UsageState;
use tracing::debug;

// ==========================================
// CandidateFilter - 候选准入引擎
// ==========================================
pub struct CandidateFilter {
    // 无状态引擎,不需要注入依赖
}

impl CandidateFilter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 过滤出槽位的合格候选
    ///
    /// 规则按序应用,任一失配即排除:
    /// 1) 菜品适用于该时段
    /// 2) 结构角色满足组件槽位 (Principal 接受三明治类/主菜)
    /// 3) 菜系偏好非空时,菜系必须在偏好内
    /// 4) 饮食类别偏好非空时,类别必须在偏好内
    /// 5) 两人份价格不超过组件预算
    /// 6) 本周已选次数低于重复上限
    ///
    /// # 参数
    /// - dishes: 菜品目录
    /// - moment: 用餐时段
    /// - component: 组件槽位
    /// - component_budget: 组件预算 (两人份)
    /// - cuisine_prefs: 菜系偏好 (空 = 不限)
    /// - category_prefs: 饮食类别偏好 (空 = 不限)
    /// - usage: 本周用量状态
    /// - settings: 规划参数
    #[allow(clippy::too_many_arguments)]
    pub fn filter<'a>(
        &self,
        dishes: &'a [Dish],
        moment: MealMoment,
        component: MenuComponent,
        component_budget: f64,
        cuisine_prefs: &[CuisineType],
        category_prefs: &[DietCategory],
        usage: &UsageState,
        settings: &PlannerSettings,
    ) -> Vec<&'a Dish> {
        let candidates: Vec<&Dish> = dishes
            .iter()
            .filter(|dish| dish.available_at(moment))
            .filter(|dish| component.accepts(dish.role))
            .filter(|dish| cuisine_prefs.is_empty() || cuisine_prefs.contains(&dish.cuisine))
            .filter(|dish| category_prefs.is_empty() || category_prefs.contains(&dish.category))
            .filter(|dish| dish.price_for_two() <= component_budget)
            .filter(|dish| usage.usage_count(&dish.id) < settings.repetition_ceiling)
            .collect();

        debug!(
            moment = %moment,
            component = %component,
            component_budget,
            candidates_count = candidates.len(),
            "候选准入过滤完成"
        );

        candidates
    }
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::new()
    }
}
