// ==========================================
// 双人周菜单规划系统 - 周菜单组装引擎
// ==========================================
// 职责: 驱动 7天 × 3时段 × 组件 的串行分配循环
// 输入: 菜品目录 + 总预算 + 偏好 + 受欢迎度缓存
// 输出: WeeklyMenu (允许部分槽位为空)
// 红线: 槽位选择严格串行,共享用量状态不可并发更新;
//       无候选的槽位保持为空,不回滚不中止
// ==========================================

use crate::config::PlannerSettings;
use crate::domain::dish::Dish;
use crate::domain::menu::{DayMenu, MealSlot, WeeklyMenu};
use crate::domain::types::{CuisineType, DietCategory, MealMoment};
use crate::engine::candidate_filter::CandidateFilter;
use crate::engine::rng::PlannerRng;
use crate::engine::scoring::{PopularityCache, ScoringModel};
use crate::engine::selector::ProbabilisticSelector;
use crate::engine::usage_state::UsageState;
use tracing::{debug, info, instrument};

// ==========================================
// WeeklyAssembler - 周菜单组装引擎
// ==========================================
pub struct WeeklyAssembler {
    filter: CandidateFilter,
    scoring: ScoringModel,
    selector: ProbabilisticSelector,
}

impl WeeklyAssembler {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            filter: CandidateFilter::new(),
            scoring: ScoringModel::new(),
            selector: ProbabilisticSelector::new(),
        }
    }

    /// 组装一周菜单
    ///
    /// 每个槽位的流程:
    /// 1) 时段预算 = (总预算/7) × 时段份额
    /// 2) 组件预算 = 时段预算 × 组件份额, 按声明顺序处理
    /// 3) 候选准入 → 逐个评分 → 概率选择
    /// 4) 选中后递增用量计数并更新时段菜系窗口
    ///
    /// # 参数
    /// - dishes: 菜品目录 (可为空,产出全空菜单)
    /// - total_budget: 一周总预算 (调用方已校验区间)
    /// - cuisine_prefs: 菜系偏好 (空 = 不限)
    /// - category_prefs: 饮食类别偏好 (空 = 不限)
    /// - popularity: 受欢迎度缓存
    /// - settings: 规划参数
    /// - rng: 随机源
    #[instrument(skip(self, dishes, cuisine_prefs, category_prefs, popularity, settings, rng), fields(
        dishes_count = dishes.len(),
        total_budget
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        &self,
        dishes: &[Dish],
        total_budget: f64,
        cuisine_prefs: &[CuisineType],
        category_prefs: &[DietCategory],
        popularity: &PopularityCache,
        settings: &PlannerSettings,
        rng: &mut PlannerRng,
    ) -> WeeklyMenu {
        info!(total_budget, dishes_count = dishes.len(), "开始组装周菜单");

        let daily_budget = total_budget / 7.0;
        let mut usage = UsageState::new();
        let mut menu = WeeklyMenu::empty();

        for day_index in 0..7 {
            let mut day = DayMenu::new(day_index);

            for moment in MealMoment::ALL {
                let moment_budget = daily_budget * settings.moment_share(moment);
                let slot = self.fill_slot(
                    dishes,
                    moment,
                    moment_budget,
                    day_index,
                    cuisine_prefs,
                    category_prefs,
                    &mut usage,
                    popularity,
                    settings,
                    rng,
                );
                day.meals.insert(moment, slot);
            }

            debug!(
                day_index,
                day_name = %day.day_name,
                assigned = day
                    .meals
                    .values()
                    .map(|slot| slot.components.len())
                    .sum::<usize>(),
                "单日菜单完成"
            );
            menu.days[day_index] = day;
        }

        info!(assigned_count = menu.assigned_count(), "周菜单组装完成");
        menu
    }

    /// 填充单个时段槽位 (2 或 3 个组件)
    #[allow(clippy::too_many_arguments)]
    fn fill_slot(
        &self,
        dishes: &[Dish],
        moment: MealMoment,
        moment_budget: f64,
        day_index: usize,
        cuisine_prefs: &[CuisineType],
        category_prefs: &[DietCategory],
        usage: &mut UsageState,
        popularity: &PopularityCache,
        settings: &PlannerSettings,
        rng: &mut PlannerRng,
    ) -> MealSlot {
        let mut slot = MealSlot::default();

        for (component, share) in settings.components_for(moment) {
            let component_budget = moment_budget * share;

            let candidates = self.filter.filter(
                dishes,
                moment,
                *component,
                component_budget,
                cuisine_prefs,
                category_prefs,
                usage,
                settings,
            );

            let scored: Vec<(f64, &Dish)> = candidates
                .into_iter()
                .map(|dish| {
                    let score = self.scoring.score(
                        dish,
                        component_budget,
                        moment,
                        day_index,
                        usage,
                        popularity,
                        settings,
                        rng,
                    );
                    (score, dish)
                })
                .collect();

            match self.selector.select(scored, settings.softmax_top_k, rng) {
                Some(dish) => {
                    usage.record_selection(
                        moment,
                        &dish.id,
                        dish.cuisine,
                        settings.recency_window_len,
                    );
                    slot.components.insert(*component, dish.clone());
                }
                None => {
                    // 无合格候选: 槽位保持为空
                    debug!(
                        day_index,
                        moment = %moment,
                        component = %component,
                        component_budget,
                        "组件无合格候选,保持为空"
                    );
                }
            }
        }

        slot
    }
}

impl Default for WeeklyAssembler {
    fn default() -> Self {
        Self::new()
    }
}
