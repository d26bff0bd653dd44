// ==========================================
// 双人周菜单规划系统 - 多因子评分引擎
// ==========================================
// 职责: 对单个候选菜品计算加权综合分
// 因子: 价格 / 卡路里 / 多样性 / 受欢迎度 / 新鲜感
// 红线: 超预算候选直接记 0 分 (对过滤层的防御性复核)
// ==========================================

use crate::config::PlannerSettings;
use crate::domain::dish::Dish;
use crate::domain::menu::WEEKEND_START_INDEX;
use crate::domain::types::MealMoment;
use crate::engine::rng::PlannerRng;
use crate::engine::usage_state::UsageState;
use std::collections::HashMap;

// ==========================================
// HistoryRecord - 历史选择记录
// ==========================================
// 来自已保存菜单的反馈数据,用于构建受欢迎度缓存
#[derive(Debug, Clone)]
pub struct HistoryRecord {
    /// 该次生成中被选中的菜品ID
    pub selected_dish_ids: Vec<String>,

    /// 用户满意度 (0~100)
    pub satisfaction: f64,
}

// ==========================================
// PopularityCache - 受欢迎度缓存
// ==========================================
// 由历史选择频率与满意度预计算;无历史时一律 0.5
#[derive(Debug, Clone, Default)]
pub struct PopularityCache {
    scores: HashMap<String, f64>,
}

impl PopularityCache {
    /// 无历史数据的空缓存
    pub fn empty() -> Self {
        Self::default()
    }

    /// 从历史记录构建缓存
    ///
    /// 每个菜品: 选择频率按最大选择数归一,满意度取均值归一,
    /// 两者各占一半构成受欢迎度分
    pub fn from_history(records: &[HistoryRecord]) -> Self {
        let mut selections: HashMap<String, u32> = HashMap::new();
        let mut satisfactions: HashMap<String, Vec<f64>> = HashMap::new();

        for record in records {
            for dish_id in &record.selected_dish_ids {
                *selections.entry(dish_id.clone()).or_insert(0) += 1;
                satisfactions
                    .entry(dish_id.clone())
                    .or_default()
                    .push(record.satisfaction);
            }
        }

        let max_selections = selections.values().copied().max().unwrap_or(1).max(1);

        let mut scores = HashMap::new();
        for (dish_id, count) in &selections {
            let frequency = f64::from(*count) / f64::from(max_selections);
            let satisfaction_avg = satisfactions
                .get(dish_id)
                .map(|values| values.iter().sum::<f64>() / values.len() as f64)
                .unwrap_or(70.0)
                / 100.0;
            scores.insert(dish_id.clone(), (frequency + satisfaction_avg) / 2.0);
        }

        Self { scores }
    }

    /// 查询菜品的受欢迎度 (无记录时默认 0.5)
    pub fn score(&self, dish_id: &str) -> f64 {
        self.scores.get(dish_id).copied().unwrap_or(0.5)
    }
}

// ==========================================
// ScoringModel - 多因子评分引擎
// ==========================================
pub struct ScoringModel {
    // 无状态引擎,不需要注入依赖
}

impl ScoringModel {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 计算候选菜品的综合分
    ///
    /// 加权因子 (权重见 PlannerSettings):
    /// - 价格: 1 - 两人份价格/组件预算
    /// - 卡路里: 理想区间 1.0 / 可接受区间 0.7 / 其余 0.4
    /// - 多样性: 未用过 1.0 / 用过一次 0.3 / 两次及以上 0.1
    /// - 受欢迎度: 来自预计算缓存
    /// - 新鲜感: 菜系不在该时段近期窗口 1.0, 否则 0.3
    ///
    /// 之后叠加周末菜系加成与 [0.9, 1.1) 乘性抖动
    ///
    /// # 返回
    /// 综合分;两人份价格超出组件预算时返回 0
    #[allow(clippy::too_many_arguments)]
    pub fn score(
        &self,
        dish: &Dish,
        component_budget: f64,
        moment: MealMoment,
        day_index: usize,
        usage: &UsageState,
        popularity: &PopularityCache,
        settings: &PlannerSettings,
        rng: &mut PlannerRng,
    ) -> f64 {
        let price_for_two = dish.price_for_two();
        if price_for_two > component_budget {
            return 0.0;
        }

        let price_score = 1.0 - price_for_two / component_budget;

        let (ideal_lo, ideal_hi) = settings.calorie_ideal;
        let (ok_lo, ok_hi) = settings.calorie_acceptable;
        let calorie_score = if (ideal_lo..=ideal_hi).contains(&dish.calories) {
            1.0
        } else if (ok_lo..=ok_hi).contains(&dish.calories) {
            0.7
        } else {
            0.4
        };

        let variety_score = match usage.usage_count(&dish.id) {
            0 => 1.0,
            1 => 0.3,
            _ => 0.1,
        };

        let popularity_score = popularity.score(&dish.id);

        let novelty_score = if usage.cuisine_in_recency(moment, dish.cuisine) {
            0.3
        } else {
            1.0
        };

        let weights = &settings.weights;
        let mut final_score = price_score * weights.price
            + calorie_score * weights.calories
            + variety_score * weights.variety
            + popularity_score * weights.popularity
            + novelty_score * weights.novelty;

        // 周末允许更丰盛的菜系
        if day_index >= WEEKEND_START_INDEX
            && settings.weekend_bonus_cuisines.contains(&dish.cuisine)
        {
            final_score *= settings.weekend_bonus_multiplier;
        }

        // 乘性抖动,避免同输入跨次生成完全重复
        let (jitter_lo, jitter_hi) = settings.jitter_range;
        final_score *= rng.uniform(jitter_lo, jitter_hi);

        final_score
    }
}

impl Default for ScoringModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{ComponentRole, CuisineType, DietCategory};
    use std::collections::HashSet;

    fn dish(id: &str, price: f64, calories: i32, cuisine: CuisineType) -> Dish {
        Dish {
            id: id.to_string(),
            name: format!("plato {}", id),
            cuisine,
            category: DietCategory::Normal,
            role: ComponentRole::MainCourse,
            calories,
            price,
            moments: [MealMoment::Lunch].into_iter().collect::<HashSet<_>>(),
            ingredients: Vec::new(),
            preparation: String::new(),
        }
    }

    /// 抖动关掉、权重保留的参数,便于断言确定性分值
    fn no_jitter_settings() -> PlannerSettings {
        PlannerSettings {
            jitter_range: (1.0, 1.0000001),
            ..PlannerSettings::default()
        }
    }

    #[test]
    fn test_over_budget_scores_zero() {
        let model = ScoringModel::new();
        let settings = PlannerSettings::default();
        let usage = UsageState::new();
        let popularity = PopularityCache::empty();
        let mut rng = PlannerRng::from_seed(1);

        let d = dish("D1", 10.0, 300, CuisineType::Criolla);
        let score = model.score(
            &d,
            10.0, // 两人份 20.0 > 10.0
            MealMoment::Lunch,
            0,
            &usage,
            &popularity,
            &settings,
            &mut rng,
        );
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_unused_fresh_dish_beats_repeated_one() {
        let model = ScoringModel::new();
        let settings = no_jitter_settings();
        let popularity = PopularityCache::empty();

        let d = dish("D1", 3.0, 300, CuisineType::China);

        let fresh_usage = UsageState::new();
        let mut used_usage = UsageState::new();
        used_usage.record_selection(MealMoment::Lunch, "D1", CuisineType::China, 3);

        let mut rng = PlannerRng::from_seed(1);
        let fresh = model.score(
            &d,
            20.0,
            MealMoment::Dinner,
            0,
            &fresh_usage,
            &popularity,
            &settings,
            &mut rng,
        );
        let repeated = model.score(
            &d,
            20.0,
            MealMoment::Dinner,
            0,
            &used_usage,
            &popularity,
            &settings,
            &mut rng,
        );
        assert!(fresh > repeated);
    }

    #[test]
    fn test_novelty_penalizes_recent_cuisine() {
        let model = ScoringModel::new();
        let settings = no_jitter_settings();
        let popularity = PopularityCache::empty();

        let d = dish("D2", 3.0, 300, CuisineType::Marina);

        let clean = UsageState::new();
        let mut recent = UsageState::new();
        // 同时段选过其他海鲜菜品,D2 自身未用过
        recent.record_selection(MealMoment::Lunch, "OTRO", CuisineType::Marina, 3);

        let mut rng = PlannerRng::from_seed(5);
        let novel = model.score(
            &d,
            20.0,
            MealMoment::Lunch,
            0,
            &clean,
            &popularity,
            &settings,
            &mut rng,
        );
        let stale = model.score(
            &d,
            20.0,
            MealMoment::Lunch,
            0,
            &recent,
            &popularity,
            &settings,
            &mut rng,
        );
        assert!(novel > stale);
    }

    #[test]
    fn test_weekend_bonus_applies_to_marked_cuisines() {
        let model = ScoringModel::new();
        let settings = no_jitter_settings();
        let usage = UsageState::new();
        let popularity = PopularityCache::empty();

        let d = dish("D3", 3.0, 300, CuisineType::Criolla);

        let mut rng = PlannerRng::from_seed(9);
        let weekday = model.score(
            &d,
            20.0,
            MealMoment::Lunch,
            2,
            &usage,
            &popularity,
            &settings,
            &mut rng,
        );
        let weekend = model.score(
            &d,
            20.0,
            MealMoment::Lunch,
            6,
            &usage,
            &popularity,
            &settings,
            &mut rng,
        );
        // 抖动几乎关闭,周末分应高出约 1.1 倍
        assert!(weekend > weekday * 1.05);
    }

    #[test]
    fn test_calorie_bands() {
        let model = ScoringModel::new();
        let settings = no_jitter_settings();
        let usage = UsageState::new();
        let popularity = PopularityCache::empty();
        let mut rng = PlannerRng::from_seed(3);

        let ideal = dish("A", 3.0, 300, CuisineType::China);
        let acceptable = dish("B", 3.0, 480, CuisineType::China);
        let poor = dish("C", 3.0, 900, CuisineType::China);

        let score_of = |d: &Dish, rng: &mut PlannerRng| {
            model.score(
                d,
                20.0,
                MealMoment::Lunch,
                0,
                &usage,
                &popularity,
                &settings,
                rng,
            )
        };

        let s_ideal = score_of(&ideal, &mut rng);
        let s_acceptable = score_of(&acceptable, &mut rng);
        let s_poor = score_of(&poor, &mut rng);
        assert!(s_ideal > s_acceptable);
        assert!(s_acceptable > s_poor);
    }

    #[test]
    fn test_popularity_cache_from_history() {
        let records = vec![
            HistoryRecord {
                selected_dish_ids: vec!["D1".to_string(), "D2".to_string()],
                satisfaction: 90.0,
            },
            HistoryRecord {
                selected_dish_ids: vec!["D1".to_string()],
                satisfaction: 70.0,
            },
        ];
        let cache = PopularityCache::from_history(&records);

        // D1: 频率 2/2=1.0, 满意度 (90+70)/2/100=0.8 → (1.0+0.8)/2 = 0.9
        assert!((cache.score("D1") - 0.9).abs() < 1e-9);
        // D2: 频率 1/2=0.5, 满意度 0.9 → 0.7
        assert!((cache.score("D2") - 0.7).abs() < 1e-9);
        // 无历史 → 0.5
        assert_eq!(cache.score("D9"), 0.5);
    }
}
