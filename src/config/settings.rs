// ==========================================
// 双人周菜单规划系统 - 规划参数
// ==========================================
// 职责: 菜单规划引擎的全部可调参数
// 红线: 引擎不读全局状态,参数按引用传入每次调用
// ==========================================

use crate::domain::types::{CuisineType, MealMoment, MenuComponent};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// 预算允许区间 (货币单位)
pub const BUDGET_MIN: f64 = 120.0;
pub const BUDGET_MAX: f64 = 600.0;

/// 参数校验错误
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("评分权重之和必须为 1.0, 实际 {0}")]
    WeightSumInvalid(f64),

    #[error("时段预算份额之和必须为 1.0, 实际 {0}")]
    MomentShareSumInvalid(f64),

    #[error("{moment} 的组件预算份额之和必须为 1.0, 实际 {sum}")]
    ComponentShareSumInvalid { moment: MealMoment, sum: f64 },

    #[error("重复上限必须 >= 1, 实际 {0}")]
    RepetitionCeilingInvalid(u32),
}

// ==========================================
// ScoreWeights - 多因子评分权重
// ==========================================
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// 价格因子权重
    pub price: f64,
    /// 卡路里因子权重
    pub calories: f64,
    /// 多样性因子权重 (按周内重复次数)
    pub variety: f64,
    /// 受欢迎度因子权重
    pub popularity: f64,
    /// 新鲜感因子权重 (按时段近期菜系)
    pub novelty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            price: 0.30,
            calories: 0.20,
            variety: 0.25,
            popularity: 0.15,
            novelty: 0.10,
        }
    }
}

impl ScoreWeights {
    /// 权重之和
    pub fn sum(&self) -> f64 {
        self.price + self.calories + self.variety + self.popularity + self.novelty
    }
}

// ==========================================
// PlannerSettings - 规划参数全集
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// 单个菜品一周内的重复上限 (取两个来源路径中较严格的 2)
    pub repetition_ceiling: u32,

    /// 每个时段的菜系近期窗口长度
    pub recency_window_len: usize,

    /// 评分权重
    pub weights: ScoreWeights,

    /// 理想卡路里区间 [200, 400] → 1.0
    pub calorie_ideal: (i32, i32),

    /// 可接受卡路里区间 [150, 500] → 0.7 (区间外 0.4)
    pub calorie_acceptable: (i32, i32),

    /// 周末加成的菜系集合
    pub weekend_bonus_cuisines: Vec<CuisineType>,

    /// 周末加成倍率
    pub weekend_bonus_multiplier: f64,

    /// 评分抖动区间 (均匀分布,乘性)
    pub jitter_range: (f64, f64),

    /// softmax 抽样保留的候选数
    pub softmax_top_k: usize,

    /// 按个售卖的食材 → 平均单个重量 (g)
    pub piece_weights_g: HashMap<String, f64>,

    /// 按个售卖食材的默认平均重量 (g)
    pub default_piece_weight_g: f64,

    /// 按捆售卖的食材 (一周固定买 1 捆)
    pub bundle_ingredients: Vec<String>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        let piece_weights_g: HashMap<String, f64> = [
            ("huevo".to_string(), 50.0),
            ("pan francés".to_string(), 80.0),
            ("palta".to_string(), 200.0),
            ("limón".to_string(), 100.0),
        ]
        .into_iter()
        .collect();

        Self {
            repetition_ceiling: 2,
            recency_window_len: 3,
            weights: ScoreWeights::default(),
            calorie_ideal: (200, 400),
            calorie_acceptable: (150, 500),
            weekend_bonus_cuisines: vec![CuisineType::Criolla, CuisineType::Marina],
            weekend_bonus_multiplier: 1.1,
            jitter_range: (0.9, 1.1),
            softmax_top_k: 5,
            piece_weights_g,
            default_piece_weight_g: 100.0,
            bundle_ingredients: vec![
                "culantro".to_string(),
                "cebolla china".to_string(),
                "apio".to_string(),
                "huacatay".to_string(),
            ],
        }
    }
}

impl PlannerSettings {
    /// 时段在日预算中的份额
    pub fn moment_share(&self, moment: MealMoment) -> f64 {
        match moment {
            MealMoment::Breakfast => 0.25,
            MealMoment::Lunch => 0.50,
            MealMoment::Dinner => 0.25,
        }
    }

    /// 时段内各组件的预算份额 (按请求顺序)
    pub fn components_for(&self, moment: MealMoment) -> &'static [(MenuComponent, f64)] {
        match moment {
            MealMoment::Breakfast => &[
                (MenuComponent::Beverage, 0.30),
                (MenuComponent::Principal, 0.70),
            ],
            MealMoment::Lunch | MealMoment::Dinner => &[
                (MenuComponent::Beverage, 0.15),
                (MenuComponent::Appetizer, 0.30),
                (MenuComponent::MainCourse, 0.55),
            ],
        }
    }

    /// 是否按个售卖
    pub fn is_piece_ingredient(&self, name: &str) -> bool {
        self.piece_weights_g.contains_key(name)
    }

    /// 按个售卖食材的平均单个重量 (g), 未登记时用默认值
    pub fn piece_weight_g(&self, name: &str) -> f64 {
        self.piece_weights_g
            .get(name)
            .copied()
            .unwrap_or(self.default_piece_weight_g)
    }

    /// 是否按捆售卖
    pub fn is_bundle_ingredient(&self, name: &str) -> bool {
        self.bundle_ingredients.iter().any(|b| b == name)
    }

    /// 校验参数一致性
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.repetition_ceiling < 1 {
            return Err(SettingsError::RepetitionCeilingInvalid(
                self.repetition_ceiling,
            ));
        }

        let weight_sum = self.weights.sum();
        if (weight_sum - 1.0).abs() > 1e-9 {
            return Err(SettingsError::WeightSumInvalid(weight_sum));
        }

        let moment_sum: f64 = MealMoment::ALL
            .iter()
            .map(|m| self.moment_share(*m))
            .sum();
        if (moment_sum - 1.0).abs() > 1e-9 {
            return Err(SettingsError::MomentShareSumInvalid(moment_sum));
        }

        for moment in MealMoment::ALL {
            let sum: f64 = self
                .components_for(moment)
                .iter()
                .map(|(_, share)| share)
                .sum();
            if (sum - 1.0).abs() > 1e-9 {
                return Err(SettingsError::ComponentShareSumInvalid { moment, sum });
            }
        }

        Ok(())
    }
}

/// 校验请求预算是否在允许区间内
pub fn budget_in_range(budget: f64) -> bool {
    (BUDGET_MIN..=BUDGET_MAX).contains(&budget)
}
