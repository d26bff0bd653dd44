// ==========================================
// 双人周菜单规划系统 - 营养汇总结构
// ==========================================
// 职责: 定义周菜单的卡路里汇总结果
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// NutritionSummary - 营养汇总
// ==========================================
// 所有数值按两人份计,除 per_person_average 外
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    /// 一周总卡路里 (两人份)
    pub weekly_total: f64,

    /// 日均卡路里 (两人份)
    pub daily_average: f64,

    /// 人均日卡路里
    pub per_person_average: f64,

    /// 每天的卡路里小计 (索引 0 = Lunes)
    pub per_day: [f64; 7],

    /// 参与统计的菜品分配数
    pub dish_count: usize,
}
