// ==========================================
// 双人周菜单规划系统 - 周菜单结构
// ==========================================
// 职责: 定义周菜单聚合 (7天 × 3时段 × 组件槽位)
// 红线: 槽位允许为空,空槽位不是错误
// ==========================================

use crate::domain::dish::Dish;
use crate::domain::types::{MealMoment, MenuComponent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 一周七天的展示名称 (周一起始)
pub const DAY_NAMES: [&str; 7] = [
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
    "Domingo",
];

/// 周末起始的天索引 (Sábado)
pub const WEEKEND_START_INDEX: usize = 5;

// ==========================================
// MealSlot - 单个时段的组件分配
// ==========================================
// 键缺失表示该组件未找到合格菜品
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealSlot {
    /// 组件槽位 → 选中的菜品
    pub components: BTreeMap<MenuComponent, Dish>,
}

impl MealSlot {
    /// 槽位是否完全为空
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// 选中菜品的两人份总价
    pub fn total_price_for_two(&self) -> f64 {
        self.components.values().map(Dish::price_for_two).sum()
    }
}

// ==========================================
// DayMenu - 单日菜单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayMenu {
    /// 天索引 (0 = Lunes)
    pub day_index: usize,

    /// 展示名称
    pub day_name: String,

    /// 时段 → 组件分配
    pub meals: BTreeMap<MealMoment, MealSlot>,
}

impl DayMenu {
    /// 创建空的单日菜单
    pub fn new(day_index: usize) -> Self {
        Self {
            day_index,
            day_name: DAY_NAMES[day_index % 7].to_string(),
            meals: BTreeMap::new(),
        }
    }

    /// 该天是否为周末 (Sábado / Domingo)
    pub fn is_weekend(&self) -> bool {
        self.day_index >= WEEKEND_START_INDEX
    }
}

// ==========================================
// WeeklyMenu - 周菜单聚合
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyMenu {
    /// 七天菜单 (按天索引有序)
    pub days: Vec<DayMenu>,
}

impl WeeklyMenu {
    /// 创建七天全空的周菜单
    pub fn empty() -> Self {
        Self {
            days: (0..7).map(DayMenu::new).collect(),
        }
    }

    /// 遍历所有已分配的菜品
    pub fn iter_assignments(
        &self,
    ) -> impl Iterator<Item = (usize, MealMoment, MenuComponent, &Dish)> {
        self.days.iter().flat_map(|day| {
            day.meals.iter().flat_map(move |(moment, slot)| {
                slot.components
                    .iter()
                    .map(move |(component, dish)| (day.day_index, *moment, *component, dish))
            })
        })
    }

    /// 已分配菜品总数
    pub fn assigned_count(&self) -> usize {
        self.iter_assignments().count()
    }
}
