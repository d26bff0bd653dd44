// ==========================================
// 双人周菜单规划系统 - 菜品主数据
// ==========================================
// 职责: 定义菜品实体与配料引用
// 红线: 加载后不可变,字段在目录加载时完成校验
// ==========================================

use crate::domain::types::{ComponentRole, CuisineType, DietCategory, MealMoment, Unit};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// IngredientSpec - 菜品配料引用
// ==========================================
// 对应目录 ingredientes JSON 数组中的一项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientSpec {
    /// 食材名称 (ingredientes 表的主键)
    #[serde(rename = "ingrediente")]
    pub name: String,

    /// 单人份用量
    #[serde(rename = "cantidad")]
    pub quantity: f64,

    /// 用量单位
    #[serde(rename = "unidad")]
    pub unit: Unit,
}

// ==========================================
// Dish - 菜品主数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    /// 菜品ID
    pub id: String,

    /// 菜品名称
    pub name: String,

    /// 菜系类型
    pub cuisine: CuisineType,

    /// 饮食类别
    pub category: DietCategory,

    /// 结构角色 (饮品/前菜/主菜/三明治类)
    pub role: ComponentRole,

    /// 卡路里 (单人份)
    pub calories: i32,

    /// 单人份价格 (货币单位)
    pub price: f64,

    /// 适用的用餐时段
    pub moments: HashSet<MealMoment>,

    /// 配料清单
    pub ingredients: Vec<IngredientSpec>,

    /// 备餐说明
    pub preparation: String,
}

impl Dish {
    /// 两人份价格
    pub fn price_for_two(&self) -> f64 {
        self.price * 2.0
    }

    /// 菜品是否适用于指定时段
    pub fn available_at(&self, moment: MealMoment) -> bool {
        self.moments.contains(&moment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dish() -> Dish {
        Dish {
            id: "D001".to_string(),
            name: "Lomo saltado".to_string(),
            cuisine: CuisineType::Criolla,
            category: DietCategory::Normal,
            role: ComponentRole::MainCourse,
            calories: 350,
            price: 6.5,
            moments: [MealMoment::Lunch, MealMoment::Dinner].into_iter().collect(),
            ingredients: vec![IngredientSpec {
                name: "carne de res".to_string(),
                quantity: 150.0,
                unit: Unit::Gram,
            }],
            preparation: "Saltear la carne con cebolla y tomate".to_string(),
        }
    }

    #[test]
    fn test_price_for_two() {
        let dish = sample_dish();
        assert!((dish.price_for_two() - 13.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_available_at() {
        let dish = sample_dish();
        assert!(dish.available_at(MealMoment::Lunch));
        assert!(!dish.available_at(MealMoment::Breakfast));
    }
}
