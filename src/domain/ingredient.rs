// ==========================================
// 双人周菜单规划系统 - 食材主数据
// ==========================================
// 职责: 定义食材实体 (ingredientes 表的一行)
// 红线: 加载后不可变
// ==========================================

use crate::domain::types::{IngredientCategory, Unit};
use serde::{Deserialize, Serialize};

// ==========================================
// Ingredient - 食材主数据
// ==========================================
// base_unit 是计价单位 (如每 kg 的价格);
// sale_unit 是市场实际售卖单位 (可能是袋/捆等固定售价单位)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    /// 食材名称 (主键)
    pub name: String,

    /// 计价单价 (按 base_unit 计)
    pub unit_price: f64,

    /// 计价单位
    pub base_unit: Unit,

    /// 售卖单位
    pub sale_unit: Unit,

    /// 售卖单位价格 (袋装/捆装时为固定售价)
    pub sale_price: f64,

    /// 食材类别
    pub category: IngredientCategory,
}

impl Ingredient {
    /// 是否按固定售价的袋装/捆装售卖
    pub fn has_lot_price(&self) -> bool {
        self.sale_unit.is_lot_like()
    }

    /// 缺失主数据时的兜底记录 (单价 5.0, 类别 Other)
    pub fn fallback(name: &str) -> Self {
        Self {
            name: name.to_string(),
            unit_price: 5.0,
            base_unit: Unit::Kilogram,
            sale_unit: Unit::Kilogram,
            sale_price: 5.0,
            category: IngredientCategory::Other,
        }
    }
}
