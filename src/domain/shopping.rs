// ==========================================
// 双人周菜单规划系统 - 购物清单结构
// ==========================================
// 职责: 定义购物清单条目与聚合结果
// 红线: 金额仅在产出点保留两位小数
// ==========================================

use crate::domain::types::{IngredientCategory, Unit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// ShoppingListItem - 购物清单条目
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// 食材名称
    pub ingredient: String,

    /// 购买数量 (已换算为市场售卖单位)
    pub purchase_quantity: f64,

    /// 购买单位
    pub purchase_unit: Unit,

    /// 计价单价
    pub unit_price: f64,

    /// 小计 (两位小数)
    pub subtotal: f64,

    /// 食材类别
    pub category: IngredientCategory,
}

// ==========================================
// ShoppingList - 聚合结果
// ==========================================
// items 已按固定类别顺序展开,类别内按食材名称排序
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingList {
    /// 展平后的条目 (固定类别顺序)
    pub items: Vec<ShoppingListItem>,

    /// 按类别分组的条目 (仅含出现过的类别)
    pub by_category: BTreeMap<IngredientCategory, Vec<ShoppingListItem>>,

    /// 总计 (两位小数)
    pub total: f64,
}

impl ShoppingList {
    /// 空清单
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            by_category: BTreeMap::new(),
            total: 0.0,
        }
    }
}

/// 金额与数量的两位小数舍入 (仅用于产出点)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(2.346), 2.35);
        assert_eq!(round2(10.0), 10.0);
    }
}
