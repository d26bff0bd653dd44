// ==========================================
// 双人周菜单规划系统 - 购物清单聚合引擎
// ==========================================
// 职责: 把周菜单折算成按市场单位计的分类购物清单
// 输入: WeeklyMenu + 食材主数据目录
// 输出: ShoppingList (条目 + 分类分组 + 总计)
// 红线: 单个菜品的坏配料只跳过该条,不中止整体聚合;
//       缺失食材主数据用兜底记录,不报错
// ==========================================

use crate::config::PlannerSettings;
use crate::domain::ingredient::Ingredient;
use crate::domain::menu::WeeklyMenu;
use crate::domain::shopping::{round2, ShoppingList, ShoppingListItem};
use crate::domain::types::{IngredientCategory, Unit};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, instrument, warn};

// ==========================================
// ShoppingListAggregator - 购物清单聚合引擎
// ==========================================
pub struct ShoppingListAggregator {
    // 无状态引擎,不需要注入依赖
}

impl ShoppingListAggregator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 聚合周菜单的购物清单
    ///
    /// 步骤:
    /// 1) 遍历全部非空槽位,配料用量 ×2 (两人份) 后按食材累计
    /// 2) kg/litro 声明的用量折算进 g/ml 累计器 (×1000)
    /// 3) 按累计量换算市场购买单位与数量
    /// 4) 小计与总计在产出点保留两位小数
    /// 5) 按固定类别顺序分组,组内按食材名称排序
    ///
    /// # 参数
    /// - menu: 周菜单
    /// - catalog: 食材主数据 (名称 → 记录)
    /// - settings: 规划参数 (按个/按捆售卖表)
    #[instrument(skip(self, menu, catalog, settings), fields(
        assigned_count = menu.assigned_count(),
        catalog_count = catalog.len()
    ))]
    pub fn aggregate(
        &self,
        menu: &WeeklyMenu,
        catalog: &HashMap<String, Ingredient>,
        settings: &PlannerSettings,
    ) -> ShoppingList {
        // 累计器用有序映射,保证同输入产出顺序稳定
        let mut totals: BTreeMap<String, (f64, Unit)> = BTreeMap::new();

        for (day_index, moment, component, dish) in menu.iter_assignments() {
            for spec in &dish.ingredients {
                if !spec.quantity.is_finite() || spec.quantity <= 0.0 {
                    warn!(
                        day_index,
                        moment = %moment,
                        component = %component,
                        dish_id = %dish.id,
                        ingredient = %spec.name,
                        quantity = spec.quantity,
                        "配料用量非法,跳过该条"
                    );
                    continue;
                }

                // 两人份用量;kg/litro 折算进小单位累计器
                let (quantity, unit) = match spec.unit {
                    Unit::Kilogram => (spec.quantity * 2.0 * 1000.0, Unit::Gram),
                    Unit::Liter => (spec.quantity * 2.0 * 1000.0, Unit::Milliliter),
                    other => (spec.quantity * 2.0, other),
                };

                match totals.get_mut(&spec.name) {
                    Some((acc_quantity, acc_unit)) => {
                        if *acc_unit != unit {
                            warn!(
                                dish_id = %dish.id,
                                ingredient = %spec.name,
                                expected_unit = %acc_unit,
                                found_unit = %unit,
                                "配料单位与此前累计不一致,跳过该条"
                            );
                            continue;
                        }
                        *acc_quantity += quantity;
                    }
                    None => {
                        totals.insert(spec.name.clone(), (quantity, unit));
                    }
                }
            }
        }

        // 按类别分组定价
        let mut by_category: BTreeMap<IngredientCategory, Vec<ShoppingListItem>> = BTreeMap::new();
        for (name, (quantity, unit)) in &totals {
            let master = match catalog.get(name) {
                Some(record) => record.clone(),
                None => {
                    warn!(ingredient = %name, "食材主数据缺失,使用兜底记录");
                    Ingredient::fallback(name)
                }
            };

            let item = self.price_item(name, *quantity, *unit, &master, settings);
            debug!(
                ingredient = %name,
                purchase_quantity = item.purchase_quantity,
                purchase_unit = %item.purchase_unit,
                subtotal = item.subtotal,
                "清单条目定价完成"
            );
            by_category.entry(item.category).or_default().push(item);
        }

        // 组内按名称排序,按固定类别顺序展平
        let mut items = Vec::new();
        let mut total = 0.0;
        for category in IngredientCategory::DISPLAY_ORDER {
            if let Some(group) = by_category.get_mut(&category) {
                group.sort_by(|a, b| a.ingredient.cmp(&b.ingredient));
                for item in group.iter() {
                    total += item.subtotal;
                    items.push(item.clone());
                }
            }
        }

        let list = ShoppingList {
            items,
            by_category,
            total: round2(total),
        };
        info!(items_count = list.items.len(), total = list.total, "购物清单聚合完成");
        list
    }

    /// 单个食材的定价与市场单位换算
    fn price_item(
        &self,
        name: &str,
        quantity: f64,
        unit: Unit,
        master: &Ingredient,
        settings: &PlannerSettings,
    ) -> ShoppingListItem {
        let (purchase_quantity, purchase_unit) =
            convert_to_market_unit(quantity, unit, name, settings);

        // 袋装/捆装固定售价: 小计即售价,数量记 1
        let (purchase_quantity, purchase_unit, subtotal) = if master.has_lot_price() {
            (1.0, master.sale_unit, master.sale_price)
        } else {
            // 计价用未取整的累计量 (g/ml → 计价单位除以 1000)
            let pricing_quantity = match unit {
                Unit::Gram | Unit::Milliliter => quantity / 1000.0,
                _ => quantity,
            };
            (
                purchase_quantity,
                purchase_unit,
                pricing_quantity * master.unit_price,
            )
        };

        ShoppingListItem {
            ingredient: name.to_string(),
            purchase_quantity: round2(purchase_quantity),
            purchase_unit,
            unit_price: master.unit_price,
            subtotal: round2(subtotal),
            category: master.category,
        }
    }
}

impl Default for ShoppingListAggregator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 市场单位换算
// ==========================================

/// 把累计用量换算成市场实际购买的数量与单位
///
/// 规则按序:
/// 1) 按个售卖且单位已是个 → 四舍五入为整个
/// 2) 按个售卖且单位是 g → floor(用量/平均单重) + 1 个
///    (固定多备一个,即使恰好整除)
/// 3) 按捆售卖 → 一周固定 1 捆
/// 4) g → kg,向最近的 1/4 kg 取整,下限 0.25
/// 5) ml → litro,向最近的 1/2 litro 取整,下限 0.5
/// 6) 其余按原数量原单位透传
pub fn convert_to_market_unit(
    quantity: f64,
    unit: Unit,
    ingredient_name: &str,
    settings: &PlannerSettings,
) -> (f64, Unit) {
    if settings.is_piece_ingredient(ingredient_name) {
        match unit {
            Unit::Piece => return (quantity.round(), Unit::Piece),
            Unit::Gram => {
                let weight = settings.piece_weight_g(ingredient_name);
                let pieces = (quantity / weight).floor() + 1.0;
                return (pieces, Unit::Piece);
            }
            _ => {}
        }
    }

    if settings.is_bundle_ingredient(ingredient_name) {
        return (1.0, Unit::Bundle);
    }

    match unit {
        Unit::Gram => {
            let kg = quantity / 1000.0;
            let rounded = ((kg * 4.0).round() / 4.0).max(0.25);
            (rounded, Unit::Kilogram)
        }
        Unit::Milliliter => {
            let liters = quantity / 1000.0;
            let rounded = ((liters * 2.0).round() / 2.0).max(0.5);
            (rounded, Unit::Liter)
        }
        other => (quantity, other),
    }
}
