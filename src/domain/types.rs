// ==========================================
// 双人周菜单规划系统 - 领域类型定义
// ==========================================
// 职责: 菜单领域的枚举类型与目录字符串映射
// 红线: 目录字符串在加载时解析一次,读取侧不做动态判断
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 用餐时段 (Meal Moment)
// ==========================================
// 一日三餐: 早餐 / 午餐 / 晚餐
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealMoment {
    Breakfast, // 早餐
    Lunch,     // 午餐
    Dinner,    // 晚餐
}

impl MealMoment {
    /// 一天内的固定顺序
    pub const ALL: [MealMoment; 3] =
        [MealMoment::Breakfast, MealMoment::Lunch, MealMoment::Dinner];

    /// 从目录字符串解析时段
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "desayuno" => Some(MealMoment::Breakfast),
            "almuerzo" => Some(MealMoment::Lunch),
            "cena" => Some(MealMoment::Dinner),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            MealMoment::Breakfast => "desayuno",
            MealMoment::Lunch => "almuerzo",
            MealMoment::Dinner => "cena",
        }
    }
}

impl fmt::Display for MealMoment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 结构角色 (Component Role)
// ==========================================
// 菜品在一餐中的结构定位 (目录字段 componente)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentRole {
    Beverage,   // 饮品
    Appetizer,  // 前菜
    MainCourse, // 主菜
    Sandwich,   // 三明治类主食
}

impl ComponentRole {
    /// 从目录字符串解析结构角色
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bebida" => Some(ComponentRole::Beverage),
            "entrada" => Some(ComponentRole::Appetizer),
            "fondo" => Some(ComponentRole::MainCourse),
            "sandwich" => Some(ComponentRole::Sandwich),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ComponentRole::Beverage => "bebida",
            ComponentRole::Appetizer => "entrada",
            ComponentRole::MainCourse => "fondo",
            ComponentRole::Sandwich => "sandwich",
        }
    }
}

impl fmt::Display for ComponentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 餐位组件 (Menu Component)
// ==========================================
// 组装器请求的组件槽位。Principal 是请求角色,
// 接受 Sandwich 或 MainCourse 两种结构角色的菜品。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MenuComponent {
    Beverage,   // 饮品
    Appetizer,  // 前菜
    MainCourse, // 主菜
    Principal,  // 早餐主食 (三明治类或主菜)
}

impl MenuComponent {
    /// 判断一个结构角色是否满足该组件槽位
    pub fn accepts(&self, role: ComponentRole) -> bool {
        match self {
            MenuComponent::Beverage => role == ComponentRole::Beverage,
            MenuComponent::Appetizer => role == ComponentRole::Appetizer,
            MenuComponent::MainCourse => role == ComponentRole::MainCourse,
            MenuComponent::Principal => {
                matches!(role, ComponentRole::Sandwich | ComponentRole::MainCourse)
            }
        }
    }

    /// 输出键 (与保存的菜单 JSON 对齐)
    pub fn to_db_str(&self) -> &'static str {
        match self {
            MenuComponent::Beverage => "bebida",
            MenuComponent::Appetizer => "entrada",
            MenuComponent::MainCourse => "fondo",
            MenuComponent::Principal => "principal",
        }
    }
}

impl fmt::Display for MenuComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 菜系类型 (Cuisine Type)
// ==========================================
// 目录字段 tipo; 未知值在加载时拒绝该行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CuisineType {
    Criolla,   // 克里奥尔菜
    China,     // 中餐
    Marina,    // 海鲜
    Selvatica, // 雨林菜
    Andina,    // 安第斯菜
    Nikkei,    // 日秘融合
    Italiana,  // 意大利菜
    Nortena,   // 北部菜
}

impl CuisineType {
    /// 从目录字符串解析菜系
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "criolla" => Some(CuisineType::Criolla),
            "china" => Some(CuisineType::China),
            "marina" => Some(CuisineType::Marina),
            "selvatica" => Some(CuisineType::Selvatica),
            "andina" => Some(CuisineType::Andina),
            "nikkei" => Some(CuisineType::Nikkei),
            "italiana" => Some(CuisineType::Italiana),
            "nortena" => Some(CuisineType::Nortena),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            CuisineType::Criolla => "criolla",
            CuisineType::China => "china",
            CuisineType::Marina => "marina",
            CuisineType::Selvatica => "selvatica",
            CuisineType::Andina => "andina",
            CuisineType::Nikkei => "nikkei",
            CuisineType::Italiana => "italiana",
            CuisineType::Nortena => "nortena",
        }
    }
}

impl fmt::Display for CuisineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 饮食类别 (Diet Category)
// ==========================================
// 目录字段 categoria; 未知值在加载时拒绝该行
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietCategory {
    Normal,      // 常规
    Vegetariana, // 素食
    Vegana,      // 纯素
    Light,       // 轻食
}

impl DietCategory {
    /// 从目录字符串解析饮食类别
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(DietCategory::Normal),
            "vegetariana" => Some(DietCategory::Vegetariana),
            "vegana" => Some(DietCategory::Vegana),
            "light" => Some(DietCategory::Light),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            DietCategory::Normal => "normal",
            DietCategory::Vegetariana => "vegetariana",
            DietCategory::Vegana => "vegana",
            DietCategory::Light => "light",
        }
    }
}

impl fmt::Display for DietCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 食材类别 (Ingredient Category)
// ==========================================
// 购物清单的固定展示顺序即 DISPLAY_ORDER 的顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngredientCategory {
    Protein,   // 蛋白质
    Dairy,     // 乳制品
    Tuber,     // 薯类
    Grain,     // 谷物
    Vegetable, // 蔬菜
    Fruit,     // 水果
    Legume,    // 豆类
    Condiment, // 调味料
    Beverage,  // 饮品
    Other,     // 其他
}

impl IngredientCategory {
    /// 固定展示顺序 (购物清单分组输出)
    pub const DISPLAY_ORDER: [IngredientCategory; 10] = [
        IngredientCategory::Protein,
        IngredientCategory::Dairy,
        IngredientCategory::Tuber,
        IngredientCategory::Grain,
        IngredientCategory::Vegetable,
        IngredientCategory::Fruit,
        IngredientCategory::Legume,
        IngredientCategory::Condiment,
        IngredientCategory::Beverage,
        IngredientCategory::Other,
    ];

    /// 从目录字符串解析食材类别 (未知值归入 Other)
    pub fn from_db_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "proteina" => IngredientCategory::Protein,
            "lacteo" => IngredientCategory::Dairy,
            "tuberculo" => IngredientCategory::Tuber,
            "grano" => IngredientCategory::Grain,
            "verdura" => IngredientCategory::Vegetable,
            "fruta" => IngredientCategory::Fruit,
            "menestra" => IngredientCategory::Legume,
            "condimento" => IngredientCategory::Condiment,
            "bebida" => IngredientCategory::Beverage,
            _ => IngredientCategory::Other,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            IngredientCategory::Protein => "proteina",
            IngredientCategory::Dairy => "lacteo",
            IngredientCategory::Tuber => "tuberculo",
            IngredientCategory::Grain => "grano",
            IngredientCategory::Vegetable => "verdura",
            IngredientCategory::Fruit => "fruta",
            IngredientCategory::Legume => "menestra",
            IngredientCategory::Condiment => "condimento",
            IngredientCategory::Beverage => "bebida",
            IngredientCategory::Other => "otros",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// 计量单位 (Unit)
// ==========================================
// 菜品配料用小单位 (g/ml/unidad), 食材售卖用市场单位
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Unit {
    Gram,       // 克
    Milliliter, // 毫升
    Kilogram,   // 千克
    Liter,      // 升
    Piece,      // 个
    Bundle,     // 捆
    Bag,        // 袋
}

impl Unit {
    /// 从目录字符串解析单位 (未知值视为数据质量问题)
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "g" | "gr" | "gramo" => Some(Unit::Gram),
            "ml" | "mililitro" => Some(Unit::Milliliter),
            "kg" | "kilo" => Some(Unit::Kilogram),
            "litro" | "l" => Some(Unit::Liter),
            "unidad" => Some(Unit::Piece),
            "atado" => Some(Unit::Bundle),
            "bolsa" => Some(Unit::Bag),
            _ => None,
        }
    }

    /// 转换为数据库存储的字符串
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Unit::Gram => "g",
            Unit::Milliliter => "ml",
            Unit::Kilogram => "kg",
            Unit::Liter => "litro",
            Unit::Piece => "unidad",
            Unit::Bundle => "atado",
            Unit::Bag => "bolsa",
        }
    }

    /// 袋装/捆装类售卖单位 (固定售价,购买数量记 1)
    pub fn is_lot_like(&self) -> bool {
        matches!(self, Unit::Bundle | Unit::Bag)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}
