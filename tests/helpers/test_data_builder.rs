// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use menu_planner::domain::dish::{Dish, IngredientSpec};
use menu_planner::domain::ingredient::Ingredient;
use menu_planner::domain::types::{
    ComponentRole, CuisineType, DietCategory, IngredientCategory, MealMoment, Unit,
};
use std::collections::HashSet;

// ==========================================
// Dish 构建器
// ==========================================

pub struct DishBuilder {
    id: String,
    name: String,
    cuisine: CuisineType,
    category: DietCategory,
    role: ComponentRole,
    calories: i32,
    price: f64,
    moments: HashSet<MealMoment>,
    ingredients: Vec<IngredientSpec>,
    preparation: String,
}

impl DishBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: format!("plato {}", id),
            cuisine: CuisineType::Criolla,
            category: DietCategory::Normal,
            role: ComponentRole::MainCourse,
            calories: 300,
            price: 3.0,
            moments: [MealMoment::Lunch, MealMoment::Dinner].into_iter().collect(),
            ingredients: Vec::new(),
            preparation: String::new(),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn cuisine(mut self, cuisine: CuisineType) -> Self {
        self.cuisine = cuisine;
        self
    }

    pub fn category(mut self, category: DietCategory) -> Self {
        self.category = category;
        self
    }

    pub fn role(mut self, role: ComponentRole) -> Self {
        self.role = role;
        self
    }

    pub fn calories(mut self, calories: i32) -> Self {
        self.calories = calories;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn moments(mut self, moments: &[MealMoment]) -> Self {
        self.moments = moments.iter().copied().collect();
        self
    }

    pub fn ingredient(mut self, name: &str, quantity: f64, unit: Unit) -> Self {
        self.ingredients.push(IngredientSpec {
            name: name.to_string(),
            quantity,
            unit,
        });
        self
    }

    pub fn preparation(mut self, preparation: &str) -> Self {
        self.preparation = preparation.to_string();
        self
    }

    pub fn build(self) -> Dish {
        Dish {
            id: self.id,
            name: self.name,
            cuisine: self.cuisine,
            category: self.category,
            role: self.role,
            calories: self.calories,
            price: self.price,
            moments: self.moments,
            ingredients: self.ingredients,
            preparation: self.preparation,
        }
    }
}

// ==========================================
// Ingredient 构建器
// ==========================================

pub struct IngredientBuilder {
    name: String,
    unit_price: f64,
    base_unit: Unit,
    sale_unit: Unit,
    sale_price: f64,
    category: IngredientCategory,
}

impl IngredientBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            unit_price: 5.0,
            base_unit: Unit::Kilogram,
            sale_unit: Unit::Kilogram,
            sale_price: 5.0,
            category: IngredientCategory::Other,
        }
    }

    pub fn unit_price(mut self, price: f64) -> Self {
        self.unit_price = price;
        self.sale_price = price;
        self
    }

    pub fn base_unit(mut self, unit: Unit) -> Self {
        self.base_unit = unit;
        self
    }

    pub fn sale(mut self, unit: Unit, price: f64) -> Self {
        self.sale_unit = unit;
        self.sale_price = price;
        self
    }

    pub fn category(mut self, category: IngredientCategory) -> Self {
        self.category = category;
        self
    }

    pub fn build(self) -> Ingredient {
        Ingredient {
            name: self.name,
            unit_price: self.unit_price,
            base_unit: self.base_unit,
            sale_unit: self.sale_unit,
            sale_price: self.sale_price,
            category: self.category,
        }
    }
}

// ==========================================
// 标准测试目录
// ==========================================

/// 覆盖三个时段全部组件的小型菜品目录
///
/// 价位按预算 210 (日预算 30) 设计:
/// - 晚餐饮品预算 1.125 → 饮品 0.5/人 可用
/// - 早餐主食预算 5.25 → 三明治 2.0~2.5/人 可用
/// - 午餐主菜预算 8.25 → 主菜 1.8~3.5/人 可用
pub fn standard_dishes() -> Vec<Dish> {
    vec![
        // ===== 饮品 =====
        DishBuilder::new("BEB01")
            .name("Emoliente")
            .role(ComponentRole::Beverage)
            .cuisine(CuisineType::Andina)
            .price(0.5)
            .calories(80)
            .moments(&MealMoment::ALL)
            .ingredient("cebada", 20.0, Unit::Gram)
            .build(),
        DishBuilder::new("BEB02")
            .name("Chicha morada")
            .role(ComponentRole::Beverage)
            .cuisine(CuisineType::Criolla)
            .price(0.5)
            .calories(120)
            .moments(&MealMoment::ALL)
            .ingredient("maíz morado", 50.0, Unit::Gram)
            .ingredient("limón", 30.0, Unit::Gram)
            .build(),
        DishBuilder::new("BEB03")
            .name("Café con leche")
            .role(ComponentRole::Beverage)
            .cuisine(CuisineType::Criolla)
            .price(0.9)
            .calories(150)
            .moments(&[MealMoment::Breakfast])
            .ingredient("café", 10.0, Unit::Gram)
            .ingredient("leche", 150.0, Unit::Milliliter)
            .build(),
        // ===== 早餐主食 =====
        DishBuilder::new("SAN01")
            .name("Pan con huevo")
            .role(ComponentRole::Sandwich)
            .cuisine(CuisineType::Criolla)
            .price(2.0)
            .calories(320)
            .moments(&[MealMoment::Breakfast])
            .ingredient("pan francés", 2.0, Unit::Piece)
            .ingredient("huevo", 2.0, Unit::Piece)
            .build(),
        DishBuilder::new("SAN02")
            .name("Pan con palta")
            .role(ComponentRole::Sandwich)
            .cuisine(CuisineType::Criolla)
            .category(DietCategory::Vegetariana)
            .price(2.5)
            .calories(280)
            .moments(&[MealMoment::Breakfast])
            .ingredient("pan francés", 2.0, Unit::Piece)
            .ingredient("palta", 100.0, Unit::Gram)
            .build(),
        // ===== 前菜 =====
        DishBuilder::new("ENT01")
            .name("Ensalada de verduras")
            .role(ComponentRole::Appetizer)
            .cuisine(CuisineType::Criolla)
            .category(DietCategory::Light)
            .price(1.0)
            .calories(180)
            .moments(&[MealMoment::Lunch, MealMoment::Dinner])
            .ingredient("lechuga", 100.0, Unit::Gram)
            .ingredient("tomate", 80.0, Unit::Gram)
            .build(),
        DishBuilder::new("ENT02")
            .name("Sopa de verduras")
            .role(ComponentRole::Appetizer)
            .cuisine(CuisineType::Andina)
            .price(1.5)
            .calories(220)
            .moments(&[MealMoment::Lunch, MealMoment::Dinner])
            .ingredient("papa", 120.0, Unit::Gram)
            .ingredient("apio", 30.0, Unit::Gram)
            .build(),
        // ===== 主菜 =====
        DishBuilder::new("FON01")
            .name("Arroz con pollo")
            .role(ComponentRole::MainCourse)
            .cuisine(CuisineType::Criolla)
            .price(3.2)
            .calories(450)
            .moments(&[MealMoment::Lunch])
            .ingredient("arroz", 100.0, Unit::Gram)
            .ingredient("pollo", 150.0, Unit::Gram)
            .ingredient("culantro", 10.0, Unit::Gram)
            .build(),
        DishBuilder::new("FON02")
            .name("Pescado sudado")
            .role(ComponentRole::MainCourse)
            .cuisine(CuisineType::Marina)
            .price(3.5)
            .calories(380)
            .moments(&[MealMoment::Lunch])
            .ingredient("pescado", 200.0, Unit::Gram)
            .ingredient("limón", 60.0, Unit::Gram)
            .build(),
        DishBuilder::new("FON03")
            .name("Tallarín saltado")
            .role(ComponentRole::MainCourse)
            .cuisine(CuisineType::China)
            .price(2.0)
            .calories(420)
            .moments(&[MealMoment::Lunch, MealMoment::Dinner])
            .ingredient("tallarín", 120.0, Unit::Gram)
            .ingredient("pollo", 100.0, Unit::Gram)
            .build(),
        DishBuilder::new("FON04")
            .name("Locro de zapallo")
            .role(ComponentRole::MainCourse)
            .cuisine(CuisineType::Andina)
            .category(DietCategory::Vegetariana)
            .price(1.8)
            .calories(350)
            .moments(&[MealMoment::Lunch, MealMoment::Dinner])
            .ingredient("zapallo", 200.0, Unit::Gram)
            .ingredient("papa", 100.0, Unit::Gram)
            .build(),
    ]
}

/// 与 standard_dishes 对应的食材主数据
pub fn standard_ingredients() -> Vec<Ingredient> {
    vec![
        IngredientBuilder::new("pollo")
            .unit_price(9.0)
            .category(IngredientCategory::Protein)
            .build(),
        IngredientBuilder::new("pescado")
            .unit_price(12.0)
            .category(IngredientCategory::Protein)
            .build(),
        IngredientBuilder::new("huevo")
            .unit_price(0.5)
            .base_unit(Unit::Piece)
            .sale(Unit::Piece, 0.5)
            .category(IngredientCategory::Protein)
            .build(),
        IngredientBuilder::new("leche")
            .unit_price(4.5)
            .base_unit(Unit::Liter)
            .sale(Unit::Liter, 4.5)
            .category(IngredientCategory::Dairy)
            .build(),
        IngredientBuilder::new("papa")
            .unit_price(2.5)
            .category(IngredientCategory::Tuber)
            .build(),
        IngredientBuilder::new("arroz")
            .unit_price(4.0)
            .category(IngredientCategory::Grain)
            .build(),
        IngredientBuilder::new("tallarín")
            .unit_price(5.0)
            .category(IngredientCategory::Grain)
            .build(),
        IngredientBuilder::new("pan francés")
            .unit_price(0.4)
            .base_unit(Unit::Piece)
            .sale(Unit::Piece, 0.4)
            .category(IngredientCategory::Grain)
            .build(),
        IngredientBuilder::new("lechuga")
            .unit_price(3.0)
            .category(IngredientCategory::Vegetable)
            .build(),
        IngredientBuilder::new("tomate")
            .unit_price(3.5)
            .category(IngredientCategory::Vegetable)
            .build(),
        IngredientBuilder::new("zapallo")
            .unit_price(2.8)
            .category(IngredientCategory::Vegetable)
            .build(),
        IngredientBuilder::new("apio")
            .unit_price(4.0)
            .sale(Unit::Bundle, 1.0)
            .category(IngredientCategory::Vegetable)
            .build(),
        IngredientBuilder::new("culantro")
            .unit_price(8.0)
            .sale(Unit::Bundle, 1.0)
            .category(IngredientCategory::Condiment)
            .build(),
        IngredientBuilder::new("limón")
            .unit_price(6.0)
            .category(IngredientCategory::Fruit)
            .build(),
        IngredientBuilder::new("palta")
            .unit_price(8.0)
            .category(IngredientCategory::Fruit)
            .build(),
        IngredientBuilder::new("maíz morado")
            .unit_price(6.5)
            .category(IngredientCategory::Grain)
            .build(),
        IngredientBuilder::new("cebada")
            .unit_price(4.2)
            .category(IngredientCategory::Grain)
            .build(),
        IngredientBuilder::new("café")
            .unit_price(20.0)
            .category(IngredientCategory::Beverage)
            .build(),
    ]
}
