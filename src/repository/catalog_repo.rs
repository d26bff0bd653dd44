// ==========================================
// 双人周菜单规划系统 - 目录仓储
// ==========================================
// 职责: platos / ingredientes 表的读取与写入
// 红线: 不含业务逻辑;目录字符串在此层完成解析校验,
//       非法行记日志并跳过,不让脏数据进入引擎
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::dish::{Dish, IngredientSpec};
use crate::domain::ingredient::Ingredient;
use crate::domain::types::{
    ComponentRole, CuisineType, DietCategory, IngredientCategory, MealMoment, Unit,
};
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use rusqlite::{params, Connection};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing::warn;

// ==========================================
// CatalogReader Trait
// ==========================================
// 用途: 引擎侧的目录读取接口 (一次生成只读一次)
#[async_trait]
pub trait CatalogReader: Send + Sync {
    /// 读取全部菜品
    async fn load_dishes(&self) -> RepositoryResult<Vec<Dish>>;

    /// 读取全部食材主数据 (名称 → 记录)
    async fn load_ingredients(&self) -> RepositoryResult<HashMap<String, Ingredient>>;
}

// ==========================================
// SqliteCatalogRepository - SQLite 目录仓储
// ==========================================
pub struct SqliteCatalogRepository {
    conn: Arc<Mutex<Connection>>,
}

/// 菜品行里 ingredientes JSON 的原始形态
#[derive(Debug, Deserialize)]
struct RawIngredientSpec {
    ingrediente: String,
    cantidad: f64,
    unidad: String,
}

impl SqliteCatalogRepository {
    /// 创建新的仓储实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// 获取数据库连接
    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// 批量写入菜品 (INSERT OR REPLACE)
    pub fn upsert_dishes(&self, dishes: &[Dish]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseQueryError(e.to_string()))?;

        let mut count = 0;
        for dish in dishes {
            let moments: Vec<&str> = dish.moments.iter().map(MealMoment::to_db_str).collect();
            let raw_specs: Vec<serde_json::Value> = dish
                .ingredients
                .iter()
                .map(|spec| {
                    serde_json::json!({
                        "ingrediente": spec.name,
                        "cantidad": spec.quantity,
                        "unidad": spec.unit.to_db_str(),
                    })
                })
                .collect();

            tx.execute(
                "INSERT OR REPLACE INTO platos
                 (id, nombre, tipo, categoria, componente, calorias, precio, momento_dia, ingredientes, preparacion)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    dish.id,
                    dish.name,
                    dish.cuisine.to_db_str(),
                    dish.category.to_db_str(),
                    dish.role.to_db_str(),
                    dish.calories,
                    dish.price,
                    serde_json::to_string(&moments)?,
                    serde_json::to_string(&raw_specs)?,
                    dish.preparation,
                ],
            )?;
            count += 1;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseQueryError(e.to_string()))?;
        Ok(count)
    }

    /// 批量写入食材主数据 (INSERT OR REPLACE)
    pub fn upsert_ingredients(&self, ingredients: &[Ingredient]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseQueryError(e.to_string()))?;

        let mut count = 0;
        for ingredient in ingredients {
            tx.execute(
                "INSERT OR REPLACE INTO ingredientes
                 (nombre, precio, unidad, venta_por, precio_venta, categoria)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    ingredient.name,
                    ingredient.unit_price,
                    ingredient.base_unit.to_db_str(),
                    ingredient.sale_unit.to_db_str(),
                    ingredient.sale_price,
                    ingredient.category.to_db_str(),
                ],
            )?;
            count += 1;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseQueryError(e.to_string()))?;
        Ok(count)
    }

    /// 解析单行菜品;枚举字段非法时返回 None (调用方记日志跳过)
    fn parse_dish_row(
        id: String,
        name: String,
        cuisine_raw: String,
        category_raw: String,
        role_raw: String,
        calories: i32,
        price: f64,
        moments_json: String,
        ingredients_json: String,
        preparation: String,
    ) -> Option<Dish> {
        let cuisine = CuisineType::from_db_str(&cuisine_raw)?;
        let category = DietCategory::from_db_str(&category_raw)?;
        let role = ComponentRole::from_db_str(&role_raw)?;

        let moment_strings: Vec<String> = serde_json::from_str(&moments_json).ok()?;
        let mut moments = HashSet::new();
        for raw in &moment_strings {
            moments.insert(MealMoment::from_db_str(raw)?);
        }

        // 配料逐条解析: 坏单位只丢弃该条,不拖垮整道菜
        let raw_specs: Vec<RawIngredientSpec> = serde_json::from_str(&ingredients_json).ok()?;
        let mut ingredients = Vec::with_capacity(raw_specs.len());
        for raw in raw_specs {
            match Unit::from_db_str(&raw.unidad) {
                Some(unit) => ingredients.push(IngredientSpec {
                    name: raw.ingrediente,
                    quantity: raw.cantidad,
                    unit,
                }),
                None => {
                    warn!(
                        dish_id = %id,
                        ingredient = %raw.ingrediente,
                        unit = %raw.unidad,
                        "配料单位无法解析,丢弃该条配料"
                    );
                }
            }
        }

        Some(Dish {
            id,
            name,
            cuisine,
            category,
            role,
            calories,
            price,
            moments,
            ingredients,
            preparation,
        })
    }
}

#[async_trait]
impl CatalogReader for SqliteCatalogRepository {
    async fn load_dishes(&self) -> RepositoryResult<Vec<Dish>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, nombre, tipo, categoria, componente, calorias, precio,
                    momento_dia, ingredientes, preparacion
             FROM platos ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, i32>(5)?,
                row.get::<_, f64>(6)?,
                row.get::<_, String>(7)?,
                row.get::<_, String>(8)?,
                row.get::<_, String>(9)?,
            ))
        })?;

        let mut dishes = Vec::new();
        for row in rows {
            let (id, name, cuisine, category, role, calories, price, moments, ingredients, prep) =
                row?;
            let dish_id = id.clone();
            match Self::parse_dish_row(
                id, name, cuisine, category, role, calories, price, moments, ingredients, prep,
            ) {
                Some(dish) => dishes.push(dish),
                None => {
                    warn!(dish_id = %dish_id, "菜品行字段非法,跳过该行");
                }
            }
        }

        Ok(dishes)
    }

    async fn load_ingredients(&self) -> RepositoryResult<HashMap<String, Ingredient>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT nombre, precio, unidad, venta_por, precio_venta, categoria FROM ingredientes",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, f64>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, f64>(4)?,
                row.get::<_, String>(5)?,
            ))
        })?;

        let mut ingredients = HashMap::new();
        for row in rows {
            let (name, unit_price, base_unit_raw, sale_unit_raw, sale_price, category_raw) = row?;

            let base_unit = match Unit::from_db_str(&base_unit_raw) {
                Some(unit) => unit,
                None => {
                    warn!(ingredient = %name, unit = %base_unit_raw, "计价单位无法解析,跳过该行");
                    continue;
                }
            };
            let sale_unit = match Unit::from_db_str(&sale_unit_raw) {
                Some(unit) => unit,
                None => {
                    warn!(ingredient = %name, unit = %sale_unit_raw, "售卖单位无法解析,跳过该行");
                    continue;
                }
            };

            ingredients.insert(
                name.clone(),
                Ingredient {
                    name,
                    unit_price,
                    base_unit,
                    sale_unit,
                    sale_price,
                    category: IngredientCategory::from_db_str(&category_raw),
                },
            );
        }

        Ok(ingredients)
    }
}
