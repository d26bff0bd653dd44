// ==========================================
// 双人周菜单规划系统 - 菜单持久化仓储
// ==========================================
// 职责: menus_generados 表的写入与历史查询
// 红线: 存储的是序列化后的 JSON,结构对仓储不透明
// ==========================================

use crate::db::open_sqlite_connection;
use crate::repository::error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// 历史查询的默认条数上限
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

// ==========================================
// MenuRecord - 持久化记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuRecord {
    /// 用户ID
    pub user_id: Uuid,

    /// 生成时间
    pub generated_at: DateTime<Utc>,

    /// 请求预算
    pub budget: f64,

    /// 周菜单 JSON
    pub menu_json: String,

    /// 购物清单 JSON
    pub shopping_list_json: String,
}

// ==========================================
// MenuStore Trait
// ==========================================
// 用途: 生成流程结束时的单次持久化写入 + 历史读取
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// 保存一条生成记录
    async fn save_menu(&self, record: &MenuRecord) -> RepositoryResult<()>;

    /// 按用户查询最近的生成记录 (新的在前)
    async fn list_menus(&self, user_id: Uuid, limit: usize) -> RepositoryResult<Vec<MenuRecord>>;
}

// ==========================================
// SqliteMenuRepository - SQLite 菜单仓储
// ==========================================
pub struct SqliteMenuRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteMenuRepository {
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
}

#[async_trait]
impl MenuStore for SqliteMenuRepository {
    async fn save_menu(&self, record: &MenuRecord) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO menus_generados
             (user_id, fecha_generacion, presupuesto, menu_json, lista_compras)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.user_id.to_string(),
                record.generated_at.to_rfc3339(),
                record.budget,
                record.menu_json,
                record.shopping_list_json,
            ],
        )?;
        Ok(())
    }

    async fn list_menus(&self, user_id: Uuid, limit: usize) -> RepositoryResult<Vec<MenuRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT user_id, fecha_generacion, presupuesto, menu_json, lista_compras
             FROM menus_generados
             WHERE user_id = ?1
             ORDER BY fecha_generacion DESC
             LIMIT ?2",
        )?;

        let rows = stmt.query_map(params![user_id.to_string(), limit as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, f64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (user_id_raw, generated_at_raw, budget, menu_json, shopping_list_json) = row?;
            let user_id = Uuid::parse_str(&user_id_raw)
                .map_err(|e| RepositoryError::ValidationError(format!("user_id 非法: {}", e)))?;
            let generated_at = DateTime::parse_from_rfc3339(&generated_at_raw)
                .map_err(|e| {
                    RepositoryError::ValidationError(format!("fecha_generacion 非法: {}", e))
                })?
                .with_timezone(&Utc);

            records.push(MenuRecord {
                user_id,
                generated_at,
                budget,
                menu_json,
                shopping_list_json,
            });
        }

        Ok(records)
    }
}
