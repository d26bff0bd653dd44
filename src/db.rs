// ==========================================
// 双人周菜单规划系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为
// - 统一 busy_timeout,减少并发写入时的偶发 busy 错误
// - 目录/菜单表结构在打开连接时幂等创建
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 目录与菜单存储的表结构
///
/// - platos: 菜品目录 (momento_dia / ingredientes 为 JSON 文本)
/// - ingredientes: 食材主数据
/// - menus_generados: 已生成菜单的持久化记录
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS platos (
    id            TEXT PRIMARY KEY,
    nombre        TEXT NOT NULL,
    tipo          TEXT NOT NULL,
    categoria     TEXT NOT NULL,
    componente    TEXT NOT NULL,
    calorias      INTEGER NOT NULL,
    precio        REAL NOT NULL,
    momento_dia   TEXT NOT NULL,
    ingredientes  TEXT NOT NULL,
    preparacion   TEXT NOT NULL DEFAULT ''
);

CREATE TABLE IF NOT EXISTS ingredientes (
    nombre        TEXT PRIMARY KEY,
    precio        REAL NOT NULL,
    unidad        TEXT NOT NULL,
    venta_por     TEXT NOT NULL,
    precio_venta  REAL NOT NULL,
    categoria     TEXT NOT NULL DEFAULT 'otros'
);

CREATE TABLE IF NOT EXISTS menus_generados (
    user_id           TEXT NOT NULL,
    fecha_generacion  TEXT NOT NULL,
    presupuesto       REAL NOT NULL,
    menu_json         TEXT NOT NULL,
    lista_compras     TEXT NOT NULL,
    PRIMARY KEY (user_id, fecha_generacion)
);
"#;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明:
/// - foreign_keys 需要“每个连接”单独开启
/// - busy_timeout 需要“每个连接”单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 幂等创建表结构
pub fn ensure_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// 打开 SQLite 连接并应用统一配置与表结构
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    ensure_schema(&conn)?;
    Ok(conn)
}
