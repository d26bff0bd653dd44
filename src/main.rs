// ==========================================
// 双人周菜单规划系统 - 主入口
// ==========================================
// 用途: 读取目录数据库,执行一次周菜单生成,
//       输出结果 JSON 到标准输出
// ==========================================

use menu_planner::api::{GenerateMenuRequest, MenuApi};
use menu_planner::engine::PlannerRng;
use menu_planner::repository::{SqliteCatalogRepository, SqliteMenuRepository};
use std::sync::Arc;

/// 默认数据库文件名
const DEFAULT_DB_FILE: &str = "menu_planner.db";

/// 获取默认数据库路径
///
/// 优先级: MENU_PLANNER_DB 环境变量 > 用户数据目录 > 当前目录
fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var("MENU_PLANNER_DB") {
        return path;
    }

    match dirs::data_dir() {
        Some(dir) => dir
            .join("menu-planner")
            .join(DEFAULT_DB_FILE)
            .to_string_lossy()
            .to_string(),
        None => DEFAULT_DB_FILE.to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    menu_planner::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", menu_planner::APP_NAME);
    tracing::info!("系统版本: {}", menu_planner::VERSION);
    tracing::info!("==================================================");

    // 预算取第一个命令行参数,缺省 200
    let budget: f64 = std::env::args()
        .nth(1)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(200.0);

    // 获取数据库路径
    let db_path = get_default_db_path();
    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    tracing::info!("使用数据库: {}", db_path);

    // 构建仓储与服务
    let catalog = Arc::new(SqliteCatalogRepository::new(&db_path)?);
    let store = Arc::new(SqliteMenuRepository::new(&db_path)?);
    let api = MenuApi::new(catalog, store);

    // 执行一次生成
    let mut rng = PlannerRng::from_entropy();
    let request = GenerateMenuRequest {
        budget,
        cuisine_prefs: Vec::new(),
        category_prefs: Vec::new(),
        user_id: None,
    };

    let result = api.generate_menu(request, &mut rng).await?;

    if result.menu.assigned_count() == 0 {
        tracing::warn!("目录为空或无合格候选,生成了全空菜单");
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
