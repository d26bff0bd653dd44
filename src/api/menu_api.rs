// ==========================================
// 双人周菜单规划系统 - 菜单服务层
// ==========================================
// 职责: 编排一次完整生成 (校验 → 取目录 → 组装 →
//       清单/营养折算 → 持久化),以及目录/历史查询
// 红线: 预算区间在规划开始前校验;目录读取与持久化
//       是仅有的两个阻塞点,失败对整次请求致命
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::{budget_in_range, PlannerSettings, BUDGET_MAX, BUDGET_MIN};
use crate::domain::dish::Dish;
use crate::domain::menu::WeeklyMenu;
use crate::domain::nutrition::NutritionSummary;
use crate::domain::shopping::{round2, ShoppingList};
use crate::domain::types::{CuisineType, DietCategory};
use crate::engine::{
    NutritionSummarizer, PlannerRng, PopularityCache, ShoppingListAggregator, WeeklyAssembler,
};
use crate::repository::{CatalogReader, MenuRecord, MenuStore, DEFAULT_HISTORY_LIMIT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

// ==========================================
// GenerateMenuRequest - 生成请求
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateMenuRequest {
    /// 一周总预算 (货币单位, 允许区间 [120, 600])
    pub budget: f64,

    /// 菜系偏好 (空 = 不限)
    #[serde(default)]
    pub cuisine_prefs: Vec<CuisineType>,

    /// 饮食类别偏好 (空 = 不限)
    #[serde(default)]
    pub category_prefs: Vec<DietCategory>,

    /// 调用方指定的用户ID (缺省时生成新ID)
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

// ==========================================
// GeneratedMenu - 生成结果
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMenu {
    /// 用户ID
    pub user_id: Uuid,

    /// 生成时间
    pub generated_at: DateTime<Utc>,

    /// 请求预算
    pub budget: f64,

    /// 周菜单
    pub menu: WeeklyMenu,

    /// 购物清单
    pub shopping_list: ShoppingList,

    /// 营养汇总
    pub nutrition: NutritionSummary,

    /// 实际总花费 (条目小计之和,用于和名义预算对照)
    pub total_cost: f64,
}

// ==========================================
// MenuApi - 菜单服务
// ==========================================
pub struct MenuApi<C, S>
where
    C: CatalogReader,
    S: MenuStore,
{
    catalog: Arc<C>,
    store: Arc<S>,
    assembler: WeeklyAssembler,
    aggregator: ShoppingListAggregator,
    summarizer: NutritionSummarizer,
    popularity: PopularityCache,
    settings: PlannerSettings,
}

impl<C, S> MenuApi<C, S>
where
    C: CatalogReader,
    S: MenuStore,
{
    /// 创建新的服务实例 (无历史,受欢迎度一律 0.5)
    ///
    /// # 参数
    /// - catalog: 目录读取器
    /// - store: 菜单持久化
    pub fn new(catalog: Arc<C>, store: Arc<S>) -> Self {
        Self {
            catalog,
            store,
            assembler: WeeklyAssembler::new(),
            aggregator: ShoppingListAggregator::new(),
            summarizer: NutritionSummarizer::new(),
            popularity: PopularityCache::empty(),
            settings: PlannerSettings::default(),
        }
    }

    /// 注入预计算的受欢迎度缓存
    pub fn with_popularity(mut self, popularity: PopularityCache) -> Self {
        self.popularity = popularity;
        self
    }

    /// 覆盖规划参数
    pub fn with_settings(mut self, settings: PlannerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// 生成一周菜单并持久化
    ///
    /// 流程:
    /// 1) 校验预算区间 [120, 600]
    /// 2) 一次性读取菜品与食材目录
    /// 3) 组装周菜单 (空目录产出全空菜单,不报错)
    /// 4) 折算购物清单与营养汇总
    /// 5) 持久化 {用户, 时间, 预算, 菜单JSON, 清单JSON}
    ///
    /// # 参数
    /// - request: 生成请求
    /// - rng: 随机源 (测试注入固定种子)
    #[instrument(skip(self, request, rng), fields(budget = request.budget))]
    pub async fn generate_menu(
        &self,
        request: GenerateMenuRequest,
        rng: &mut PlannerRng,
    ) -> ApiResult<GeneratedMenu> {
        if !budget_in_range(request.budget) {
            return Err(ApiError::InvalidInput(format!(
                "presupuesto {} 超出允许区间 [{}, {}]",
                request.budget, BUDGET_MIN, BUDGET_MAX
            )));
        }

        // 目录读取: 每次生成只读一次,失败对整次请求致命
        let dishes = self.catalog.load_dishes().await?;
        let ingredients = self.catalog.load_ingredients().await?;
        info!(
            dishes_count = dishes.len(),
            ingredients_count = ingredients.len(),
            "目录读取完成"
        );

        let menu = self.assembler.assemble(
            &dishes,
            request.budget,
            &request.cuisine_prefs,
            &request.category_prefs,
            &self.popularity,
            &self.settings,
            rng,
        );

        let shopping_list = self.aggregator.aggregate(&menu, &ingredients, &self.settings);
        let nutrition = self.summarizer.summarize(&menu);

        // 实际总花费独立重算,用于与清单总计交叉校验
        let total_cost = round2(
            shopping_list
                .items
                .iter()
                .map(|item| item.subtotal)
                .sum::<f64>(),
        );

        let user_id = request.user_id.unwrap_or_else(Uuid::new_v4);
        let generated_at = Utc::now();

        let record = MenuRecord {
            user_id,
            generated_at,
            budget: request.budget,
            menu_json: serde_json::to_string(&menu)?,
            shopping_list_json: serde_json::to_string(&shopping_list)?,
        };
        self.store.save_menu(&record).await?;

        info!(
            user_id = %user_id,
            assigned_count = menu.assigned_count(),
            total_cost,
            "菜单生成并持久化完成"
        );

        Ok(GeneratedMenu {
            user_id,
            generated_at,
            budget: request.budget,
            menu,
            shopping_list,
            nutrition,
            total_cost,
        })
    }

    /// 查询全部可用菜品
    pub async fn list_dishes(&self) -> ApiResult<Vec<Dish>> {
        Ok(self.catalog.load_dishes().await?)
    }

    /// 查询用户的菜单历史 (新的在前)
    pub async fn menu_history(
        &self,
        user_id: Uuid,
    ) -> ApiResult<Vec<MenuRecord>> {
        Ok(self.store.list_menus(user_id, DEFAULT_HISTORY_LIMIT).await?)
    }
}
