// ==========================================
// 双人周菜单规划系统 - API 层
// ==========================================
// 职责: 面向调用方的服务接口 (无传输层)
// ==========================================

pub mod error;
pub mod menu_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use menu_api::{GenerateMenuRequest, GeneratedMenu, MenuApi};
