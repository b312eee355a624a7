//! 服务信息与健康检查

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use super::AppState;
use crate::core::{CoreError, CoreResult};

/// 根路径返回和启动日志共用的端点列表
pub const ENDPOINTS: &[&str] = &[
    "GET    /                   - 服务信息",
    "GET    /users              - 获取用户列表 (skip, limit)",
    "POST   /users              - 创建新用户",
    "GET    /users/{id}         - 获取特定用户",
    "PUT    /users/{id}         - 更新用户 (部分字段)",
    "DELETE /users/{id}         - 删除用户",
    "GET    /users/search/      - 搜索用户 (name, email)",
    "GET    /health             - 健康检查",
    "GET    /docs               - API文档",
    "GET    /openapi.json       - OpenAPI 文档",
];

/// 根路径
pub async fn root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!("欢迎使用{}", state.info.title),
        "title": state.info.title,
        "description": state.info.description,
        "version": state.info.version,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "endpoints": ENDPOINTS,
    }))
}

/// 健康检查
pub async fn health_check(State(state): State<AppState>) -> CoreResult<Json<Value>> {
    let total_users = state.user_service.count()?;

    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "total_users": total_users,
    })))
}

/// 未匹配任何路由
pub async fn not_found() -> CoreError {
    CoreError::route_not_found()
}

/// 路由存在但方法不匹配
pub async fn method_not_allowed() -> CoreError {
    CoreError::MethodNotAllowed
}
