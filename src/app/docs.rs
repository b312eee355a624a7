//! API 文档
//!
//! `/openapi.json` 返回由 utoipa 生成的 OpenAPI 文档，
//! `/docs` 返回加载 Swagger UI 的页面。

use axum::{
    extract::State,
    response::{Html, Json},
};
use utoipa::OpenApi;

use super::{
    users::{
        handler,
        model::{DeleteResponse, User, UserCreate, UserUpdate},
    },
    AppState,
};
use crate::core::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        handler::list_users,
        handler::get_user,
        handler::create_user,
        handler::update_user,
        handler::delete_user,
        handler::search_users
    ),
    components(schemas(User, UserCreate, UserUpdate, DeleteResponse, ErrorResponse)),
    tags((name = "users", description = "用户管理"))
)]
pub struct ApiDoc;

/// 标题、描述和版本取自服务配置
pub fn openapi(state: &AppState) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = state.info.title.clone();
    doc.info.description = Some(state.info.description.clone());
    doc.info.version = state.info.version.clone();
    doc
}

pub async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    Json(openapi(&state))
}

pub async fn swagger_ui(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        r##"<!DOCTYPE html>
<html>
<head>
<title>{title} - API文档</title>
<meta charset="utf-8">
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
<div id="swagger-ui"></div>
<script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
<script>
window.ui = SwaggerUIBundle({{ url: "/openapi.json", dom_id: "#swagger-ui" }});
</script>
</body>
</html>"##,
        title = state.info.title
    ))
}
