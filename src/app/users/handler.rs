//! 用户处理器

use axum::{extract::State, response::Json};

use super::model::{DeleteResponse, ListQuery, SearchQuery, User, UserCreate, UserUpdate};
use crate::app::AppState;
use crate::core::{
    extract::{PositiveId, ValidJson, ValidQuery},
    CoreResult, ErrorResponse,
};

/// 获取用户列表 (skip / limit 分页)
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(ListQuery),
    responses(
        (status = 200, description = "用户列表", body = [User]),
        (status = 422, description = "参数错误", body = ErrorResponse),
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListQuery>,
) -> CoreResult<Json<Vec<User>>> {
    let users = state.user_service.list(query.skip, query.limit)?;
    Ok(Json(users))
}

/// 根据 ID 获取用户
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "用户ID")),
    responses(
        (status = 200, description = "用户详情", body = User),
        (status = 404, description = "用户不存在", body = ErrorResponse),
        (status = 422, description = "参数错误", body = ErrorResponse),
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PositiveId(id): PositiveId,
) -> CoreResult<Json<User>> {
    let user = state.user_service.get(id)?;
    Ok(Json(user))
}

/// 创建新用户
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserCreate,
    responses(
        (status = 200, description = "新建的用户", body = User),
        (status = 422, description = "参数错误", body = ErrorResponse),
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<UserCreate>,
) -> CoreResult<Json<User>> {
    let user = state.user_service.create(payload)?;
    Ok(Json(user))
}

/// 更新用户，只修改请求中出现的字段
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "用户ID")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "更新后的用户", body = User),
        (status = 404, description = "用户不存在", body = ErrorResponse),
        (status = 422, description = "参数错误", body = ErrorResponse),
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    PositiveId(id): PositiveId,
    ValidJson(payload): ValidJson<UserUpdate>,
) -> CoreResult<Json<User>> {
    let user = state.user_service.update(id, payload)?;
    Ok(Json(user))
}

/// 删除用户
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "用户ID")),
    responses(
        (status = 200, description = "删除成功", body = DeleteResponse),
        (status = 404, description = "用户不存在", body = ErrorResponse),
        (status = 422, description = "参数错误", body = ErrorResponse),
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PositiveId(id): PositiveId,
) -> CoreResult<Json<DeleteResponse>> {
    let deleted_user = state.user_service.delete(id)?;
    Ok(Json(DeleteResponse {
        message: "用户删除成功".to_string(),
        deleted_user,
    }))
}

/// 按姓名 / 邮箱搜索用户
#[utoipa::path(
    get,
    path = "/users/search/",
    tag = "users",
    params(SearchQuery),
    responses((status = 200, description = "匹配的用户", body = [User]))
)]
pub async fn search_users(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<SearchQuery>,
) -> CoreResult<Json<Vec<User>>> {
    let users = state.user_service.search(&query)?;
    Ok(Json(users))
}
