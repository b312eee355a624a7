//! 应用层：路由与共享状态

pub mod docs;
pub mod system;
pub mod users;

use std::{sync::Arc, time::Duration};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use crate::infrastructure::config::ServiceInfo;
use users::{handler, UserService};

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub info: Arc<ServiceInfo>,
}

impl AppState {
    pub fn new(info: ServiceInfo) -> Self {
        Self {
            user_service: UserService::new(),
            info: Arc::new(info),
        }
    }
}

/// 创建路由
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    // 每个 MethodRouter 都挂上 405 fallback，保证错误响应统一为 JSON
    Router::new()
        .route(
            "/",
            get(system::root).fallback(system::method_not_allowed),
        )
        .route(
            "/health",
            get(system::health_check).fallback(system::method_not_allowed),
        )
        .route(
            "/docs",
            get(docs::swagger_ui).fallback(system::method_not_allowed),
        )
        .route(
            "/openapi.json",
            get(docs::openapi_json).fallback(system::method_not_allowed),
        )
        .route(
            "/users",
            post(handler::create_user)
                .get(handler::list_users)
                .fallback(system::method_not_allowed),
        )
        .route(
            "/users/search/",
            get(handler::search_users).fallback(system::method_not_allowed),
        )
        .route(
            "/users/:id",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user)
                .fallback(system::method_not_allowed),
        )
        .fallback(system::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(TimeoutLayer::new(request_timeout))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
