//! 请求提取器
//!
//! 包装 axum 自带的提取器，把解析失败统一转换成 [`CoreError::Validation`]，
//! 这样所有 4xx 校验错误都使用同一种 JSON 错误结构。

use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    http::request::Parts,
};

use super::error::CoreError;

/// JSON 请求体
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(CoreError))]
pub struct ValidJson<T>(pub T);

/// 查询参数
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(CoreError))]
pub struct ValidQuery<T>(pub T);

/// 路径参数
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(CoreError))]
pub struct ValidPath<T>(pub T);

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for CoreError {
    fn from(rejection: QueryRejection) -> Self {
        CoreError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for CoreError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::Validation(rejection.body_text())
    }
}

/// 大于 0 的路径 id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveId(pub u64);

#[async_trait]
impl<S> FromRequestParts<S> for PositiveId
where
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ValidPath(id) = ValidPath::<u64>::from_request_parts(parts, state).await?;
        if id == 0 {
            return Err(CoreError::Validation("id 必须大于 0".to_string()));
        }
        Ok(PositiveId(id))
    }
}
