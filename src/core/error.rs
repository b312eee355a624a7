//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// 核心错误类型
#[derive(Debug, Error)]
pub enum CoreError {
    /// 按 id 查找的记录不存在
    #[error("{0}")]
    NotFound(String),
    /// 请求参数或请求体校验失败
    #[error("{0}")]
    Validation(String),
    /// 路径存在但不支持该请求方法
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    Internal(String),
}

impl CoreError {
    /// 未匹配任何路由
    pub fn route_not_found() -> Self {
        CoreError::NotFound("Not Found".to_string())
    }

    /// 用户不存在
    pub fn user_not_found() -> Self {
        CoreError::NotFound("用户不存在".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CoreError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code_name(&self) -> &'static str {
        match self {
            CoreError::NotFound(_) => "NOT_FOUND",
            CoreError::Validation(_) => "VALIDATION_ERROR",
            CoreError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            CoreError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }
}

/// 错误响应结构
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
    pub error: String,
    pub code: u16,
    pub timestamp: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let CoreError::Internal(msg) = &self {
            tracing::error!("内部错误: {}", msg);
        }

        let error_response = ErrorResponse {
            error: self.code_name().to_string(),
            detail: self.to_string(),
            code: status.as_u16(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (status, Json(error_response)).into_response()
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
