//! # 用户服务演示
//!
//! 基于 axum 的内存用户 CRUD 服务，按分层组织：
//! - `app`: 路由、处理器和业务服务
//! - `core`: 错误处理、请求提取器、中间件
//! - `infrastructure`: 配置加载和日志初始化

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
pub use crate::core::{CoreError, CoreResult};
pub use infrastructure::{Config, ConfigError};
