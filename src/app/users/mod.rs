//! 用户管理

pub mod handler;
pub mod model;
pub mod service;

pub use model::{Field, User, UserCreate, UserUpdate};
pub use service::UserService;
