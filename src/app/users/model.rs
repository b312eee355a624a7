//! 用户数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::{CoreError, CoreResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
    pub created_at: DateTime<Utc>,
}

// 创建用户请求
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<i32>,
}

/// 更新请求中的单个字段
///
/// 区分三种情况：字段未出现、显式传入 `null`、传入具体值。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Field<T> {
    #[default]
    Missing,
    Null,
    Value(T),
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // 字段缺失时由 #[serde(default)] 得到 Missing，这里只会看到 null 或具体值
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Field::Value(value),
            None => Field::Null,
        })
    }
}

// 更新用户请求，只合并调用方显式提供的字段
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserUpdate {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: Field<String>,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub age: Field<i32>,
}

impl UserUpdate {
    /// name / email 在 User 上是必填的，不允许置空
    pub fn validate(&self) -> CoreResult<()> {
        if self.name == Field::Null {
            return Err(CoreError::Validation("name 不能为 null".to_string()));
        }
        if self.email == Field::Null {
            return Err(CoreError::Validation("email 不能为 null".to_string()));
        }
        Ok(())
    }

    /// 把提供的字段合并到已有记录上
    pub fn apply_to(self, user: &mut User) {
        if let Field::Value(name) = self.name {
            user.name = name;
        }
        if let Field::Value(email) = self.email {
            user.email = email;
        }
        match self.age {
            Field::Value(age) => user.age = Some(age),
            Field::Null => user.age = None,
            Field::Missing => {}
        }
    }
}

// 分页查询参数
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 跳过前N个用户
    #[serde(default)]
    pub skip: usize,
    /// 限制返回数量
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

// 搜索参数
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// 按姓名搜索
    pub name: Option<String>,
    /// 按邮箱搜索
    pub email: Option<String>,
}

/// 删除用户响应
#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_user: User,
}
