//! 用户业务服务
//!
//! 所有记录和 id 计数器都放在同一把互斥锁后面，每个操作只加锁一次，
//! 因此 list / get / create / update / delete / search 之间互不交错。

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use tracing::{debug, info};

use super::model::{SearchQuery, User, UserCreate, UserUpdate};
use crate::core::{CoreError, CoreResult};

#[derive(Debug)]
struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    fn position(&self, id: u64) -> Option<usize> {
        self.users.iter().position(|u| u.id == id)
    }
}

#[derive(Clone, Debug)]
pub struct UserService {
    store: Arc<Mutex<UserStore>>,
}

impl Default for UserService {
    fn default() -> Self {
        Self::new()
    }
}

impl UserService {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Mutex::new(UserStore {
                users: Vec::new(),
                next_id: 1,
            })),
        }
    }

    fn lock(&self) -> CoreResult<MutexGuard<'_, UserStore>> {
        self.store
            .lock()
            .map_err(|_| CoreError::Internal("用户存储锁已损坏".to_string()))
    }

    /// 按插入顺序返回 `[skip, skip + limit)` 区间，越界时返回空列表
    pub fn list(&self, skip: usize, limit: usize) -> CoreResult<Vec<User>> {
        let store = self.lock()?;
        Ok(store.users.iter().skip(skip).take(limit).cloned().collect())
    }

    pub fn get(&self, id: u64) -> CoreResult<User> {
        let store = self.lock()?;
        store
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| {
                debug!("用户 {} 不存在", id);
                CoreError::user_not_found()
            })
    }

    pub fn create(&self, payload: UserCreate) -> CoreResult<User> {
        let mut store = self.lock()?;

        let user = User {
            id: store.next_id,
            name: payload.name,
            email: payload.email,
            age: payload.age,
            created_at: Utc::now(),
        };
        store.next_id += 1;
        store.users.push(user.clone());

        info!("创建用户 id={} name={}", user.id, user.name);
        Ok(user)
    }

    pub fn update(&self, id: u64, payload: UserUpdate) -> CoreResult<User> {
        payload.validate()?;

        let mut store = self.lock()?;
        let index = store.position(id).ok_or_else(|| {
            debug!("更新失败，用户 {} 不存在", id);
            CoreError::user_not_found()
        })?;

        let user = &mut store.users[index];
        payload.apply_to(user);

        info!("更新用户 id={}", id);
        Ok(user.clone())
    }

    pub fn delete(&self, id: u64) -> CoreResult<User> {
        let mut store = self.lock()?;
        let index = store.position(id).ok_or_else(|| {
            debug!("删除失败，用户 {} 不存在", id);
            CoreError::user_not_found()
        })?;

        let user = store.users.remove(index);
        info!("删除用户 id={}", id);
        Ok(user)
    }

    /// 不区分大小写的子串匹配，同时给出 name 和 email 时两者都要命中
    pub fn search(&self, query: &SearchQuery) -> CoreResult<Vec<User>> {
        let name = normalize_filter(query.name.as_deref());
        let email = normalize_filter(query.email.as_deref());

        let store = self.lock()?;
        Ok(store
            .users
            .iter()
            .filter(|u| {
                name.as_ref()
                    .map_or(true, |n| u.name.to_lowercase().contains(n.as_str()))
            })
            .filter(|u| {
                email
                    .as_ref()
                    .map_or(true, |e| u.email.to_lowercase().contains(e.as_str()))
            })
            .cloned()
            .collect())
    }

    pub fn count(&self) -> CoreResult<usize> {
        Ok(self.lock()?.users.len())
    }
}

// 空字符串等同于未提供
fn normalize_filter(filter: Option<&str>) -> Option<String> {
    filter.filter(|f| !f.is_empty()).map(str::to_lowercase)
}
