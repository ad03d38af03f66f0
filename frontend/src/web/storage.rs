//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 实现核心层的 [`KeyValueStore`]，
//! 会话与鉴权 token 都通过它持久化。

use mnshop::storage::{KeyValueStore, MemoryStore, SharedStore};
use std::sync::Arc;

/// 浏览器 LocalStorage
///
/// 每次访问都重新获取 `window.localStorage`，不持有 JS 对象，
/// 因此可以放进 `Arc<dyn KeyValueStore>` 在线程间共享。
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 隐私模式等场景下 localStorage 可能不可用
    pub fn available() -> bool {
        Self::storage().is_some()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    fn delete(&self, key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// 应用使用的存储：优先 LocalStorage，不可用时退回内存存储（刷新即丢失）
pub fn browser_store() -> SharedStore {
    if LocalStorage::available() {
        Arc::new(LocalStorage)
    } else {
        tracing::warn!("localStorage unavailable, session will not survive reloads");
        MemoryStore::shared()
    }
}
