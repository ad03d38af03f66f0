//! 会话上下文
//!
//! 把核心层的 [`SessionStore`] 桥接到 Leptos 信号：
//! 会话每次变化都写入一个 `RwSignal`，组件只读这个信号。
//! 路由服务通过注入的认证信号检查登录状态。

use leptos::prelude::*;
use mnshop::session::{SessionSnapshot, SessionStore};
use mnshop::storage::SharedStore;
use mnshop_shared::UserRecord;
use std::sync::Arc;

/// 会话上下文，通过 Context 在组件间共享
#[derive(Clone)]
pub struct SessionContext {
    pub store: Arc<SessionStore>,
    /// 最近一次会话快照
    pub state: RwSignal<SessionSnapshot>,
}

impl SessionContext {
    pub fn new(storage: SharedStore) -> Self {
        let store = Arc::new(SessionStore::new(storage));
        let state = RwSignal::new(store.snapshot());

        // 信号随所属 owner 销毁后，try_set 会静默失败
        store.subscribe(move |snapshot| {
            let _ = state.try_set(snapshot.clone());
        });

        Self { store, state }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(SessionSnapshot::is_authenticated))
    }

    pub fn is_loading_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.loading))
    }

    pub fn user_signal(&self) -> Signal<Option<UserRecord>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.user.clone()))
    }
}

/// 从 Context 获取会话上下文
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// 从持久化存储恢复会话
pub fn init_session(ctx: &SessionContext) {
    ctx.store.initialize();
}

/// 登出，同时清除 token
///
/// 导航由调用方负责。
pub fn logout(ctx: &SessionContext) {
    ctx.store.sign_out();
}
