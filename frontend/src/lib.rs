//! MN-SHOP 前端应用
//!
//! 采用 Context-Driven 架构，业务状态全部来自核心 crate：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态到 Leptos 信号的桥接
//! - `api`: API 客户端上下文
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod about;
    mod form_field;
    pub mod home;
    pub mod login;
    pub mod navbar;
    mod product_card;
    pub mod signup;
    mod status;
}
pub mod web;

use crate::auth::{SessionContext, init_session};
use crate::components::about::AboutPage;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::signup::SignupPage;

use leptos::prelude::*;

use web::route::AppRoute;
use web::router::{Link, Router, RouterOutlet};

pub use web::init_logging;

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Products => view! { <HomePage hero=false /> }.into_any(),
        AppRoute::About => view! { <AboutPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Signup => view! { <SignupPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                    <Link to="/" class="btn btn-primary mt-6">"Back to Home"</Link>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 会话与 API 客户端共用同一份存储，token 由会话写入、由客户端读取
    let storage = web::browser_store();

    let session = SessionContext::new(storage.clone());
    provide_context(session.clone());
    provide_context(api::create_api(storage));

    // 2. 从 LocalStorage 恢复会话
    init_session(&session);

    // 3. 认证信号注入路由服务
    let is_authenticated = session.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <Navbar />
            <main>
                <RouterOutlet matcher=route_matcher />
            </main>
        </Router>
    }
}
