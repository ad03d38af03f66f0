//! 路由定义模块 - 领域模型
//!
//! 纯业务逻辑，不依赖 DOM 或 web_sys。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    /// 商品列表，与首页共用同一份数据
    Products,
    About,
    Login,
    Signup,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举，忽略末尾的 `/`
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/products" => Self::Products,
            "/about" => Self::About,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Products => "/products",
            Self::About => "/about",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::NotFound => "/404",
        }
    }

    /// 已登录用户访问时应离开的路由
    ///
    /// 注册页不在其中：注册成功后需要先展示成功提示再跳转。
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 登录成功后的落地页
    pub fn auth_success_redirect() -> Self {
        Self::Home
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::Products,
            AppRoute::About,
            AppRoute::Login,
            AppRoute::Signup,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_and_trailing_slash_paths() {
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/about/"), AppRoute::About);
        assert_eq!(AppRoute::from_path("/cart"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/404"), AppRoute::NotFound);
    }

    #[test]
    fn only_login_bounces_signed_in_users() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Signup.should_redirect_when_authenticated());
        assert!(!AppRoute::Home.should_redirect_when_authenticated());
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Home);
    }
}
