//! API 客户端上下文
//!
//! 后端地址与超时在编译期由环境变量注入
//! (`MNSHOP_API_BASE_URL`, `MNSHOP_API_TIMEOUT_MS`)，未设置时使用默认值。

use crate::web::FetchHttpClient;
use leptos::prelude::*;
use mnshop::ApiClient;
use mnshop::config::{ClientConfig, VAR_BASE_URL, VAR_TIMEOUT_MS};
use mnshop::storage::SharedStore;
use std::sync::Arc;

pub type ShopApi = ApiClient<FetchHttpClient>;

fn build_env(name: &str) -> Option<String> {
    let value = match name {
        VAR_BASE_URL => option_env!("MNSHOP_API_BASE_URL"),
        VAR_TIMEOUT_MS => option_env!("MNSHOP_API_TIMEOUT_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

/// 创建 API 客户端，token 从与会话相同的存储中读取
pub fn create_api(storage: SharedStore) -> Arc<ShopApi> {
    let config = ClientConfig::from_lookup(build_env);
    tracing::info!(base_url = %config.base_url, timeout = ?config.timeout, "api client configured");
    Arc::new(ApiClient::new(config, FetchHttpClient, storage))
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> Arc<ShopApi> {
    use_context::<Arc<ShopApi>>().expect("ShopApi should be provided")
}
