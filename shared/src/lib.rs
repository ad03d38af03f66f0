use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub mod protocol;
mod serde_helper;

use serde_helper::{null_as_default, scalar_map, string_or_number};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化会话用户记录的存储键
pub const STORAGE_USER_KEY: &str = "user";
/// 持久化 Bearer Token 的存储键
pub const STORAGE_TOKEN_KEY: &str = "token";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 后端定义的用户记录
///
/// 客户端不校验也不规范化其结构，原样保存并回写。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(Value);

impl UserRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// 仅包含邮箱的最小记录（注册成功但后端未返回 user 时使用）
    pub fn from_email(email: &str) -> Self {
        Self(serde_json::json!({ "email": email }))
    }

    pub fn email(&self) -> Option<&str> {
        self.0.get("email").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// 商品
///
/// 除 `productId` 外所有字段缺失或为 `null` 时都取默认值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// 后端偶尔以数字下发
    #[serde(deserialize_with = "string_or_number")]
    pub product_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
    /// 颜色名 -> 图片 URL，顺序无意义
    #[serde(default, deserialize_with = "scalar_map")]
    pub images: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
}

impl Product {
    /// 可选颜色即 `images` 的键
    pub fn colors(&self) -> Vec<&str> {
        self.images.keys().map(String::as_str).collect()
    }

    pub fn sizes(&self) -> &[String] {
        self.sizes.as_deref().unwrap_or_default()
    }

    pub fn has_sizes(&self) -> bool {
        !self.sizes().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutInfo {
    #[serde(default)]
    pub description: Option<String>,
    /// 联系方式类型 -> 值；数字（如电话号码）转为字符串
    #[serde(default, deserialize_with = "scalar_map")]
    pub contact_info: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
}

/// 登录/注册接口的统一响应
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_reads_camel_case_fields() {
        let product: Product = serde_json::from_value(json!({
            "productId": "p1",
            "productName": "Tee",
            "description": "cotton",
            "price": 19.5,
            "images": { "Red": "r.png", "Blue": "b.png" },
            "sizes": ["S", "M"]
        }))
        .unwrap();

        assert_eq!(product.product_id, "p1");
        assert_eq!(product.colors(), vec!["Blue", "Red"]);
        assert_eq!(product.sizes(), ["S".to_string(), "M".to_string()]);
        assert!(product.has_sizes());
    }

    #[test]
    fn product_without_sizes_or_images() {
        let product: Product = serde_json::from_value(json!({ "productId": "p2" })).unwrap();
        assert!(product.colors().is_empty());
        assert!(!product.has_sizes());
    }

    #[test]
    fn product_tolerates_null_fields_and_numeric_id() {
        let product: Product = serde_json::from_value(json!({
            "productId": 3,
            "productName": null,
            "description": null,
            "price": null,
            "images": null,
            "sizes": null
        }))
        .unwrap();
        assert_eq!(product.product_id, "3");
        assert_eq!(product.description, "");
        assert_eq!(product.price, 0.0);
        assert!(product.colors().is_empty());
        assert!(!product.has_sizes());
    }

    #[test]
    fn about_info_tolerates_null_and_numeric_contacts() {
        let about: AboutInfo =
            serde_json::from_value(json!({ "description": "d", "contactInfo": null })).unwrap();
        assert!(about.contact_info.is_empty());

        let about: AboutInfo = serde_json::from_value(json!({
            "description": null,
            "contactInfo": { "phone": 5551234567u64, "email": "shop@mn.com" }
        }))
        .unwrap();
        assert_eq!(about.description, None);
        assert_eq!(about.contact_info.get("phone").map(String::as_str), Some("5551234567"));
        assert_eq!(about.contact_info.len(), 2);
    }

    #[test]
    fn user_record_keeps_unknown_fields() {
        let raw = json!({ "email": "a@b.com", "tier": "gold" });
        let user: UserRecord = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(user.email(), Some("a@b.com"));
        assert_eq!(serde_json::to_value(&user).unwrap(), raw);
    }

    #[test]
    fn auth_response_defaults_missing_success_to_false() {
        let resp: AuthResponse = serde_json::from_value(json!({ "message": "nope" })).unwrap();
        assert!(!resp.success);
        assert_eq!(resp.message.as_deref(), Some("nope"));
        assert!(resp.user.is_none());
    }

    #[test]
    fn cart_line_serializes_camel_case() {
        let line = CartLine {
            product_id: "p1".into(),
            size: "M".into(),
            color: "Red".into(),
            quantity: 1,
        };
        assert_eq!(
            serde_json::to_value(&line).unwrap(),
            json!({ "productId": "p1", "size": "M", "color": "Red", "quantity": 1 })
        );
    }
}
