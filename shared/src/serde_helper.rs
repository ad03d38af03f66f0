//! 宽松的反序列化辅助函数
//!
//! 后端字段可能缺失、显式为 `null`，或者把字符串字段写成数字。
//! 这里统一把它们解码成默认值或字符串，而不是让整条记录解码失败。

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;
use std::collections::BTreeMap;

/// 标量转字符串；`null`、数组、对象返回 `None`
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// `null` 视同字段缺失，使用 `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 接受字符串或数字
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or number, got {}",
            other
        ))),
    }
}

/// 值为标量的映射：数字与布尔转成字符串，`null` 与嵌套结构的条目被丢弃；
/// 整个映射为 `null` 时得到空映射
pub fn scalar_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key, v)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Lenient {
        #[serde(default, deserialize_with = "null_as_default")]
        text: String,
        #[serde(default, deserialize_with = "scalar_map")]
        map: BTreeMap<String, String>,
    }

    #[derive(Debug, Deserialize)]
    struct Id {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
    }

    #[test]
    fn explicit_null_becomes_default() {
        let decoded: Lenient = serde_json::from_value(json!({ "text": null, "map": null })).unwrap();
        assert_eq!(decoded.text, "");
        assert!(decoded.map.is_empty());

        let decoded: Lenient = serde_json::from_value(json!({})).unwrap();
        assert_eq!(decoded.text, "");
    }

    #[test]
    fn scalar_map_stringifies_numbers_and_drops_nested() {
        let decoded: Lenient = serde_json::from_value(json!({
            "map": { "phone": 5551234567u64, "email": "a@b.com", "verified": true, "x": null, "y": [1] }
        }))
        .unwrap();
        assert_eq!(decoded.map.get("phone").map(String::as_str), Some("5551234567"));
        assert_eq!(decoded.map.get("email").map(String::as_str), Some("a@b.com"));
        assert_eq!(decoded.map.get("verified").map(String::as_str), Some("true"));
        assert_eq!(decoded.map.len(), 3);
    }

    #[test]
    fn id_accepts_string_or_number_only() {
        let decoded: Id = serde_json::from_value(json!({ "id": 3 })).unwrap();
        assert_eq!(decoded.id, "3");
        let decoded: Id = serde_json::from_value(json!({ "id": "p1" })).unwrap();
        assert_eq!(decoded.id, "p1");
        assert!(serde_json::from_value::<Id>(json!({ "id": null })).is_err());
        assert!(serde_json::from_value::<Id>(json!({ "id": {} })).is_err());
    }
}
