use crate::{AboutInfo, AuthResponse, CartLine};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::borrow::Cow;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// The URL path, relative to the configured base URL.
    fn path(&self) -> Cow<'static, str>;

    /// JSON body. Endpoints without a body keep the default.
    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        Ok(None)
    }
}

// =========================================================
// Request Definitions
// =========================================================

/// Home page listing. The backend answers with one of several shapes,
/// so the raw JSON is returned and normalized by the caller.
#[derive(Debug, Serialize, Deserialize)]
pub struct HomeRequest;

impl ApiRequest for HomeRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/ecom/v1/home")
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AboutRequest;

impl ApiRequest for AboutRequest {
    type Response = AboutInfo;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/ecom/v1/about")
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub product_id: String,
}

impl ApiRequest for AddFavoriteRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/ecom/v1/favorites/add")
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        serde_json::to_value(self).map(Some)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFavoriteRequest {
    pub product_id: String,
}

impl ApiRequest for RemoveFavoriteRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Delete;

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "/ecom/v1/favorites/remove/{}",
            urlencoding::encode(&self.product_id)
        ))
    }
}

impl ApiRequest for CartLine {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/ecom/v1/cart/add")
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        serde_json::to_value(self).map(Some)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl ApiRequest for LoginRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/auth/login")
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        serde_json::to_value(self).map(Some)
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub mobile_number: String,
}

impl ApiRequest for SignupRequest {
    type Response = AuthResponse;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed("/auth/signup")
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        serde_json::to_value(self).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn remove_favorite_path_escapes_id() {
        let req = RemoveFavoriteRequest {
            product_id: "a b/c".into(),
        };
        assert_eq!(req.path(), "/ecom/v1/favorites/remove/a%20b%2Fc");
        assert!(req.body().unwrap().is_none());
    }

    #[test]
    fn signup_body_uses_mobile_number_key() {
        let req = SignupRequest {
            email: "a@b.com".into(),
            password: "abcdef".into(),
            mobile_number: "1234567890".into(),
        };
        assert_eq!(
            req.body().unwrap(),
            Some(json!({ "email": "a@b.com", "password": "abcdef", "mobileNumber": "1234567890" }))
        );
    }

    #[test]
    fn get_requests_have_no_body() {
        assert!(HomeRequest.body().unwrap().is_none());
        assert!(AboutRequest.body().unwrap().is_none());
        assert_eq!(HomeRequest::METHOD, HttpMethod::Get);
    }
}
