//! HTTP 传输实现
//!
//! 使用 `web_sys::fetch` 实现核心层的 [`HttpClient`]。超时通过
//! `AbortSignal.timeout()` 交给浏览器执行。

use mnshop::request::{HttpClient, HttpRequest, HttpResponse, TransportError};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, DomException, Headers, Request, RequestInit, Response};

/// `fetch` 传输层
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

/// 超时触发的拒绝是 name 为 `TimeoutError` 的 DOMException
fn classify(err: JsValue) -> TransportError {
    match err.dyn_ref::<DomException>() {
        Some(e) if e.name() == "TimeoutError" => TransportError::Timeout,
        _ => TransportError::Network(format!("{:?}", err)),
    }
}

fn build_request(req: &HttpRequest) -> Result<Request, TransportError> {
    let headers =
        Headers::new().map_err(|e| TransportError::Build(format!("Headers: {:?}", e)))?;
    for (key, value) in &req.headers {
        headers
            .set(key, value)
            .map_err(|e| TransportError::Build(format!("header {}: {:?}", key, e)))?;
    }

    let opts = RequestInit::new();
    opts.set_method(req.method.as_str());
    opts.set_headers(&headers.into());

    if let Some(body) = &req.body {
        opts.set_body(&JsValue::from_str(body));
    }

    if let Some(timeout) = req.timeout {
        let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
        opts.set_signal(Some(&AbortSignal::timeout_with_u32(millis)));
    }

    Request::new_with_str_and_init(&req.url, &opts)
        .map_err(|e| TransportError::Build(format!("{:?}", e)))
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, TransportError> {
        let request = build_request(&req)?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("window is not available".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(classify)?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| TransportError::Body(format!("not a Response: {:?}", e)))?;
        let status = response.status();

        let promise = response
            .text()
            .map_err(|e| TransportError::Body(format!("{:?}", e)))?;
        // 读取响应体期间同样可能超时
        let text = JsFuture::from(promise).await.map_err(|e| match classify(e) {
            TransportError::Network(msg) => TransportError::Body(msg),
            other => other,
        })?;

        let body = text
            .as_string()
            .ok_or_else(|| TransportError::Body("body is not a string".to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
