//! 零散的 window API：原生弹窗与剪贴板

use wasm_bindgen_futures::JsFuture;

/// `window.alert`
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// 写入系统剪贴板，需要在用户手势中触发
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}
