//! 原生 Web API 封装模块
//!
//! 对浏览器 API 的轻量封装，核心层的存储与传输抽象在这里落地。

mod console;
mod http;
pub mod route;
pub mod router;
mod storage;
mod window;

pub use console::init_logging;
pub use http::FetchHttpClient;
pub use storage::{LocalStorage, browser_store};
pub use window::{alert, copy_text};
