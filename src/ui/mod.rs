//! office-shell UI layer.
//!
//! Uses `wry` for the browser engine on every platform:
//! - Linux: WebKitGTK
//! - Windows: WebView2
//! - macOS: WKWebView
//!
//! The header bar is HTML/CSS/JS in its own webview; each tab is a sibling
//! webview below it. All decisions are made by [`crate::shell::Shell`].

pub mod webview_app;
pub mod wry_surface;
