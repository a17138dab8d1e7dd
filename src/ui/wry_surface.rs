//! `wry` implementation of the controller's surface traits.
//!
//! Every tab is a child webview of the main window, placed below the header
//! and built on one shared `WebContext`. Engine callbacks never touch the
//! controller; they post a [`UserEvent`] through the event-loop proxy.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use tracing::{debug, warn};
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{NewWindowResponse, PageLoadEvent, Rect, WebContext, WebView, WebViewBuilder};

use crate::shell::surface::{Surface, SurfaceFactory};
use crate::types::errors::SurfaceError;
use crate::types::settings::BrowserSettings;
use crate::types::tab::TabId;

use super::webview_app::UserEvent;

/// Height of the header webview in logical pixels.
pub const HEADER_HEIGHT: f64 = 46.0;

fn logical_size(window: &Window) -> (f64, f64) {
    let scale = window.scale_factor();
    let size = window.inner_size();
    (size.width as f64 / scale, size.height as f64 / scale)
}

pub fn header_bounds(window: &Window) -> Rect {
    let (width, _) = logical_size(window);
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(width, HEADER_HEIGHT).into(),
    }
}

pub fn content_bounds(window: &Window) -> Rect {
    let (width, height) = logical_size(window);
    Rect {
        position: LogicalPosition::new(0.0, HEADER_HEIGHT).into(),
        size: LogicalSize::new(width, (height - HEADER_HEIGHT).max(0.0)).into(),
    }
}

fn op_err(err: wry::Error) -> SurfaceError {
    SurfaceError::Operation(err.to_string())
}

pub struct WrySurface {
    id: TabId,
    webview: WebView,
}

impl WrySurface {
    pub fn set_bounds(&self, bounds: Rect) {
        if let Err(err) = self.webview.set_bounds(bounds) {
            warn!(tab = %self.id, error = %err, "failed to lay out surface");
        }
    }

    pub fn focus(&self) {
        if let Err(err) = self.webview.focus() {
            debug!(tab = %self.id, error = %err, "failed to focus surface");
        }
    }
}

impl Surface for WrySurface {
    fn load_uri(&self, uri: &str) -> Result<(), SurfaceError> {
        self.webview.load_url(uri).map_err(op_err)
    }

    fn go_back(&self) -> Result<(), SurfaceError> {
        self.webview.evaluate_script("history.back()").map_err(op_err)
    }

    fn go_forward(&self) -> Result<(), SurfaceError> {
        self.webview.evaluate_script("history.forward()").map_err(op_err)
    }

    fn reload(&self) -> Result<(), SurfaceError> {
        self.webview.reload().map_err(op_err)
    }

    #[cfg(target_os = "linux")]
    fn reload_bypass_cache(&self) -> Result<(), SurfaceError> {
        use webkit2gtk::WebViewExt;
        use wry::WebViewExtUnix;
        self.webview.webview().reload_bypass_cache();
        Ok(())
    }

    #[cfg(not(target_os = "linux"))]
    fn reload_bypass_cache(&self) -> Result<(), SurfaceError> {
        self.webview.reload().map_err(op_err)
    }

    fn set_zoom_level(&self, level: f64) -> Result<(), SurfaceError> {
        self.webview.zoom(level).map_err(op_err)
    }

    fn set_visible(&self, visible: bool) -> Result<(), SurfaceError> {
        self.webview.set_visible(visible).map_err(op_err)?;
        if visible {
            self.focus();
        }
        Ok(())
    }

    fn clear_browsing_data(&self) -> Result<(), SurfaceError> {
        self.webview.clear_all_browsing_data().map_err(op_err)
    }

    /// Hides the view; the engine tears it down when the record drops.
    fn try_close(&self) -> Result<(), SurfaceError> {
        self.webview.set_visible(false).map_err(op_err)
    }
}

/// Builds tab webviews as children of the main window.
pub struct WrySurfaceFactory {
    window: Rc<Window>,
    web_context: WebContext,
    browser: BrowserSettings,
    key_script: String,
    proxy: EventLoopProxy<UserEvent>,
    cookie_db: PathBuf,
    cookies_configured: bool,
}

impl WrySurfaceFactory {
    pub fn new(
        window: Rc<Window>,
        data_dir: &Path,
        cookie_db: PathBuf,
        browser: BrowserSettings,
        key_script: String,
        proxy: EventLoopProxy<UserEvent>,
    ) -> Self {
        Self {
            window,
            web_context: WebContext::new(Some(data_dir.to_path_buf())),
            browser,
            key_script,
            proxy,
            cookie_db,
            cookies_configured: false,
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl SurfaceFactory for WrySurfaceFactory {
    type Surface = WrySurface;

    fn create(
        &mut self,
        id: &TabId,
        related: Option<&WrySurface>,
    ) -> Result<WrySurface, SurfaceError> {
        let ipc_proxy = self.proxy.clone();
        let ipc_tab = id.clone();
        let load_proxy = self.proxy.clone();
        let load_tab = id.clone();
        let title_proxy = self.proxy.clone();
        let title_tab = id.clone();
        let nw_proxy = self.proxy.clone();
        let nw_tab = id.clone();

        let builder = WebViewBuilder::new_with_web_context(&mut self.web_context)
            .with_id(id.as_str())
            .with_bounds(content_bounds(&self.window))
            .with_visible(false)
            .with_user_agent(self.browser.user_agent.as_str())
            .with_devtools(self.browser.devtools)
            .with_autoplay(self.browser.autoplay)
            .with_background_color((255, 255, 255, 255))
            .with_initialization_script(self.key_script.as_str())
            .with_ipc_handler(move |request: wry::http::Request<String>| {
                let _ = ipc_proxy.send_event(UserEvent::Page {
                    tab: ipc_tab.clone(),
                    url: request.uri().to_string(),
                    body: request.body().clone(),
                });
            })
            .with_on_page_load_handler(move |event, url| {
                let _ = load_proxy.send_event(UserEvent::PageLoad {
                    tab: load_tab.clone(),
                    loading: matches!(event, PageLoadEvent::Started),
                    url,
                });
            })
            .with_document_title_changed_handler(move |title| {
                let _ = title_proxy.send_event(UserEvent::TitleChanged {
                    tab: title_tab.clone(),
                    title,
                });
            })
            .with_new_window_req_handler(move |url, _features| {
                let _ = nw_proxy.send_event(UserEvent::NewWindow {
                    tab: nw_tab.clone(),
                    url,
                });
                NewWindowResponse::Deny
            });

        #[cfg(target_os = "linux")]
        let builder = match related {
            Some(anchor) => {
                use wry::{WebViewBuilderExtUnix, WebViewExtUnix};
                builder.with_related_view(anchor.webview.webview())
            }
            None => builder,
        };
        #[cfg(not(target_os = "linux"))]
        let _ = related;

        let webview = builder
            .build_as_child(&*self.window)
            .map_err(|e| SurfaceError::Create(e.to_string()))?;

        if !self.cookies_configured {
            persist_cookies(&webview, &self.cookie_db);
            self.cookies_configured = true;
        }

        debug!(tab = %id, "created surface");
        Ok(WrySurface {
            id: id.clone(),
            webview,
        })
    }
}

/// Switches the shared session's cookie jar to SQLite so sign-ins survive
/// restarts.
#[cfg(target_os = "linux")]
fn persist_cookies(webview: &WebView, path: &Path) {
    use webkit2gtk::{CookieManagerExt, CookiePersistentStorage, WebContextExt, WebViewExt};
    use wry::WebViewExtUnix;

    let manager = webview
        .webview()
        .context()
        .and_then(|context| context.cookie_manager());
    match manager {
        Some(manager) => {
            manager.set_persistent_storage(&path.to_string_lossy(), CookiePersistentStorage::Sqlite);
            tracing::info!(path = %path.display(), "persisting cookies");
        }
        None => warn!("no cookie manager, cookies will not persist"),
    }
}

/// WebView2 and WKWebView persist cookies in the data directory on their own.
#[cfg(not(target_os = "linux"))]
fn persist_cookies(_webview: &WebView, path: &Path) {
    debug!(path = %path.display(), "engine manages cookie persistence");
}
