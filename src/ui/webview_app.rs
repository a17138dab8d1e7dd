//! Main window: a `tao` event loop driving the header webview and the
//! [`Shell`] controller.
//!
//! - The header is a child webview across the top, served from the `office`
//!   custom protocol and rendered from [`ChromeState`] after every event.
//! - Each tab is a child webview below it (see [`WrySurfaceFactory`]).
//! - Webview callbacks only post [`UserEvent`]s; the loop owns all state.

use std::borrow::Cow;
use std::rc::Rc;

use tao::dpi::LogicalSize;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder, EventLoopProxy};
use tao::window::{Window, WindowBuilder};
use tracing::{debug, info, warn};
use wry::http::{header::CONTENT_TYPE, Response};
use wry::{WebView, WebViewBuilder};

use crate::app::App;
use crate::shell::page::{chrome_html, key_forward_script};
use crate::shell::{ActionOutcome, IpcCommand, Shell};
use crate::types::errors::ShellError;
use crate::types::tab::TabId;

use super::wry_surface::{content_bounds, header_bounds, WrySurfaceFactory};

const PROTOCOL: &str = "office";

#[derive(Debug)]
pub enum UserEvent {
    /// IPC body posted by the header page.
    Chrome(String),
    /// IPC body posted by a tab's page content, with the posting page's URL.
    Page { tab: TabId, url: String, body: String },
    PageLoad { tab: TabId, loading: bool, url: String },
    TitleChanged { tab: TabId, title: String },
    /// A page asked for a new window (`target="_blank"`, `window.open`).
    NewWindow { tab: TabId, url: String },
}

/// URL the header page is served from. WebView2 maps custom schemes onto
/// `http://<scheme>.localhost`.
fn chrome_url() -> String {
    if cfg!(target_os = "windows") {
        format!("http://{}.localhost/chrome", PROTOCOL)
    } else {
        format!("{}://localhost/chrome", PROTOCOL)
    }
}

/// `build_as_child` needs X11 on Linux; run through XWayland unless the user
/// picked a backend.
#[cfg(target_os = "linux")]
fn prefer_x11() {
    if std::env::var_os("GDK_BACKEND").is_none() {
        std::env::set_var("GDK_BACKEND", "x11");
    }
}

#[cfg(not(target_os = "linux"))]
fn prefer_x11() {}

fn build_chrome(
    window: &Window,
    html: String,
    proxy: EventLoopProxy<UserEvent>,
) -> Result<WebView, wry::Error> {
    WebViewBuilder::new()
        .with_custom_protocol(PROTOCOL.into(), move |_id, request| {
            debug!(path = request.uri().path(), "serving header page");
            Response::builder()
                .header(CONTENT_TYPE, "text/html; charset=utf-8")
                .body(Cow::Owned(html.clone().into_bytes()))
                .unwrap_or_else(|_| Response::new(Cow::Borrowed(&[][..])))
        })
        .with_url(chrome_url())
        .with_bounds(header_bounds(window))
        .with_devtools(cfg!(debug_assertions))
        .with_ipc_handler(move |request: wry::http::Request<String>| {
            let _ = proxy.send_event(UserEvent::Chrome(request.body().clone()));
        })
        .with_new_window_req_handler(|_url, _features| wry::NewWindowResponse::Deny)
        .build_as_child(window)
}

fn render_chrome(window: &Window, chrome: &WebView, shell: &Shell<WrySurfaceFactory>) {
    let state = shell.chrome_state();
    window.set_title(&state.title);
    if let Err(err) = chrome.evaluate_script(&state.to_script()) {
        warn!(error = %err, "failed to render header");
    }
}

fn layout(window: &Window, chrome: &WebView, shell: &Shell<WrySurfaceFactory>) {
    if let Err(err) = chrome.set_bounds(header_bounds(window)) {
        warn!(error = %err, "failed to lay out header");
    }
    let bounds = content_bounds(window);
    for surface in shell.surfaces() {
        surface.set_bounds(bounds);
    }
}

fn handle_event(
    shell: &mut Shell<WrySurfaceFactory>,
    event: UserEvent,
) -> Result<ActionOutcome, ShellError> {
    match event {
        UserEvent::Chrome(body) => match IpcCommand::parse(&body) {
            Some(command) => shell.dispatch(command),
            None => {
                warn!(body = %body, "unrecognised header message");
                Ok(ActionOutcome::Continue)
            }
        },
        UserEvent::Page { tab, url, body } => match IpcCommand::parse(&body) {
            Some(command) => shell.dispatch_from_page(&tab, &url, command),
            None => {
                debug!(tab = %tab, "ignoring page message");
                Ok(ActionOutcome::Continue)
            }
        },
        UserEvent::PageLoad { tab, loading, url } => {
            shell.on_loading_changed(&tab, loading);
            shell.on_uri_changed(&tab, &url);
            Ok(ActionOutcome::Continue)
        }
        UserEvent::TitleChanged { tab, title } => {
            shell.on_title_changed(&tab, &title);
            Ok(ActionOutcome::Continue)
        }
        UserEvent::NewWindow { tab, url } => {
            shell.on_new_window(&tab, &url)?;
            Ok(ActionOutcome::Continue)
        }
    }
}

// ─── Main entry point ───

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    prefer_x11();

    let mut app = App::from_platform();
    app.startup()?;
    let settings = app.settings().clone();

    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = Rc::new(
        WindowBuilder::new()
            .with_title(settings.window.title.as_str())
            .with_inner_size(LogicalSize::new(
                f64::from(settings.window.width),
                f64::from(settings.window.height),
            ))
            .build(&event_loop)?,
    );

    let key_script = key_forward_script(&app.shortcut_manager.bound_chords());
    let chrome = build_chrome(
        &window,
        chrome_html(&app.chrome_stylesheet(), &key_script),
        proxy.clone(),
    )?;

    let factory = WrySurfaceFactory::new(
        Rc::clone(&window),
        &app.paths.data_dir,
        app.paths.cookie_db(),
        settings.browser.clone(),
        key_script,
        proxy,
    );
    let mut shell = Shell::new(factory, &settings, app.shortcut_manager.clone());
    shell.start()?;
    info!("window ready");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. },
                ..
            } => layout(&window, &chrome, &shell),

            Event::UserEvent(user_event) => {
                match handle_event(&mut shell, user_event) {
                    Ok(ActionOutcome::Quit) => {
                        info!("last tab closed, exiting");
                        *control_flow = ControlFlow::Exit;
                        return;
                    }
                    Ok(ActionOutcome::Continue) => {}
                    Err(err) => warn!(error = %err, "event failed"),
                }
                render_chrome(&window, &chrome, &shell);
            }

            _ => {}
        }
    })
}
