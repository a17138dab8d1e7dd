use serde::Deserialize;
use url::Url;

use crate::types::office_app::OfficeApp;

/// Hosts whose pages may forward key chords. Any subdomain matches.
const TRUSTED_DOMAINS: &[&str] = &[
    "office.com",
    "office365.com",
    "cloud.microsoft",
    "microsoft.com",
    "microsoft365.com",
    "microsoftonline.com",
    "live.com",
    "onenote.com",
    "sharepoint.com",
];

/// Messages posted to Rust through `window.ipc.postMessage`.
///
/// The header page sends all of them; page content may only send `Key`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum IpcCommand {
    Ready,
    Back,
    Forward,
    Reload,
    Switch {
        app: OfficeApp,
    },
    CloseCurrent,
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        alt: bool,
    },
}

impl IpcCommand {
    /// Malformed bodies yield `None`.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    pub fn is_content_safe(&self) -> bool {
        matches!(self, IpcCommand::Key { .. })
    }
}

/// Whether a page at `page_url` may post commands at all: https on one of
/// the Office / Microsoft account hosts. Pages opened from links to other
/// sites get no IPC.
pub fn is_trusted_origin(page_url: &str) -> bool {
    let Ok(url) = Url::parse(page_url) else {
        return false;
    };
    if url.scheme() != "https" {
        return false;
    }
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    TRUSTED_DOMAINS
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{}", domain)))
}
