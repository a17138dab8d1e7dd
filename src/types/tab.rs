use std::fmt;

use uuid::Uuid;

use super::office_app::OfficeApp;

/// Identity of one tab page. Stays valid only while the tab is open.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(String);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for TabId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything associated with one open tab.
#[derive(Debug)]
pub struct TabRecord<S> {
    pub id: TabId,
    pub surface: S,
    pub title: String,
    /// The Office app this tab was opened for, `None` for ad hoc tabs.
    pub tracked: Option<OfficeApp>,
    pub uri: String,
    pub loading: bool,
    pub zoom_level: f64,
}

impl<S> TabRecord<S> {
    pub fn new(id: TabId, surface: S, title: &str, tracked: Option<OfficeApp>) -> Self {
        Self {
            id,
            surface,
            title: title.to_string(),
            tracked,
            uri: String::new(),
            loading: false,
            zoom_level: 1.0,
        }
    }
}
