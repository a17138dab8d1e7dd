use std::fmt;

use serde::{Deserialize, Serialize};

/// The Office web apps reachable from the header switcher, in switcher order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum OfficeApp {
    #[default]
    Office,
    Word,
    Excel,
    PowerPoint,
    OneNote,
    Outlook,
}

impl OfficeApp {
    pub const ALL: [OfficeApp; 6] = [
        OfficeApp::Office,
        OfficeApp::Word,
        OfficeApp::Excel,
        OfficeApp::PowerPoint,
        OfficeApp::OneNote,
        OfficeApp::Outlook,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OfficeApp::Office => "Office",
            OfficeApp::Word => "Word",
            OfficeApp::Excel => "Excel",
            OfficeApp::PowerPoint => "PowerPoint",
            OfficeApp::OneNote => "OneNote",
            OfficeApp::Outlook => "Outlook",
        }
    }

    pub fn launch_url(self) -> &'static str {
        match self {
            OfficeApp::Office => "https://www.office.com",
            OfficeApp::Word => "https://www.office.com/launch/word",
            OfficeApp::Excel => "https://www.office.com/launch/excel",
            OfficeApp::PowerPoint => "https://www.office.com/launch/powerpoint",
            OfficeApp::OneNote => "https://www.office.com/launch/onenote",
            OfficeApp::Outlook => "https://outlook.office.com",
        }
    }

    /// Substrings that identify a page as belonging to this app.
    pub fn url_patterns(self) -> &'static [&'static str] {
        match self {
            OfficeApp::Office => &["office.com"],
            OfficeApp::Word => &["word", "/launch/word"],
            OfficeApp::Excel => &["excel", "/launch/excel"],
            OfficeApp::PowerPoint => &["powerpoint", "/launch/powerpoint"],
            OfficeApp::OneNote => &["onenote", "/launch/onenote"],
            OfficeApp::Outlook => &["outlook.office.com", "outlook.live.com"],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|app| app.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Returns the app a URL belongs to.
    ///
    /// Every launch URL lives under `office.com`, so the generic Office home is
    /// only considered after all the specific apps have failed to match.
    pub fn match_url(url: &str) -> Option<Self> {
        if url.is_empty() {
            return None;
        }
        let lower = url.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .filter(|app| *app != OfficeApp::Office)
            .chain(std::iter::once(OfficeApp::Office))
            .find(|app| app.url_patterns().iter().any(|p| lower.contains(p)))
    }
}

impl fmt::Display for OfficeApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
