use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::office_app::OfficeApp;

/// User agent presented to the Office sites. They gate features on a
/// Chromium-class desktop browser.
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) \
AppleWebKit/537.36 (KHTML, like Gecko) \
Chrome/130.0.0.0 Safari/537.36";

/// Top-level settings container, persisted as `settings.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ShellSettings {
    pub window: WindowSettings,
    pub browser: BrowserSettings,
    pub zoom: ZoomSettings,
    pub appearance: AppearanceSettings,
    /// App opened in the first tab.
    pub startup_app: OfficeApp,
    /// Action name to key chord, layered over the default bindings.
    pub shortcuts: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Microsoft Office Online".to_string(),
            width: 1280,
            height: 900,
        }
    }
}

/// Options applied to every rendering surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrowserSettings {
    pub user_agent: String,
    pub devtools: bool,
    /// Media playback without a user gesture.
    pub autoplay: bool,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            user_agent: USER_AGENT.to_string(),
            devtools: cfg!(debug_assertions),
            autoplay: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomSettings {
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub default_level: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            step: 0.1,
            min: 0.25,
            max: 4.0,
            default_level: 1.0,
        }
    }
}

impl ZoomSettings {
    pub fn zoom_in(&self, level: f64) -> f64 {
        self.clamp(level + self.step)
    }

    pub fn zoom_out(&self, level: f64) -> f64 {
        self.clamp(level - self.step)
    }

    /// Clamps to `[min, max]`, rounded to hundredths so repeated steps don't drift.
    pub fn clamp(&self, level: f64) -> f64 {
        let rounded = (level * 100.0).round() / 100.0;
        rounded.max(self.min).min(self.max)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppearanceSettings {
    pub theme: ThemeMode,
    pub accent_color: String,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::System,
            accent_color: "#3584e4".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum ThemeMode {
    Light,
    Dark,
    System,
}
