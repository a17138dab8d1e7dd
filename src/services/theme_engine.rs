//! Theme Engine: light and dark palettes, the accent color and the header
//! stylesheet.

use std::collections::BTreeMap;

use crate::types::errors::ThemeError;
use crate::types::settings::ThemeMode;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn set_theme(&mut self, mode: ThemeMode);
    fn get_theme(&self) -> &ThemeMode;
    fn set_accent_color(&mut self, color: &str) -> Result<(), ThemeError>;
    fn get_accent_color(&self) -> &str;
    fn detect_system_theme(&self) -> ThemeMode;
    fn get_css_variables(&self) -> BTreeMap<String, String>;
    fn stylesheet(&self) -> String;
}

struct Palette {
    headerbar_bg: &'static str,
    headerbar_fg: &'static str,
    window_fg: &'static str,
    borders: &'static str,
    error: &'static str,
    accent_fg: &'static str,
}

const LIGHT: Palette = Palette {
    headerbar_bg: "#ebebeb",
    headerbar_fg: "#2e2e2e",
    window_fg: "#1e1e1e",
    borders: "#d5d0cc",
    error: "#c01c28",
    accent_fg: "#ffffff",
};

const DARK: Palette = Palette {
    headerbar_bg: "#303030",
    headerbar_fg: "#ffffff",
    window_fg: "#ffffff",
    borders: "#1f1f1f",
    error: "#ff7b63",
    accent_fg: "#ffffff",
};

/// Switcher button states and the close button. Colors come from the
/// variables emitted ahead of these rules.
const HEADER_RULES: &str = r#"
button.app-active {
  background-color: var(--accent-bg);
  color: var(--accent-fg);
  border-radius: 6px;
  box-shadow: none;
}
button.app-active:hover {
  background-color: color-mix(in srgb, var(--accent-bg) 88%, white);
}
button.app-open {
  background-color: color-mix(in srgb, var(--accent-bg) 18%, transparent);
  color: var(--accent-bg);
  border-radius: 6px;
  box-shadow: inset 0 -2px 0 0 var(--accent-bg);
}
button.app-open:hover {
  background-color: color-mix(in srgb, var(--accent-bg) 30%, transparent);
}
button.app-inactive {
  background: none;
  box-shadow: none;
  color: var(--headerbar-fg);
}
button.app-inactive:hover {
  background-color: color-mix(in srgb, var(--headerbar-fg) 10%, transparent);
  border-radius: 6px;
}
button.close-tab-btn {
  background-color: color-mix(in srgb, var(--headerbar-fg) 12%, transparent);
  color: var(--headerbar-fg);
  border-radius: 6px;
  padding: 4px 12px;
  box-shadow: none;
}
button.close-tab-btn:hover {
  background-color: color-mix(in srgb, var(--error-color) 18%, transparent);
  color: var(--error-color);
}
button.close-tab-btn:active {
  background-color: color-mix(in srgb, var(--error-color) 30%, transparent);
  color: var(--error-color);
}
"#;

/// Validates a hex color string (e.g. "#3584e4" or "#fff").
fn is_valid_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

pub struct ThemeEngine {
    current_theme: ThemeMode,
    accent_color: String,
}

impl ThemeEngine {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            current_theme: mode,
            accent_color: "#3584e4".to_string(),
        }
    }

    fn palette(&self) -> &'static Palette {
        let mode = match &self.current_theme {
            ThemeMode::System => self.detect_system_theme(),
            other => other.clone(),
        };
        match mode {
            ThemeMode::Dark => &DARK,
            _ => &LIGHT,
        }
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn set_theme(&mut self, mode: ThemeMode) {
        self.current_theme = mode;
    }

    fn get_theme(&self) -> &ThemeMode {
        &self.current_theme
    }

    fn set_accent_color(&mut self, color: &str) -> Result<(), ThemeError> {
        if !is_valid_hex_color(color) {
            return Err(ThemeError::InvalidColor(color.to_string()));
        }
        self.accent_color = color.to_string();
        Ok(())
    }

    fn get_accent_color(&self) -> &str {
        &self.accent_color
    }

    /// Follows `GTK_THEME` when set (e.g. `Adwaita:dark`), light otherwise.
    fn detect_system_theme(&self) -> ThemeMode {
        match std::env::var("GTK_THEME") {
            Ok(theme) if theme.to_lowercase().contains("dark") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    fn get_css_variables(&self) -> BTreeMap<String, String> {
        let palette = self.palette();
        let mut vars = BTreeMap::new();
        vars.insert("--headerbar-bg".into(), palette.headerbar_bg.into());
        vars.insert("--headerbar-fg".into(), palette.headerbar_fg.into());
        vars.insert("--window-fg".into(), palette.window_fg.into());
        vars.insert("--borders".into(), palette.borders.into());
        vars.insert("--error-color".into(), palette.error.into());
        vars.insert("--accent-bg".into(), self.accent_color.clone());
        vars.insert("--accent-fg".into(), palette.accent_fg.into());
        vars.insert(
            "--font-family".into(),
            "Cantarell, 'Segoe UI', -apple-system, Helvetica, Arial, sans-serif".into(),
        );
        vars
    }

    fn stylesheet(&self) -> String {
        let mut css = String::from(":root{");
        for (name, value) in self.get_css_variables() {
            css.push_str(&name);
            css.push(':');
            css.push_str(&value);
            css.push(';');
        }
        css.push('}');
        css.push_str(HEADER_RULES);
        css
    }
}
