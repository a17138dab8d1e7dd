//! App core for office-shell.
//!
//! Holds the services that live for the whole process and runs the startup
//! sequence before any window exists.

use tracing::{info, warn};

use crate::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};
use crate::platform::{self, AppPaths};
use crate::services::cookie_store::CookieStore;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::types::errors::AppError;
use crate::types::settings::{ShellSettings, ThemeMode};

pub struct App {
    pub paths: AppPaths,
    pub settings_engine: SettingsEngine,
    pub theme_engine: ThemeEngine,
    pub shortcut_manager: ShortcutManager,
    pub cookie_store: CookieStore,
}

impl App {
    pub fn new(paths: AppPaths) -> Self {
        Self {
            settings_engine: SettingsEngine::in_dir(&paths.config_dir),
            theme_engine: ThemeEngine::new(ThemeMode::System),
            shortcut_manager: ShortcutManager::new(),
            cookie_store: CookieStore::in_dir(&paths.data_dir),
            paths,
        }
    }

    pub fn from_platform() -> Self {
        Self::new(AppPaths::from_platform())
    }

    /// Creates the per-user directories, loads settings and applies them.
    ///
    /// Only a directory that cannot be created is fatal. A broken settings
    /// file, a bad accent colour or a bad shortcut override is logged and
    /// replaced by its default.
    pub fn startup(&mut self) -> Result<(), AppError> {
        self.paths.ensure()?;
        info!(
            data = %self.paths.data_dir.display(),
            config = %self.paths.config_dir.display(),
            sandboxed = platform::is_sandboxed(),
            "using per-user directories"
        );

        let settings = match self.settings_engine.load() {
            Ok(settings) => settings,
            Err(err) => {
                warn!(error = %err, "failed to load settings, using defaults");
                ShellSettings::default()
            }
        };

        self.theme_engine.set_theme(settings.appearance.theme.clone());
        if let Err(err) = self
            .theme_engine
            .set_accent_color(&settings.appearance.accent_color)
        {
            warn!(error = %err, "ignoring accent colour");
        }

        for err in self.shortcut_manager.apply_overrides(&settings.shortcuts) {
            warn!(error = %err, "ignoring shortcut override");
        }

        match self.cookie_store.summary() {
            Ok(summary) => info!(
                cookies = summary.total,
                hosts = summary.hosts,
                signed_in = summary.has_sign_in_session(),
                "cookie store"
            ),
            Err(err) => warn!(
                path = %self.cookie_store.path().display(),
                error = %err,
                "could not read cookie store"
            ),
        }
        Ok(())
    }

    pub fn settings(&self) -> &ShellSettings {
        self.settings_engine.get_settings()
    }

    pub fn chrome_stylesheet(&self) -> String {
        self.theme_engine.stylesheet()
    }
}
