// office-shell platform abstraction
// Per-user directories for Linux, macOS and Windows, selected at compile
// time with `cfg(target_os)`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::services::cookie_store::COOKIE_DB_NAME;
use crate::services::settings_engine::SETTINGS_FILE_NAME;
use crate::types::errors::AppError;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as imp;

#[cfg(target_os = "macos")]
use macos as imp;

#[cfg(target_os = "windows")]
use windows as imp;

/// Where the settings file lives.
pub fn get_config_dir() -> PathBuf {
    imp::get_config_dir()
}

/// Where the browser engine keeps cookies and local storage.
pub fn get_data_dir() -> PathBuf {
    imp::get_data_dir()
}

/// True when running inside a Flatpak sandbox.
pub fn is_sandboxed() -> bool {
    std::env::var_os("FLATPAK_ID").is_some_and(|id| !id.is_empty())
}

/// The set of per-user directories the application writes to. The engine's
/// HTTP cache is left to the engine's own default location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

impl AppPaths {
    pub fn from_platform() -> Self {
        Self {
            data_dir: get_data_dir(),
            config_dir: get_config_dir(),
        }
    }

    /// Both directories under one root. Used by tests and portable runs.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            data_dir: root.join("data"),
            config_dir: root.join("config"),
        }
    }

    /// Creates any missing directory.
    pub fn ensure(&self) -> Result<(), AppError> {
        for dir in [&self.data_dir, &self.config_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::Directory {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE_NAME)
    }

    pub fn cookie_db(&self) -> PathBuf {
        self.data_dir.join(COOKIE_DB_NAME)
    }
}
