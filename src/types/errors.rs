use std::path::PathBuf;

use thiserror::Error;

use super::tab::TabId;

// === TabError ===

/// Errors related to tab bookkeeping.
#[derive(Debug, Error)]
pub enum TabError {
    /// No open tab carries the given id. Raised for stale references.
    #[error("Tab not found: {0}")]
    NotFound(TabId),
    /// A tab with the given id is already registered.
    #[error("Tab already exists: {0}")]
    AlreadyExists(TabId),
}

// === SurfaceError ===

/// Errors reported by the rendering backend.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to create rendering surface: {0}")]
    Create(String),
    #[error("Rendering surface operation failed: {0}")]
    Operation(String),
}

// === ShellError ===

/// Errors surfaced by the window controller.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Tab(#[from] TabError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("No tab is selected")]
    NoSelection,
}

// === SettingsError ===

/// Errors related to loading and saving settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    IoError(String),
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

// === ShortcutError ===

/// Errors related to keyboard shortcut bindings.
#[derive(Debug, Error)]
pub enum ShortcutError {
    #[error("Unknown shortcut action: {0}")]
    NotFound(String),
    #[error("Shortcut conflict: {0}")]
    Conflict(String),
    #[error("Invalid shortcut keys: {0}")]
    InvalidKeys(String),
}

// === ThemeError ===

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

// === CookieStoreError ===

/// Errors raised while inspecting the persisted cookie database.
#[derive(Debug, Error)]
pub enum CookieStoreError {
    #[error("Cookie database error: {0}")]
    Database(#[from] rusqlite::Error),
}

// === AppError ===

/// Errors that abort application startup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to create directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
