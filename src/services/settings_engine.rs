// office-shell Settings Engine
// Loads, saves, updates and resets the user's settings.
// Settings live as pretty-printed JSON in the per-user config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::types::errors::SettingsError;
use crate::types::settings::ShellSettings;

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ShellSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &ShellSettings;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &Path;
}

/// Settings engine that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: PathBuf,
    settings: ShellSettings,
}

impl SettingsEngine {
    /// Creates an engine for `<config_dir>/settings.json`.
    pub fn in_dir(config_dir: &Path) -> Self {
        Self::at(config_dir.join(SETTINGS_FILE_NAME))
    }

    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: ShellSettings::default(),
        }
    }
}

/// Replaces the value at a dotted path (`zoom.step`) inside a JSON object.
/// Only existing keys can be replaced; new keys are rejected.
fn set_dotted(root: &mut Value, key: &str, value: Value) -> Result<(), SettingsError> {
    let (parents, last) = match key.rsplit_once('.') {
        Some((parents, last)) => (Some(parents), last),
        None => (None, key),
    };

    let mut current = root;
    if let Some(parents) = parents {
        for part in parents.split('.') {
            current = current
                .get_mut(part)
                .ok_or_else(|| SettingsError::InvalidKey(format!("Key '{}' not found in settings", key)))?;
        }
    }

    match current {
        Value::Object(map) if map.contains_key(last) => {
            map.insert(last.to_string(), value);
            Ok(())
        }
        Value::Object(_) => Err(SettingsError::InvalidKey(format!(
            "Key '{}' not found in settings",
            key
        ))),
        _ => Err(SettingsError::InvalidKey(format!(
            "Cannot navigate to key '{}': intermediate value is not an object",
            key
        ))),
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Loads settings from disk. A missing file yields defaults; a malformed
    /// one is an error.
    fn load(&mut self) -> Result<ShellSettings, SettingsError> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "no settings file, using defaults");
            self.settings = ShellSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(&self.config_path)
            .map_err(|e| SettingsError::IoError(format!("Failed to read config file: {}", e)))?;

        self.settings = serde_json::from_str(&content).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Ok(self.settings.clone())
    }

    /// Writes the current settings, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SettingsError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;

        fs::write(&self.config_path, json)
            .map_err(|e| SettingsError::IoError(format!("Failed to write config file: {}", e)))
    }

    fn get_settings(&self) -> &ShellSettings {
        &self.settings
    }

    /// Updates one setting by dotted key (`window.width`, `appearance.theme`)
    /// and persists the result. The value is validated by deserializing the
    /// whole settings tree.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        set_dotted(&mut json_value, key, value)?;

        self.settings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;

        self.save()
    }

    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = ShellSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }
}
