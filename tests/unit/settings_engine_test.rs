//! Settings engine against a real file in a temp directory.

use std::fs;

use office_shell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use office_shell::types::errors::SettingsError;
use office_shell::types::office_app::OfficeApp;
use office_shell::types::settings::{ShellSettings, ThemeMode};
use serde_json::json;
use tempfile::TempDir;

fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    SettingsEngine::in_dir(dir.path())
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    assert_eq!(engine.load().unwrap(), ShellSettings::default());
    assert!(!engine.get_config_path().exists(), "load must not create the file");
}

#[test]
fn test_set_value_persists_immediately() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine.set_value("startup_app", json!("Excel")).unwrap();
    engine.set_value("window.width", json!(1600)).unwrap();

    let mut reloaded = engine_in_temp(&dir);
    let settings = reloaded.load().unwrap();
    assert_eq!(settings.startup_app, OfficeApp::Excel);
    assert_eq!(settings.window.width, 1600);
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.set_value("window.depth", json!(3)),
        Err(SettingsError::InvalidKey(_))
    ));
    assert!(matches!(
        engine.set_value("", json!(3)),
        Err(SettingsError::InvalidKey(_))
    ));
}

#[test]
fn test_set_value_rejects_wrong_type_and_keeps_old_value() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    assert!(matches!(
        engine.set_value("appearance.theme", json!("Sepia")),
        Err(SettingsError::InvalidValue(_))
    ));
    assert_eq!(engine.get_settings().appearance.theme, ThemeMode::System);
}

#[test]
fn test_shortcut_overrides_can_be_set() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    engine
        .set_value("shortcuts", json!({"new_tab": "Ctrl+N"}))
        .unwrap();
    assert_eq!(
        engine.get_settings().shortcuts.get("new_tab").map(String::as_str),
        Some("Ctrl+N")
    );
}

#[test]
fn test_reset_restores_defaults_on_disk() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.set_value("zoom.step", json!(0.25)).unwrap();

    engine.reset().unwrap();

    let mut reloaded = engine_in_temp(&dir);
    assert_eq!(reloaded.load().unwrap(), ShellSettings::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"appearance": {"theme": "Dark"}}"#,
    )
    .unwrap();

    let settings = engine_in_temp(&dir).load().unwrap();
    assert_eq!(settings.appearance.theme, ThemeMode::Dark);
    assert_eq!(settings.appearance.accent_color, "#3584e4");
    assert_eq!(settings.window, ShellSettings::default().window);
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

    assert!(matches!(
        engine_in_temp(&dir).load(),
        Err(SettingsError::SerializationError(_))
    ));
}

#[test]
fn test_save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("a").join("b");
    let engine = SettingsEngine::in_dir(&nested);

    engine.save().unwrap();
    assert!(nested.join("settings.json").exists());
}
