//! Property tests for settings persistence.
//!
//! Any settings value written by the engine loads back unchanged.

use std::collections::HashMap;

use office_shell::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use office_shell::types::office_app::OfficeApp;
use office_shell::types::settings::{
    AppearanceSettings, BrowserSettings, ShellSettings, ThemeMode, WindowSettings, ZoomSettings,
};
use proptest::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn arb_theme() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![
        Just(ThemeMode::Light),
        Just(ThemeMode::Dark),
        Just(ThemeMode::System),
    ]
}

fn arb_settings() -> impl Strategy<Value = ShellSettings> {
    (
        "[A-Za-z ]{1,24}",
        200u32..4000,
        200u32..3000,
        any::<bool>(),
        any::<bool>(),
        arb_theme(),
        "#[0-9a-f]{6}",
        prop::sample::select(OfficeApp::ALL.to_vec()),
        prop::collection::hash_map("[a-z_]{1,12}", "Ctrl\\+[A-Z]", 0..4),
    )
        .prop_map(
            |(title, width, height, devtools, autoplay, theme, accent, startup_app, shortcuts)| {
                ShellSettings {
                    window: WindowSettings {
                        title,
                        width,
                        height,
                    },
                    browser: BrowserSettings {
                        devtools,
                        autoplay,
                        ..BrowserSettings::default()
                    },
                    zoom: ZoomSettings::default(),
                    appearance: AppearanceSettings {
                        theme,
                        accent_color: accent,
                    },
                    startup_app,
                    shortcuts: shortcuts.into_iter().collect::<HashMap<_, _>>(),
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn settings_survive_json_round_trip(settings in arb_settings()) {
        let json = serde_json::to_string(&settings).unwrap();
        let back: ShellSettings = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, settings);
    }

    #[test]
    fn set_value_survives_reload(width in 200u32..4000, theme in arb_theme()) {
        let dir = TempDir::new().unwrap();
        let mut engine = SettingsEngine::in_dir(dir.path());
        engine.set_value("window.width", json!(width)).unwrap();
        engine
            .set_value("appearance.theme", serde_json::to_value(&theme).unwrap())
            .unwrap();

        let mut reloaded = SettingsEngine::in_dir(dir.path());
        let settings = reloaded.load().unwrap();
        prop_assert_eq!(settings.window.width, width);
        prop_assert_eq!(settings.appearance.theme, theme);
    }
}
