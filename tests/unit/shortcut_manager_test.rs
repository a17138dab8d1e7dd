use std::collections::HashMap;

use office_shell::managers::shortcut_manager::{Action, KeyChord, ShortcutManager, ShortcutManagerTrait};
use office_shell::types::errors::ShortcutError;
use rstest::rstest;

fn resolve(mgr: &ShortcutManager, keys: &str) -> Option<Action> {
    mgr.resolve(&KeyChord::parse(keys).unwrap())
}

#[rstest]
#[case("Ctrl+Plus", Action::ZoomIn)]
#[case("Ctrl+Equal", Action::ZoomIn)]
#[case("Ctrl+Minus", Action::ZoomOut)]
#[case("Ctrl+0", Action::ZoomReset)]
#[case("Ctrl+T", Action::NewTab)]
#[case("Ctrl+W", Action::CloseTab)]
#[case("Ctrl+R", Action::Reload)]
#[case("F5", Action::Reload)]
#[case("Ctrl+F5", Action::HardReload)]
#[case("Alt+Left", Action::Back)]
#[case("Alt+Right", Action::Forward)]
#[case("Ctrl+Shift+Delete", Action::ClearBrowsingData)]
fn test_default_bindings(#[case] keys: &str, #[case] expected: Action) {
    let mgr = ShortcutManager::new();
    assert_eq!(resolve(&mgr, keys), Some(expected));
}

#[test]
fn test_parse_is_case_and_alias_insensitive() {
    let a = KeyChord::parse("control+shift+delete").unwrap();
    let b = KeyChord::parse("Shift+Ctrl+Delete").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "Ctrl+Shift+Delete");
    assert_eq!(KeyChord::parse("Cmd+w").unwrap().to_string(), "Ctrl+W");
}

#[rstest]
#[case("")]
#[case("Ctrl+")]
#[case("Hyper+K")]
fn test_parse_rejects_malformed_chords(#[case] keys: &str) {
    assert!(matches!(
        KeyChord::parse(keys),
        Err(ShortcutError::InvalidKeys(_))
    ));
}

#[test]
fn test_dom_key_names_are_normalized() {
    assert_eq!(KeyChord::from_key_event("+", true, false, false).to_string(), "Ctrl+Plus");
    assert_eq!(KeyChord::from_key_event("ArrowLeft", false, false, true).to_string(), "Alt+Left");
    assert_eq!(KeyChord::from_key_event("t", true, false, false).to_string(), "Ctrl+T");
}

#[test]
fn test_shift_falls_back_to_unshifted_binding() {
    let mgr = ShortcutManager::new();
    assert_eq!(resolve(&mgr, "Ctrl+Shift+Plus"), Some(Action::ZoomIn));
    assert_eq!(resolve(&mgr, "Ctrl+Shift+Q"), None);
    assert_eq!(resolve(&mgr, "Ctrl+Delete"), None, "no fallback the other way");
}

#[test]
fn test_register_conflict_is_rejected() {
    let mut mgr = ShortcutManager::new();
    let err = mgr.register_shortcut(Action::NewTab, "Ctrl+W").unwrap_err();
    assert!(matches!(err, ShortcutError::Conflict(_)));
    assert_eq!(resolve(&mgr, "Ctrl+W"), Some(Action::CloseTab));
}

#[test]
fn test_unregister_unknown_chord() {
    let mut mgr = ShortcutManager::new();
    assert!(matches!(
        mgr.unregister_shortcut("Ctrl+Q"),
        Err(ShortcutError::NotFound(_))
    ));
    mgr.unregister_shortcut("F5").unwrap();
    assert_eq!(resolve(&mgr, "F5"), None);
}

#[test]
fn test_overrides_apply_and_report_errors() {
    let mut mgr = ShortcutManager::new();
    let overrides = HashMap::from([
        ("new_tab".to_string(), "Ctrl+N".to_string()),
        ("teleport".to_string(), "Ctrl+J".to_string()),
        ("reload".to_string(), "Ctrl+W".to_string()),
    ]);

    let errors = mgr.apply_overrides(&overrides);
    assert_eq!(errors.len(), 2);
    assert_eq!(resolve(&mgr, "Ctrl+N"), Some(Action::NewTab));
    assert_eq!(resolve(&mgr, "Ctrl+W"), Some(Action::CloseTab));
}

#[test]
fn test_reset_restores_defaults() {
    let mut mgr = ShortcutManager::new();
    mgr.unregister_shortcut("Ctrl+T").unwrap();
    mgr.register_shortcut(Action::NewTab, "Ctrl+N").unwrap();
    mgr.reset_to_defaults();

    assert_eq!(resolve(&mgr, "Ctrl+T"), Some(Action::NewTab));
    assert_eq!(resolve(&mgr, "Ctrl+N"), None);
    assert_eq!(mgr.list_shortcuts().len(), ShortcutManager::default_shortcuts().len());
}

#[test]
fn test_bound_chords_are_sorted_display_strings() {
    let chords = ShortcutManager::new().bound_chords();
    let mut sorted = chords.clone();
    sorted.sort();
    assert_eq!(chords, sorted);
    assert!(chords.contains(&"Ctrl+Shift+Delete".to_string()));
    assert!(chords.contains(&"F5".to_string()));
}

#[test]
fn test_action_names_round_trip() {
    for action in Action::ALL {
        assert_eq!(Action::from_name(action.name()), Some(action));
    }
}
