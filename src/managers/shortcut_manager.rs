//! Shortcut Manager for office-shell.
//!
//! Maps key chords to shell actions, with conflict detection and user
//! overrides layered over the default bindings.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::errors::ShortcutError;

/// Something a key chord can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Action {
    ZoomIn,
    ZoomOut,
    ZoomReset,
    NewTab,
    CloseTab,
    Reload,
    HardReload,
    Back,
    Forward,
    ClearBrowsingData,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::ZoomIn,
        Action::ZoomOut,
        Action::ZoomReset,
        Action::NewTab,
        Action::CloseTab,
        Action::Reload,
        Action::HardReload,
        Action::Back,
        Action::Forward,
        Action::ClearBrowsingData,
    ];

    /// Name used in the `shortcuts` section of the settings file.
    pub fn name(self) -> &'static str {
        match self {
            Action::ZoomIn => "zoom_in",
            Action::ZoomOut => "zoom_out",
            Action::ZoomReset => "zoom_reset",
            Action::NewTab => "new_tab",
            Action::CloseTab => "close_tab",
            Action::Reload => "reload",
            Action::HardReload => "hard_reload",
            Action::Back => "back",
            Action::Forward => "forward",
            Action::ClearBrowsingData => "clear_data",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }
}

/// A normalized key combination such as `Ctrl+Shift+Delete`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub key: String,
}

impl KeyChord {
    /// Parses `Ctrl+Plus`, `F5`, `Alt+Left`. `Cmd` and `Control` count as Ctrl.
    pub fn parse(keys: &str) -> Result<Self, ShortcutError> {
        let parts: Vec<&str> = keys.split('+').map(str::trim).collect();
        let (key, modifiers) = match parts.split_last() {
            Some((key, modifiers)) if !key.is_empty() => (*key, modifiers),
            _ => return Err(ShortcutError::InvalidKeys(keys.to_string())),
        };

        let mut chord = KeyChord {
            ctrl: false,
            shift: false,
            alt: false,
            key: normalize_key(key),
        };
        for modifier in modifiers {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "cmd" => chord.ctrl = true,
                "shift" => chord.shift = true,
                "alt" => chord.alt = true,
                _ => return Err(ShortcutError::InvalidKeys(keys.to_string())),
            }
        }
        Ok(chord)
    }

    /// Builds a chord from a DOM `KeyboardEvent.key` and its modifier flags.
    pub fn from_key_event(key: &str, ctrl: bool, shift: bool, alt: bool) -> Self {
        Self {
            ctrl,
            shift,
            alt,
            key: normalize_key(key),
        }
    }

    pub fn without_shift(&self) -> Self {
        Self {
            shift: false,
            ..self.clone()
        }
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        f.write_str(&self.key)
    }
}

/// Maps DOM key names and symbol keys onto the names used in bindings.
fn normalize_key(key: &str) -> String {
    match key {
        "+" => "Plus".to_string(),
        "=" => "Equal".to_string(),
        "-" => "Minus".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        k if k.chars().count() == 1 => k.to_uppercase(),
        k => {
            let mut chars = k.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

/// Trait defining shortcut management operations.
pub trait ShortcutManagerTrait {
    fn register_shortcut(&mut self, action: Action, keys: &str) -> Result<(), ShortcutError>;
    fn unregister_shortcut(&mut self, keys: &str) -> Result<(), ShortcutError>;
    fn resolve(&self, chord: &KeyChord) -> Option<Action>;
    fn has_conflict(&self, chord: &KeyChord, exclude_action: Option<Action>) -> Option<Action>;
    fn list_shortcuts(&self) -> Vec<(String, Action)>;
    fn reset_to_defaults(&mut self);
    fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<ShortcutError>;
}

#[derive(Debug, Clone)]
pub struct ShortcutManager {
    bindings: HashMap<KeyChord, Action>,
}

impl ShortcutManager {
    pub fn new() -> Self {
        let mut mgr = Self {
            bindings: HashMap::new(),
        };
        mgr.reset_to_defaults();
        mgr
    }

    pub fn default_shortcuts() -> Vec<(Action, &'static str)> {
        vec![
            (Action::ZoomIn, "Ctrl+Plus"),
            (Action::ZoomIn, "Ctrl+Equal"),
            (Action::ZoomOut, "Ctrl+Minus"),
            (Action::ZoomReset, "Ctrl+0"),
            (Action::NewTab, "Ctrl+T"),
            (Action::CloseTab, "Ctrl+W"),
            (Action::Reload, "Ctrl+R"),
            (Action::Reload, "F5"),
            (Action::HardReload, "Ctrl+F5"),
            (Action::Back, "Alt+Left"),
            (Action::Forward, "Alt+Right"),
            (Action::ClearBrowsingData, "Ctrl+Shift+Delete"),
        ]
    }

    /// Chord strings the page-side key forwarder should intercept.
    pub fn bound_chords(&self) -> Vec<String> {
        let mut chords: Vec<String> = self.bindings.keys().map(|c| c.to_string()).collect();
        chords.sort();
        chords
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutManagerTrait for ShortcutManager {
    fn register_shortcut(&mut self, action: Action, keys: &str) -> Result<(), ShortcutError> {
        let chord = KeyChord::parse(keys)?;
        if let Some(conflicting) = self.has_conflict(&chord, Some(action)) {
            return Err(ShortcutError::Conflict(format!(
                "'{}' is already bound to '{}'",
                chord,
                conflicting.name()
            )));
        }
        self.bindings.insert(chord, action);
        Ok(())
    }

    fn unregister_shortcut(&mut self, keys: &str) -> Result<(), ShortcutError> {
        let chord = KeyChord::parse(keys)?;
        self.bindings
            .remove(&chord)
            .map(|_| ())
            .ok_or_else(|| ShortcutError::NotFound(chord.to_string()))
    }

    /// Exact match first; a chord with Shift held falls back to its
    /// Shift-less binding, since Shift changes the key on some layouts.
    fn resolve(&self, chord: &KeyChord) -> Option<Action> {
        if let Some(action) = self.bindings.get(chord) {
            return Some(*action);
        }
        if chord.shift {
            return self.bindings.get(&chord.without_shift()).copied();
        }
        None
    }

    fn has_conflict(&self, chord: &KeyChord, exclude_action: Option<Action>) -> Option<Action> {
        match self.bindings.get(chord) {
            Some(action) if Some(*action) != exclude_action => Some(*action),
            _ => None,
        }
    }

    fn list_shortcuts(&self) -> Vec<(String, Action)> {
        let mut list: Vec<(String, Action)> = self
            .bindings
            .iter()
            .map(|(chord, action)| (chord.to_string(), *action))
            .collect();
        list.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        list
    }

    fn reset_to_defaults(&mut self) {
        self.bindings.clear();
        for (action, keys) in Self::default_shortcuts() {
            if let Ok(chord) = KeyChord::parse(keys) {
                self.bindings.insert(chord, action);
            }
        }
    }

    /// Rebinds each named action to the given chord, dropping its default
    /// chords. Bad entries are skipped and returned.
    fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<ShortcutError> {
        let mut errors = Vec::new();
        let mut entries: Vec<(&String, &String)> = overrides.iter().collect();
        entries.sort();

        for (name, keys) in entries {
            let Some(action) = Action::from_name(name) else {
                errors.push(ShortcutError::NotFound(name.clone()));
                continue;
            };
            let previous: Vec<KeyChord> = self
                .bindings
                .iter()
                .filter(|(_, a)| **a == action)
                .map(|(c, _)| c.clone())
                .collect();
            for chord in &previous {
                self.bindings.remove(chord);
            }
            if let Err(err) = self.register_shortcut(action, keys) {
                for chord in previous {
                    self.bindings.insert(chord, action);
                }
                errors.push(err);
            }
        }
        errors
    }
}
