// office-shell state managers
// Managers hold in-memory state: open tabs and keyboard shortcuts.

pub mod shortcut_manager;
pub mod tab_manager;
