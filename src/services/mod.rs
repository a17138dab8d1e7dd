// office-shell services
// Services hold configuration and resources around the shell: settings,
// theming and the persisted cookie store.

pub mod cookie_store;
pub mod settings_engine;
pub mod theme_engine;
