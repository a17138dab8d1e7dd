// office-shell platform paths for Linux
// Config: $XDG_CONFIG_HOME/office-shell or ~/.config/office-shell
// Data:   $XDG_DATA_HOME/office-shell   or ~/.local/share/office-shell
//
// Inside a Flatpak sandbox the XDG variables point at ~/.var/app/<id>/...

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "office-shell";

/// Joins the app directory onto the XDG base directory, falling back to
/// `$HOME/<fallback>` when the variable is unset or empty.
fn resolve(xdg: Option<String>, home: Option<String>, fallback: &[&str]) -> PathBuf {
    match xdg.filter(|v| !v.is_empty()) {
        Some(base) => PathBuf::from(base).join(APP_DIR),
        None => {
            let mut path = PathBuf::from(home.unwrap_or_else(|| String::from("/tmp")));
            path.extend(fallback);
            path.join(APP_DIR)
        }
    }
}

fn from_env(var: &str, fallback: &[&str]) -> PathBuf {
    resolve(env::var(var).ok(), env::var("HOME").ok(), fallback)
}

pub fn get_config_dir() -> PathBuf {
    from_env("XDG_CONFIG_HOME", &[".config"])
}

pub fn get_data_dir() -> PathBuf {
    from_env("XDG_DATA_HOME", &[".local", "share"])
}
