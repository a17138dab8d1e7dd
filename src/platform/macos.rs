// office-shell platform paths for macOS
// Config and data: ~/Library/Application Support/OfficeShell

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "OfficeShell";

fn library_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp"))).join("Library")
}

pub fn get_config_dir() -> PathBuf {
    library_dir().join("Application Support").join(APP_DIR)
}

pub fn get_data_dir() -> PathBuf {
    library_dir().join("Application Support").join(APP_DIR)
}
