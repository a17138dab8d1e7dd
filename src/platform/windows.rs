// office-shell platform paths for Windows
// Config and data: %APPDATA%/OfficeShell

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "OfficeShell";

fn roaming() -> PathBuf {
    PathBuf::from(
        env::var("APPDATA")
            .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming")),
    )
}

pub fn get_config_dir() -> PathBuf {
    roaming().join(APP_DIR)
}

pub fn get_data_dir() -> PathBuf {
    roaming().join(APP_DIR)
}
