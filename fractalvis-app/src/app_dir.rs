//! Files the viewer keeps beside its binary: `preferences.json` and the
//! default `images/` screenshot folder.

use std::path::PathBuf;

const PREFERENCES_FILE: &str = "preferences.json";
const SCREENSHOT_DIR: &str = "images";

fn install_dir() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.to_path_buf(),
            None => PathBuf::from("."),
        },
        Err(_) => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Where [`AppPreferences`](crate::preferences::AppPreferences) is loaded from and saved to.
pub fn preferences_file() -> PathBuf {
    install_dir().join(PREFERENCES_FILE)
}

/// Screenshot folder used when the preference is left empty.
pub fn default_screenshot_dir() -> PathBuf {
    install_dir().join(SCREENSHOT_DIR)
}
