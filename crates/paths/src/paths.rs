//! Path management for BTerm.
//!
//! The config directory is lazily resolved and cached. Call `set_config_dir`
//! before the first access to point it somewhere else (tests, portable setups).

use std::path::PathBuf;
use std::sync::OnceLock;

static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Directory name under the platform config directory.
pub const APP_DIR_NAME: &str = "bterm";

/// Name of the key file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "btermrc";

/// ~/.config/bterm (or platform equivalent)
pub fn config_dir() -> &'static PathBuf {
    CONFIG_DIR.get_or_init(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
    })
}

/// Override config dir (must be called before first access).
pub fn set_config_dir(path: PathBuf) {
    let _ = CONFIG_DIR.set(path);
}

/// Config file path: config_dir()/btermrc
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}
