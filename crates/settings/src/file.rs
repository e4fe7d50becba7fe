//! The btermrc file on disk.
//!
//! Config location: `~/.config/bterm/btermrc`

use std::path::{Path, PathBuf};

/// Default key file content with comments (generated on first launch).
/// Every setting is commented out so the built-in defaults stay in charge.
pub const DEFAULT_CONFIG: &str = r#"# BTerm configuration
# Changes are applied live, just save this file.

[colors]
# Accepts #rrggbb, rgb(r, g, b) and rgba(r, g, b, a)
# foreground = rgb(178, 178, 178)
# background = rgba(0, 0, 0, 0.8)
# cursor = rgb(255, 175, 0)
# Override any of the 256 palette entries
# color0 = #000000
# color9 = #ff5555

[fonts]
# font = Menlo Regular 11px
# scale = 1.0

[general]
# allow_bold = false
# audible_bell = true
# scrollback_lines = 512
# scroll_on_keystroke = true
# scroll_on_output = false
# pointer_autohide = false

[cursor]
# block, ibeam or underline
# shape = block
# system, on or off
# blink_mode = off
"#;

/// Return the config file path.
pub fn config_path() -> PathBuf {
    bterm_paths::config_file()
}

/// Ensure a key file exists at `path`, creating a commented default if missing.
pub fn ensure_config_file(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG)?;
    tracing::info!("Created default config at {:?}", path);
    Ok(())
}
