//! Built-in defaults for BTerm.
//!
//! Anything the key file leaves out falls back to these values.
//! They are organized by the section of the key file that overrides them.

/// Font defaults (`[fonts]`).
pub mod fonts {
    /// Default font description.
    pub const FONT: &str = "Menlo Regular 11px";
    /// Default font scale.
    pub const DEFAULT_SCALE: f64 = 1.0;
    /// Smallest font scale the terminal accepts.
    pub const MIN_SCALE: f64 = 0.1;
    /// Largest font scale the terminal accepts.
    pub const MAX_SCALE: f64 = 2.0;
    /// Step used by zoom in / zoom out.
    pub const SCALE_STEP: f64 = 0.05;
}

/// Behaviour defaults (`[general]`).
pub mod general {
    pub const ALLOW_BOLD: bool = false;
    pub const AUDIBLE_BELL: bool = true;
    /// Default scrollback buffer size in lines.
    pub const SCROLLBACK_LINES: u32 = 512;
    pub const SCROLL_ON_KEYSTROKE: bool = true;
    pub const SCROLL_ON_OUTPUT: bool = false;
    pub const POINTER_AUTOHIDE: bool = false;
}

/// Key file validation limits and watching.
pub mod settings {
    use std::time::Duration;

    /// Maximum key file size in bytes (64 KB).
    /// Key files should be tiny; anything larger is suspicious.
    pub const MAX_FILE_SIZE: u64 = 64 * 1024;

    /// Quiet period before a burst of writes counts as settled.
    pub const WATCH_DEBOUNCE: Duration = Duration::from_millis(100);
}
