//! Shared test utilities for integration tests.
//!
//! Provides an isolated config directory plus fixtures for key file content.

// Not every test binary uses every helper
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use settings::{ConfigDocument, ConfigWatcher, WatchEvent};
use std::sync::mpsc::Sender;

// Re-exports for convenience
pub use tempfile::{tempdir, TempDir};

// ============================================================================
// Test Environment Setup
// ============================================================================

/// Test environment that manages a temporary config directory.
///
/// Automatically cleans up when dropped.
pub struct TestEnv {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Path to the mock `bterm` config directory
    pub config_dir: PathBuf,
    /// Path to the mock key file
    pub config_path: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with isolated paths.
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().join("bterm");
        std::fs::create_dir_all(&config_dir).expect("Failed to create mock config dir");
        let config_path = config_dir.join("btermrc");

        Self {
            temp_dir,
            config_dir,
            config_path,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Overwrite the key file.
    pub fn write_config(&self, content: &str) {
        std::fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// Parse the key file as it is on disk.
    pub fn document(&self) -> ConfigDocument {
        ConfigDocument::load(&self.config_path).expect("Failed to load config")
    }

    /// A watcher on the key file that is fed by hand.
    pub fn watcher(&self) -> (ConfigWatcher, Sender<WatchEvent>) {
        ConfigWatcher::with_channel(&self.config_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub struct Fixtures;

impl Fixtures {
    /// Every general setting flipped from its default.
    pub fn general_flipped() -> &'static str {
        "[general]\n\
         allow_bold = true\n\
         audible_bell = false\n\
         scrollback_lines = 2048\n\
         scroll_on_keystroke = false\n\
         scroll_on_output = true\n\
         pointer_autohide = true\n"
    }

    /// A classic dark scheme expressed as overrides.
    pub fn classic_colors() -> &'static str {
        "[colors]\n\
         foreground = rgb(178, 178, 178)\n\
         background = rgba(0, 0, 0, 0.8)\n\
         cursor = rgb(255, 175, 0)\n\
         color1 = rgb(205, 0, 0)\n\
         color2 = rgb(175, 223, 135)\n\
         color4 = rgb(9, 29, 70)\n\
         color12 = rgb(70, 130, 180)\n"
    }

    /// Cursor and font settings.
    pub fn cursor_and_font() -> &'static str {
        "[cursor]\n\
         shape = ibeam\n\
         blink_mode = on\n\
         [fonts]\n\
         font = Iosevka Term Medium 12px\n\
         scale = 1.5\n"
    }
}
