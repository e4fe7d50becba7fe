//! Configurable terminal state.
//!
//! A headless model of everything the key file can change on a terminal
//! widget, plus the pass that pushes a parsed key file into it.
//! This crate knows nothing about rendering or PTYs.

mod font;
mod model;
pub mod setup;
pub mod types;

pub use font::{FontDescription, FontSize};
pub use model::{registry, Terminal};
pub use setup::{apply_config, ApplyReport, BINDINGS};
pub use types::{CursorBlinkMode, CursorShape};
