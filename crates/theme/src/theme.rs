//! Colors for BTerm.
//!
//! # Modules
//!
//! - `color` - RGBA values and the textual color syntaxes
//! - `palette` - The 256-color table and `[colors]` overrides

mod color;
mod palette;

// Re-export public API
pub use color::{ParseColorError, Rgba};
pub use palette::{
    apply_overrides, color_key, standard_color, standard_palette, Palette, PaletteDefaults,
    PaletteOutcome, PaletteSink, COLORS_SECTION, PALETTE_SIZE,
};
