//! The 256-color terminal palette.
//!
//! The 256-color palette is organized as:
//! - 0-15: ANSI colors, built from the index bits
//! - 16-231: 6x6x6 color cube
//! - 232-255: 24-step grayscale
//!
//! Any entry can be replaced from the `[colors]` section with `color<N>`.

use settings::{CoercionError, ConfigDocument, ConfigIssue};

use crate::color::Rgba;

pub const PALETTE_SIZE: usize = 256;

/// Key file section holding color settings.
pub const COLORS_SECTION: &str = "colors";

/// Channel intensity contributed by a set ANSI bit.
const ANSI_LEVEL: u16 = 0xC000;
/// Extra intensity added to every channel of the bright half (8-15).
const ANSI_BRIGHT_BOOST: u16 = 0x3FFF;

/// Compute the standard color for `index`.
pub fn standard_color(index: u8) -> Rgba {
    match index {
        0..=15 => {
            let level = |bit: u8| if index & bit != 0 { ANSI_LEVEL } else { 0 };
            let boost = if index > 7 { ANSI_BRIGHT_BOOST } else { 0 };
            Rgba::from_rgb16(level(1) + boost, level(2) + boost, level(4) + boost)
        }
        16..=231 => {
            let j = index - 16;
            let level = |c: u8| if c == 0 { 0 } else { c * 40 + 55 };
            Rgba::from_rgb8(level(j / 36), level((j / 6) % 6), level(j % 6))
        }
        232..=255 => {
            let gray = 8 + (index - 232) * 10;
            Rgba::from_rgb8(gray, gray, gray)
        }
    }
}

/// The canonical 256-entry table, no configuration applied.
pub fn standard_palette() -> [Rgba; PALETTE_SIZE] {
    std::array::from_fn(|i| standard_color(i as u8))
}

/// Key for palette entry `index`, e.g. `color5`.
pub fn color_key(index: usize) -> String {
    format!("color{}", index)
}

/// Colors used when the key file does not set them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteDefaults {
    pub foreground: Rgba,
    pub background: Rgba,
    pub cursor: Rgba,
}

impl Default for PaletteDefaults {
    fn default() -> Self {
        Self {
            foreground: Rgba::from_rgb8(178, 178, 178),
            // Slightly translucent
            background: Rgba::BLACK.with_alpha(0.8),
            cursor: Rgba::from_rgb8(255, 175, 0),
        }
    }
}

/// Everything the terminal needs to draw colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub foreground: Rgba,
    pub background: Rgba,
    pub cursor: Rgba,
    pub entries: [Rgba; PALETTE_SIZE],
}

impl Palette {
    /// Standard entries with the defaults for the special colors.
    pub fn standard(defaults: &PaletteDefaults) -> Self {
        Self {
            foreground: defaults.foreground,
            background: defaults.background,
            cursor: defaults.cursor,
            entries: standard_palette(),
        }
    }

    /// Standard palette with every override from `document` applied.
    pub fn from_document(document: &ConfigDocument, defaults: &PaletteDefaults) -> PaletteOutcome {
        apply_overrides(standard_palette(), document, defaults)
    }

    pub fn get(&self, index: u8) -> Rgba {
        self.entries[index as usize]
    }
}

/// Result of building a palette from a document.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteOutcome {
    pub palette: Palette,
    /// Values that were present but not parseable as colors.
    pub issues: Vec<ConfigIssue>,
    /// Number of `color<N>` entries that replaced a computed value.
    pub overridden: usize,
}

/// Receiver of a whole new palette. The swap is one call, never piecemeal.
pub trait PaletteSink {
    fn set_palette(&mut self, palette: Palette);
}

/// Apply `color<N>`, `foreground`, `background` and `cursor` from the
/// `[colors]` section on top of `entries`.
pub fn apply_overrides(
    mut entries: [Rgba; PALETTE_SIZE],
    document: &ConfigDocument,
    defaults: &PaletteDefaults,
) -> PaletteOutcome {
    let mut issues = Vec::new();
    let mut overridden = 0;

    for (index, entry) in entries.iter_mut().enumerate() {
        let key = color_key(index);
        if let Some(color) = lookup(document, &key, &mut issues) {
            *entry = color;
            overridden += 1;
        }
    }

    let foreground = lookup(document, "foreground", &mut issues).unwrap_or(defaults.foreground);
    let background = lookup(document, "background", &mut issues).unwrap_or(defaults.background);
    let cursor = lookup(document, "cursor", &mut issues).unwrap_or(defaults.cursor);

    PaletteOutcome {
        palette: Palette {
            foreground,
            background,
            cursor,
            entries,
        },
        issues,
        overridden,
    }
}

fn lookup(document: &ConfigDocument, key: &str, issues: &mut Vec<ConfigIssue>) -> Option<Rgba> {
    let raw = document.get(COLORS_SECTION, key)?;
    match Rgba::parse(raw) {
        Some(color) => Some(color),
        None => {
            tracing::warn!("Ignoring {}.{} = '{}': not a color", COLORS_SECTION, key, raw);
            issues.push(ConfigIssue::Coercion {
                property: key.to_string(),
                value: raw.to_string(),
                reason: CoercionError::NotAColor,
            });
            None
        }
    }
}
