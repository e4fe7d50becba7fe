//! The configurable terminal model.

use once_cell::sync::Lazy;
use settings::constants::{fonts, general};
use settings::{Configurable, PropertyDescriptor, PropertyRegistry, Setter};
use theme::{Palette, PaletteDefaults, PaletteSink};

use crate::font::FontDescription;
use crate::types::{CursorBlinkMode, CursorShape};

/// Everything about a terminal widget that the key file controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Terminal {
    allow_bold: bool,
    audible_bell: bool,
    scrollback_lines: u32,
    cursor_shape: CursorShape,
    cursor_blink_mode: CursorBlinkMode,
    scroll_on_keystroke: bool,
    scroll_on_output: bool,
    pointer_autohide: bool,
    font_scale: f64,
    font: FontDescription,
    palette: Palette,
}

impl Default for Terminal {
    fn default() -> Self {
        Self {
            allow_bold: general::ALLOW_BOLD,
            audible_bell: general::AUDIBLE_BELL,
            scrollback_lines: general::SCROLLBACK_LINES,
            cursor_shape: CursorShape::default(),
            cursor_blink_mode: CursorBlinkMode::default(),
            scroll_on_keystroke: general::SCROLL_ON_KEYSTROKE,
            scroll_on_output: general::SCROLL_ON_OUTPUT,
            pointer_autohide: general::POINTER_AUTOHIDE,
            font_scale: fonts::DEFAULT_SCALE,
            font: FontDescription::parse(fonts::FONT),
            palette: Palette::standard(&PaletteDefaults::default()),
        }
    }
}

impl Terminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_bold(&self) -> bool {
        self.allow_bold
    }

    pub fn audible_bell(&self) -> bool {
        self.audible_bell
    }

    pub fn scrollback_lines(&self) -> u32 {
        self.scrollback_lines
    }

    pub fn cursor_shape(&self) -> CursorShape {
        self.cursor_shape
    }

    pub fn cursor_blink_mode(&self) -> CursorBlinkMode {
        self.cursor_blink_mode
    }

    pub fn scroll_on_keystroke(&self) -> bool {
        self.scroll_on_keystroke
    }

    pub fn scroll_on_output(&self) -> bool {
        self.scroll_on_output
    }

    pub fn pointer_autohide(&self) -> bool {
        self.pointer_autohide
    }

    pub fn font_scale(&self) -> f64 {
        self.font_scale
    }

    pub fn font(&self) -> &FontDescription {
        &self.font
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Set the font scale, clamped to `MIN_SCALE..=MAX_SCALE`.
    pub fn set_font_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            tracing::warn!("Ignoring non-finite font scale {}", scale);
            return;
        }
        let clamped = scale.clamp(fonts::MIN_SCALE, fonts::MAX_SCALE);
        if clamped != scale {
            tracing::debug!("Font scale {} clamped to {}", scale, clamped);
        }
        self.font_scale = clamped;
    }

    /// Zoom by `delta` (usually `±SCALE_STEP`). Returns the new scale.
    pub fn adjust_font_scale(&mut self, delta: f64) -> f64 {
        self.set_font_scale(self.font_scale + delta);
        self.font_scale
    }

    /// Replace the font. Descriptions without a family keep the current one.
    pub fn set_font(&mut self, mut font: FontDescription) {
        if !font.has_family() {
            font.family = self.font.family.clone();
        }
        self.font = font;
    }
}

impl PaletteSink for Terminal {
    fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

static TERMINAL_PROPERTIES: &[PropertyDescriptor<Terminal>] = &[
    PropertyDescriptor::new(
        "allow-bold",
        Setter::Bool(|t: &mut Terminal, v| t.allow_bold = v),
    ),
    PropertyDescriptor::new(
        "audible-bell",
        Setter::Bool(|t: &mut Terminal, v| t.audible_bell = v),
    ),
    PropertyDescriptor::new(
        "scrollback-lines",
        Setter::UInt32(|t: &mut Terminal, v| t.scrollback_lines = v),
    ),
    PropertyDescriptor::new(
        "cursor-shape",
        Setter::Enum {
            nicks: CursorShape::NICKS,
            set: |t: &mut Terminal, v| {
                if let Some(shape) = CursorShape::from_value(v) {
                    t.cursor_shape = shape;
                }
            },
        },
    ),
    PropertyDescriptor::new(
        "cursor-blink-mode",
        Setter::Enum {
            nicks: CursorBlinkMode::NICKS,
            set: |t: &mut Terminal, v| {
                if let Some(mode) = CursorBlinkMode::from_value(v) {
                    t.cursor_blink_mode = mode;
                }
            },
        },
    ),
    PropertyDescriptor::new(
        "scroll-on-keystroke",
        Setter::Bool(|t: &mut Terminal, v| t.scroll_on_keystroke = v),
    ),
    PropertyDescriptor::new(
        "scroll-on-output",
        Setter::Bool(|t: &mut Terminal, v| t.scroll_on_output = v),
    ),
    PropertyDescriptor::new(
        "pointer-autohide",
        Setter::Bool(|t: &mut Terminal, v| t.pointer_autohide = v),
    ),
    PropertyDescriptor::new(
        "font-scale",
        Setter::Float64(|t: &mut Terminal, v| t.set_font_scale(v)),
    ),
    PropertyDescriptor::new(
        "font-desc",
        Setter::String(|t: &mut Terminal, v| t.set_font(FontDescription::parse(&v))),
    ),
];

impl Configurable for Terminal {
    fn properties() -> &'static [PropertyDescriptor<Self>] {
        TERMINAL_PROPERTIES
    }
}

static REGISTRY: Lazy<PropertyRegistry<Terminal>> = Lazy::new(PropertyRegistry::describe);

/// Shared property registry for [`Terminal`].
pub fn registry() -> &'static PropertyRegistry<Terminal> {
    &REGISTRY
}
