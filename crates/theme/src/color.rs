//! RGBA colors and their textual forms.
//!
//! Accepted syntaxes:
//! - `#rgb`, `#rrggbb`, `#rrrgggbbb`, `#rrrrggggbbbb`
//! - `rgb(r, g, b)` and `rgba(r, g, b, a)` with 0-255 or percentage channels
//! - a handful of names (`black`, `white`, `red`, ...)

use std::fmt;
use std::str::FromStr;

/// Color with fractional components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color '{0}'")]
pub struct ParseColorError(pub String);

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0)
    }

    /// Opaque color from 16-bit channels.
    pub fn from_rgb16(r: u16, g: u16, b: u16) -> Self {
        Self::new(
            r as f64 / 65535.0,
            g as f64 / 65535.0,
            b as f64 / 65535.0,
            1.0,
        )
    }

    pub const fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// True when red, green and blue are equal.
    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// 8-bit channels, rounded.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }

    /// Parse any of the supported syntaxes.
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        if let Some(hex) = spec.strip_prefix('#') {
            return parse_hex(hex);
        }

        let lower = spec.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba") {
            let [r, g, b, a] = split_args::<4>(args)?;
            return Some(Self::new(
                parse_channel(r)?,
                parse_channel(g)?,
                parse_channel(b)?,
                parse_alpha(a)?,
            ));
        }
        if let Some(args) = function_args(&lower, "rgb") {
            let [r, g, b] = split_args::<3>(args)?;
            return Some(Self::new(
                parse_channel(r)?,
                parse_channel(g)?,
                parse_channel(b)?,
                1.0,
            ));
        }

        named(&lower)
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::parse(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.to_rgb8();
        if self.a < 1.0 {
            write!(f, "rgba({}, {}, {}, {})", r, g, b, self.a)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !matches!(hex.len(), 3 | 6 | 9 | 12) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let width = hex.len() / 3;
    let max = ((1u64 << (4 * width)) - 1) as f64;
    let channel = |i: usize| -> Option<f64> {
        let digits = &hex[i * width..(i + 1) * width];
        u64::from_str_radix(digits, 16).ok().map(|v| v as f64 / max)
    };
    Some(Rgba::new(channel(0)?, channel(1)?, channel(2)?, 1.0))
}

fn function_args<'a>(spec: &'a str, name: &str) -> Option<&'a str> {
    spec.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn split_args<const N: usize>(args: &str) -> Option<[&str; N]> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    parts.try_into().ok()
}

/// `0-255` or `0%-100%`, clamped.
fn parse_channel(raw: &str) -> Option<f64> {
    let value = if let Some(percent) = raw.strip_suffix('%') {
        percent.trim().parse::<f64>().ok()? / 100.0
    } else {
        raw.parse::<f64>().ok()? / 255.0
    };
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}

fn parse_alpha(raw: &str) -> Option<f64> {
    let value = raw.parse::<f64>().ok()?;
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}

fn named(name: &str) -> Option<Rgba> {
    let color = match name {
        "black" => Rgba::BLACK,
        "white" => Rgba::WHITE,
        "red" => Rgba::from_rgb8(255, 0, 0),
        "green" => Rgba::from_rgb8(0, 255, 0),
        "blue" => Rgba::from_rgb8(0, 0, 255),
        "yellow" => Rgba::from_rgb8(255, 255, 0),
        "cyan" => Rgba::from_rgb8(0, 255, 255),
        "magenta" => Rgba::from_rgb8(255, 0, 255),
        "gray" | "grey" => Rgba::from_rgb8(190, 190, 190),
        "transparent" => Rgba::BLACK.with_alpha(0.0),
        _ => return None,
    };
    Some(color)
}
