//! Font description strings such as `Menlo Regular 11px`.
//!
//! The format is `[FAMILY] [STYLE-WORDS] [SIZE]`: style words are taken
//! from the end of the string, a trailing number is the size and a `px`
//! suffix makes it an absolute (pixel) size.

use std::fmt;

/// Words recognised as style, weight, variant or stretch.
const STYLE_WORDS: &[&str] = &[
    "normal",
    "regular",
    "roman",
    "book",
    "italic",
    "oblique",
    "thin",
    "ultra-light",
    "extra-light",
    "light",
    "semi-light",
    "medium",
    "semi-bold",
    "demi-bold",
    "bold",
    "ultra-bold",
    "extra-bold",
    "heavy",
    "black",
    "small-caps",
    "condensed",
    "semi-condensed",
    "expanded",
    "semi-expanded",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSize {
    Points(f64),
    /// Absolute size in device pixels.
    Pixels(f64),
}

impl FontSize {
    fn parse(word: &str) -> Option<Self> {
        let (number, absolute) = match word.strip_suffix("px") {
            Some(number) => (number, true),
            None => (word, false),
        };
        let size = number.parse::<f64>().ok()?;
        if !size.is_finite() || size <= 0.0 {
            return None;
        }
        Some(if absolute {
            FontSize::Pixels(size)
        } else {
            FontSize::Points(size)
        })
    }

    pub fn is_absolute(&self) -> bool {
        matches!(self, FontSize::Pixels(_))
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSize::Points(v) => write!(f, "{}", v),
            FontSize::Pixels(v) => write!(f, "{}px", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FontDescription {
    /// Empty when the string named only styles and/or a size.
    pub family: String,
    pub styles: Vec<String>,
    pub size: Option<FontSize>,
}

impl FontDescription {
    /// Parse a description. Never fails; unrecognised words end up in the
    /// family name.
    pub fn parse(description: &str) -> Self {
        let mut words: Vec<&str> = description.split_whitespace().collect();

        let size = words.last().and_then(|w| FontSize::parse(w));
        if size.is_some() {
            words.pop();
        }

        let mut styles = Vec::new();
        while let Some(word) = words.last() {
            if !is_style_word(word) {
                break;
            }
            styles.push(word.to_string());
            words.pop();
        }
        styles.reverse();

        let family = words.join(" ").trim_end_matches(',').to_string();

        Self {
            family,
            styles,
            size,
        }
    }

    pub fn has_family(&self) -> bool {
        !self.family.is_empty()
    }
}

fn is_style_word(word: &str) -> bool {
    STYLE_WORDS.iter().any(|s| s.eq_ignore_ascii_case(word))
}

impl fmt::Display for FontDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if self.has_family() {
            parts.push(self.family.clone());
        }
        parts.extend(self.styles.iter().cloned());
        if let Some(size) = self.size {
            parts.push(size.to_string());
        }
        f.write_str(&parts.join(" "))
    }
}
