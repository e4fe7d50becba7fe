//! Enum-valued terminal settings and their key file nicks.

use settings::EnumNicks;

/// Cursor shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Block,
    IBeam,
    Underline,
}

impl CursorShape {
    pub const NICKS: EnumNicks = &[("block", 0), ("ibeam", 1), ("underline", 2)];

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Block),
            1 => Some(Self::IBeam),
            2 => Some(Self::Underline),
            _ => None,
        }
    }
}

/// Whether the cursor blinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorBlinkMode {
    /// Follow the desktop setting.
    System,
    On,
    #[default]
    Off,
}

impl CursorBlinkMode {
    pub const NICKS: EnumNicks = &[("system", 0), ("on", 1), ("off", 2)];

    pub fn from_value(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::System),
            1 => Some(Self::On),
            2 => Some(Self::Off),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("block", CursorShape::Block ; "block")]
    #[test_case("ibeam", CursorShape::IBeam ; "ibeam")]
    #[test_case("underline", CursorShape::Underline ; "underline")]
    fn cursor_shape_nicks(nick: &str, shape: CursorShape) {
        let value = CursorShape::NICKS.iter().find(|(n, _)| *n == nick).map(|(_, v)| *v);
        assert_eq!(value.and_then(CursorShape::from_value), Some(shape));
    }

    #[test_case("system", CursorBlinkMode::System ; "system")]
    #[test_case("on", CursorBlinkMode::On ; "on")]
    #[test_case("off", CursorBlinkMode::Off ; "off")]
    fn blink_mode_nicks(nick: &str, mode: CursorBlinkMode) {
        let value = CursorBlinkMode::NICKS.iter().find(|(n, _)| *n == nick).map(|(_, v)| *v);
        assert_eq!(value.and_then(CursorBlinkMode::from_value), Some(mode));
    }

    #[test]
    fn every_nick_maps_to_a_variant() {
        for (nick, value) in CursorShape::NICKS {
            assert!(CursorShape::from_value(*value).is_some(), "{}", nick);
        }
        for (nick, value) in CursorBlinkMode::NICKS {
            assert!(CursorBlinkMode::from_value(*value).is_some(), "{}", nick);
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert_eq!(CursorShape::from_value(3), None);
        assert_eq!(CursorBlinkMode::from_value(-1), None);
    }

    #[test]
    fn defaults() {
        assert_eq!(CursorShape::default(), CursorShape::Block);
        assert_eq!(CursorBlinkMode::default(), CursorBlinkMode::Off);
    }
}
