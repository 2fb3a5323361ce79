//! Colors and text styles for the SGR encoders.

/// One of the eight standard ANSI colors, or the terminal default.
///
/// The discriminant is the digit used in the SGR foreground (`3{c}`) and
/// background (`4{c}`) codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    /// The terminal's configured default color.
    Default = 9,
}

impl Color {
    /// SGR digit for this color.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// SGR text styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Style {
    Normal = 0,
    Bold = 1,
    Underline = 4,
    Blink = 5,
    Inverse = 8,
}

impl Style {
    /// SGR parameter for this style.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Black.code(), 0);
        assert_eq!(Color::White.code(), 7);
        assert_eq!(Color::Default.code(), 9);
    }

    #[test]
    fn test_style_codes() {
        assert_eq!(Style::Normal.code(), 0);
        assert_eq!(Style::Bold.code(), 1);
        assert_eq!(Style::Underline.code(), 4);
        assert_eq!(Style::Blink.code(), 5);
        assert_eq!(Style::Inverse.code(), 8);
    }
}
