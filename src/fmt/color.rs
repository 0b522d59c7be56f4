//! Named 16-color ANSI palette. Each color opens with its SGR foreground code
//! and closes with `ESC[39m`, which resets only the foreground so adjacent
//! styling survives.

use std::fmt;
use std::str::FromStr;

/// Foreground colors the level registry and callers can refer to by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl Color {
    /// Resets the foreground to the terminal default.
    pub const CLOSE: &'static str = "\x1b[39m";

    /// Lowercase name as accepted by [`wrap`] and `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
            Self::Gray => "gray",
        }
    }

    /// SGR foreground code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::Gray => 90,
        }
    }

    /// The opening escape, e.g. `\x1b[31m` for red.
    #[must_use]
    pub fn open(self) -> String {
        format!("\x1b[{}m", self.code())
    }

    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Black,
            Self::Red,
            Self::Green,
            Self::Yellow,
            Self::Blue,
            Self::Magenta,
            Self::Cyan,
            Self::White,
            Self::Gray,
        ]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `FromStr` for names outside the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color: '{}'", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grey" => Ok(Self::Gray),
            _ => Self::all()
                .into_iter()
                .find(|color| color.name() == s)
                .ok_or_else(|| ParseColorError(s.to_string())),
        }
    }
}

/// Wraps `text` in the color's open/close escapes.
#[must_use]
pub fn colorize(text: &str, color: Color) -> String {
    let open = color.open();
    let close = Color::CLOSE;
    format!("{open}{text}{close}")
}

/// Styling by name. Unknown names return `text` untouched.
#[must_use]
pub fn wrap(text: &str, color_name: &str) -> String {
    color_name
        .parse::<Color>()
        .map_or_else(|_| text.to_string(), |color| colorize(text, color))
}
