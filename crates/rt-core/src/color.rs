//! CSS colors for the diagnostic fill.
//!
//! A color is either a CSS keyword passed through verbatim (`green`) or an
//! RGB triple emitted as `#RRGGBB`. The terminal palette maps the sixteen
//! base colors the engine's text UI draws with to fixed hex values, so a
//! page can pick a fill that matches the game's background.

use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// Named CSS color, stored lowercase.
    Keyword(String),
    Rgb(u8, u8, u8),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Accept an ASCII-alphabetic CSS color keyword.
    pub fn keyword(name: &str) -> Option<Self> {
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        Some(Color::Keyword(name.to_ascii_lowercase()))
    }

    /// Read `#RGB` or `#RRGGBB` into 8-bit channels; short digits repeat
    /// (`f` becomes `ff`). The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = hex_val(bytes[0])? << 4 | hex_val(bytes[1])?;
                let g = hex_val(bytes[2])? << 4 | hex_val(bytes[3])?;
                let b = hex_val(bytes[4])? << 4 | hex_val(bytes[5])?;
                Some(Self::rgb(r, g, b))
            }
            _ => None,
        }
    }

    /// Value suitable for `fillStyle`.
    pub fn to_css(&self) -> Cow<'_, str> {
        match self {
            Color::Keyword(name) => Cow::Borrowed(name),
            Color::Rgb(r, g, b) => Cow::Owned(format!("#{r:02X}{g:02X}{b:02X}")),
        }
    }
}

/// Nibble value of one ASCII hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Keyword("green".to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Parses `#RGB`, `#RRGGBB`, `dark:<base>`, `light:<base>`, or a keyword.
impl FromStr for Color {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = if s.starts_with('#') {
            Color::from_hex(s)
        } else if let Some(base) = s.strip_prefix("dark:") {
            base.parse::<BaseColor>().ok().map(BaseColor::dark)
        } else if let Some(base) = s.strip_prefix("light:") {
            base.parse::<BaseColor>().ok().map(BaseColor::light)
        } else {
            Color::keyword(s)
        };
        parsed.ok_or_else(|| BridgeError::InvalidConfig(format!("unrecognized color `{s}`")))
    }
}

impl TryFrom<String> for Color {
    type Error = BridgeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_css().into_owned()
    }
}

// ─── Terminal palette ────────────────────────────────────────────────────

/// The eight base colors of the engine's text UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl BaseColor {
    pub const ALL: [BaseColor; 8] = [
        BaseColor::Black,
        BaseColor::Red,
        BaseColor::Green,
        BaseColor::Yellow,
        BaseColor::Blue,
        BaseColor::Magenta,
        BaseColor::Cyan,
        BaseColor::White,
    ];

    pub fn dark(self) -> Color {
        match self {
            BaseColor::Black => Color::rgb(0x00, 0x00, 0x00),
            BaseColor::Red => Color::rgb(0x80, 0x00, 0x00),
            BaseColor::Green => Color::rgb(0x00, 0x80, 0x00),
            BaseColor::Yellow => Color::rgb(0x80, 0x80, 0x00),
            BaseColor::Blue => Color::rgb(0x00, 0x00, 0x80),
            BaseColor::Magenta => Color::rgb(0x80, 0x00, 0x80),
            BaseColor::Cyan => Color::rgb(0x00, 0x80, 0x80),
            BaseColor::White => Color::rgb(0xC0, 0xC0, 0xC0),
        }
    }

    pub fn light(self) -> Color {
        match self {
            BaseColor::Black => Color::rgb(0x80, 0x80, 0x80),
            BaseColor::Red => Color::rgb(0xFF, 0x00, 0x00),
            BaseColor::Green => Color::rgb(0x00, 0xFF, 0x00),
            BaseColor::Yellow => Color::rgb(0xFF, 0xFF, 0x00),
            BaseColor::Blue => Color::rgb(0x00, 0x00, 0xFF),
            BaseColor::Magenta => Color::rgb(0xFF, 0x00, 0xFF),
            BaseColor::Cyan => Color::rgb(0x00, 0xFF, 0xFF),
            BaseColor::White => Color::rgb(0xFF, 0xFF, 0xFF),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BaseColor::Black => "black",
            BaseColor::Red => "red",
            BaseColor::Green => "green",
            BaseColor::Yellow => "yellow",
            BaseColor::Blue => "blue",
            BaseColor::Magenta => "magenta",
            BaseColor::Cyan => "cyan",
            BaseColor::White => "white",
        }
    }
}

impl FromStr for BaseColor {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BaseColor::ALL
            .into_iter()
            .find(|base| base.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BridgeError::InvalidConfig(format!("unknown base color `{s}`")))
    }
}
