use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::error::GridError;

/// Represents a 24-bit packed RGB color (0xRRGGBB)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Color(u32);

impl Color {
    pub const MAX: u32 = 0xFF_FFFF;
    pub const BLACK: Color = Color(0x00_0000);

    pub fn new(value: u32) -> Result<Self, GridError> {
        if value > Self::MAX {
            return Err(GridError::ColorOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self((red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.red(), self.green(), self.blue())
    }
}

impl TryFrom<u32> for Color {
    type Error = GridError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Color::new(value)
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Renders as a zero-padded lowercase literal, e.g. `0x008000`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:06x}", self.0)
    }
}

impl FromStr for Color {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(named) = NamedColor::lookup(trimmed) {
            return Ok(named.color());
        }

        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .or_else(|| trimmed.strip_prefix('#'))
            .unwrap_or(trimmed);

        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GridError::UnknownColor(trimmed.to_string()));
        }

        // Anything longer than 8 digits cannot be a color, and would not fit a u32 either
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| GridError::UnknownColor(trimmed.to_string()))?;
        Color::new(value)
    }
}

/// The fixed named-color table.
///
/// `Green` here is pure 0x00ff00, while the snake sprite's green pixels are
/// web green 0x008000. Both values are kept as they are.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    White,
    Red,
    Green,
    Blue,
}

lazy_static! {
    static ref NAME_LOOKUP: HashMap<String, NamedColor> = NamedColor::ALL
        .iter()
        .map(|named| (named.name().to_ascii_lowercase(), *named))
        .collect();
}

impl NamedColor {
    pub const ALL: [NamedColor; 5] = [
        NamedColor::Black,
        NamedColor::White,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Blue,
    ];

    pub const fn color(self) -> Color {
        match self {
            NamedColor::Black => Color(0x00_0000),
            NamedColor::White => Color(0xFF_FFFF),
            NamedColor::Red => Color(0xFF_0000),
            NamedColor::Green => Color(0x00_FF00),
            NamedColor::Blue => Color(0x00_00FF),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "Black",
            NamedColor::White => "White",
            NamedColor::Red => "Red",
            NamedColor::Green => "Green",
            NamedColor::Blue => "Blue",
        }
    }

    /// Case-insensitive lookup by name
    pub fn lookup(name: &str) -> Option<NamedColor> {
        NAME_LOOKUP.get(&name.to_ascii_lowercase()).copied()
    }
}

#[derive(Debug, Serialize)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub value: Color,
    pub hex: String,
}

/// Named colors in table order
pub fn palette() -> Vec<PaletteEntry> {
    NamedColor::ALL
        .iter()
        .map(|named| PaletteEntry {
            name: named.name(),
            value: named.color(),
            hex: named.color().to_string(),
        })
        .collect()
}
