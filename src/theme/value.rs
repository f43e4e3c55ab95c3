use crate::*;
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Typed leaf of a theme document, discriminated by `__type__`.
#[derive(Deserialize)]
#[serde(tag = "__type__", rename_all = "lowercase")]
enum Marker {
    Color {
        color: String,
    },
    Font {
        family: String,
        #[serde(rename = "pointSize")]
        point_size: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Marker")]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { a: 0xff, r, g, b }
    }

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `#rgb`, `#rrggbb` and `#aarrggbb`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::Theme(format!("invalid color {s:?}"));
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        match hex.len() {
            3 => {
                let nibble = |i: usize| {
                    u8::from_str_radix(&hex[i..i + 1], 16)
                        .map(|v| v * 0x11)
                        .map_err(|_| invalid())
                };
                Ok(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Color::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
        }
    }
}

impl TryFrom<Marker> for Color {
    type Error = Error;

    fn try_from(marker: Marker) -> Result<Self> {
        match marker {
            Marker::Color { color } => color.parse(),
            Marker::Font { .. } => Err(Error::Theme("expected a color, found a font".into())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, derive_more::Display)]
#[serde(try_from = "Marker")]
#[display("{family} {point_size}pt")]
pub struct Font {
    pub family: String,
    pub point_size: u32,
}

impl Font {
    pub fn new(family: impl Into<String>, point_size: u32) -> Self {
        Self {
            family: family.into(),
            point_size,
        }
    }
}

impl TryFrom<Marker> for Font {
    type Error = Error;

    fn try_from(marker: Marker) -> Result<Self> {
        match marker {
            Marker::Font { family, point_size } => Ok(Font { family, point_size }),
            Marker::Color { .. } => Err(Error::Theme("expected a font, found a color".into())),
        }
    }
}

/// Either a color leaf or any placeholder value (older themes store `[]`
/// for "leave unset").
#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeColor {
    Color(Color),
    Unset(serde::de::IgnoredAny),
}

pub(super) fn optional_color<'de, D>(deserializer: D) -> std::result::Result<Option<Color>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match MaybeColor::deserialize(deserializer)? {
        MaybeColor::Color(color) => Some(color),
        MaybeColor::Unset(_) => None,
    })
}
