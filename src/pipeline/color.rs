//! Bar colors as `#RRGGBB` values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Invalid hex color '{0}', expected #RRGGBB")]
pub struct ColorParseError(String);

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BarColor {
    pub const CYAN: BarColor = BarColor::from_rgb(0x00, 0xBC, 0xD4);
    pub const WHITE: BarColor = BarColor::from_rgb(0xFF, 0xFF, 0xFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for BarColor {
    fn default() -> Self {
        BarColor::CYAN
    }
}

impl From<[u8; 3]> for BarColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<BarColor> for egui::Color32 {
    fn from(c: BarColor) -> Self {
        egui::Color32::from_rgb(c.r, c.g, c.b)
    }
}

impl From<BarColor> for plotters::style::RGBColor {
    fn from(c: BarColor) -> Self {
        plotters::style::RGBColor(c.r, c.g, c.b)
    }
}

impl FromStr for BarColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.len() == 6 && h.is_ascii())
            .ok_or_else(|| ColorParseError(s.to_string()))?;
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorParseError(s.to_string()))
        };
        Ok(Self::from_rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for BarColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for BarColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for BarColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
