//! Color types and utilities

use std::str::FromStr;

use bytemuck::{Pod, Zeroable};

use crate::error::PaintError;

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Parse a CSS-style color string.
    ///
    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` and the CSS basic color
    /// keywords (`red`, `navy`, `transparent`, ...), case-insensitively.
    pub fn parse(input: &str) -> Result<Self, PaintError> {
        let trimmed = input.trim();
        let invalid = || PaintError::InvalidColor(input.to_string());

        if let Some(digits) = trimmed.strip_prefix('#') {
            if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            return match digits.len() {
                3 => {
                    // #rgb expands each nibble: 0xf -> 0xff
                    let r = ((value >> 8) & 0xF) as u8;
                    let g = ((value >> 4) & 0xF) as u8;
                    let b = (value & 0xF) as u8;
                    Ok(Self::from_rgba8(r * 17, g * 17, b * 17, 255))
                }
                6 => Ok(Self::from_hex(value)),
                8 => Ok(Self::from_rgba8(
                    ((value >> 24) & 0xFF) as u8,
                    ((value >> 16) & 0xFF) as u8,
                    ((value >> 8) & 0xFF) as u8,
                    (value & 0xFF) as u8,
                )),
                _ => Err(invalid()),
            };
        }

        let named = match trimmed.to_ascii_lowercase().as_str() {
            "transparent" => return Ok(Self::TRANSPARENT),
            "black" => 0x000000,
            "silver" => 0xC0C0C0,
            "gray" | "grey" => 0x808080,
            "white" => 0xFFFFFF,
            "maroon" => 0x800000,
            "red" => 0xFF0000,
            "purple" => 0x800080,
            "fuchsia" | "magenta" => 0xFF00FF,
            "green" => 0x008000,
            "lime" => 0x00FF00,
            "olive" => 0x808000,
            "yellow" => 0xFFFF00,
            "navy" => 0x000080,
            "blue" => 0x0000FF,
            "teal" => 0x008080,
            "aqua" | "cyan" => 0x00FFFF,
            "orange" => 0xFFA500,
            _ => return Err(invalid()),
        };
        Ok(Self::from_hex(named))
    }

    /// Create a grayscale color
    pub fn gray(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }
}

impl FromStr for Color {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
