//! Fill and stroke styles
//!
//! Styles are plain values compared field by field. Callers that model an
//! absent style use `Option<FillStyle>` / `Option<StrokeStyle>`, where two
//! `None`s compare equal.

use crate::color::Color;

/// Fill style for shapes
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillStyle {
    pub color: Color,
}

impl FillStyle {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle { color }
    }
}

/// Stroke style
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
}

impl StrokeStyle {
    /// Create a stroke with the given color and width, butt caps and miter joins
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, line_cap: LineCap) -> Self {
        self.line_cap = line_cap;
        self
    }

    /// Set line join style
    pub fn with_join(mut self, line_join: LineJoin) -> Self {
        self.line_join = line_join;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}
