//! Vector geometry
//!
//! Line strings and polygons in user (map/world) space. These carry no
//! styling; styles are attached when the geometry is handed to a renderer.

use bytemuck::{Pod, Zeroable};
use smallvec::SmallVec;

/// A 2D point in source space
///
/// Components are `f64` so that world-scale coordinates (web mercator meters
/// reach about 2e7) keep sub-unit resolution until they are mapped to pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// An ordered sequence of points
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    pub fn new(points: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Several line strings drawn with one style
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLineString {
    lines: Vec<LineString>,
}

impl MultiLineString {
    pub fn new(lines: impl IntoIterator<Item = LineString>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }
}

/// A polygon: the first ring is the exterior, any following rings are holes.
///
/// Rings are stored open; the closing edge back to the first point is implied.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    rings: SmallVec<[Vec<Point>; 1]>,
}

impl Polygon {
    /// A polygon without holes
    pub fn new(exterior: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        let mut rings = SmallVec::new();
        rings.push(exterior.into_iter().map(Into::into).collect());
        Self { rings }
    }

    /// Add a hole
    pub fn with_hole(mut self, hole: impl IntoIterator<Item = impl Into<Point>>) -> Self {
        self.rings.push(hole.into_iter().map(Into::into).collect());
        self
    }

    pub fn from_rings(rings: impl IntoIterator<Item = Vec<Point>>) -> Self {
        Self {
            rings: rings.into_iter().collect(),
        }
    }

    pub fn rings(&self) -> &[Vec<Point>] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&[Point]> {
        self.rings.first().map(Vec::as_slice)
    }

    pub fn holes(&self) -> &[Vec<Point>] {
        self.rings.get(1..).unwrap_or(&[])
    }
}

/// Several polygons drawn with one style
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: impl IntoIterator<Item = Polygon>) -> Self {
        Self {
            polygons: polygons.into_iter().collect(),
        }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

/// Any renderable geometry
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl From<LineString> for Geometry {
    fn from(g: LineString) -> Self {
        Geometry::LineString(g)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(g: MultiLineString) -> Self {
        Geometry::MultiLineString(g)
    }
}

impl From<Polygon> for Geometry {
    fn from(g: Polygon) -> Self {
        Geometry::Polygon(g)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(g: MultiPolygon) -> Self {
        Geometry::MultiPolygon(g)
    }
}
