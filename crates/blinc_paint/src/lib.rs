//! Blinc Paint/Canvas API
//!
//! The 2D drawing vocabulary shared by Blinc renderers.
//!
//! # Features
//!
//! - Colors with CSS-style parsing
//! - Fill and stroke styles with value equality
//! - Line string and polygon geometry
//! - Affine transforms and flat coordinate transformation
//! - The [`Canvas2D`] drawing-surface trait and a [`RecordingCanvas`]

pub mod canvas;
pub mod color;
pub mod error;
pub mod geometry;
pub mod style;
pub mod transform;

pub use canvas::{Canvas2D, CanvasOp, RecordingCanvas};
pub use color::Color;
pub use error::{PaintError, Result};
pub use geometry::{Geometry, LineString, MultiLineString, MultiPolygon, Point, Polygon};
pub use style::{FillStyle, LineCap, LineJoin, StrokeStyle};
pub use transform::{transform_coordinates, Transform2D};
