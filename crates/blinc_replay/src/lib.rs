//! Blinc Replay - compiled vector geometry for 2D canvases
//!
//! Re-issuing every line string and polygon to a canvas on each pan or zoom
//! is wasteful. This crate compiles styled geometry once into batches of
//! replay [`Instruction`]s over a flat coordinate buffer, then replays them
//! each frame through a cheap coordinate transform.
//!
//! - **Batches**: one per shape kind ([`LineStringBatch`], [`PolygonBatch`]),
//!   emitting style changes only when the style actually changes
//! - **Groups**: [`BatchGroup`] orders batches by z-index, then by the order
//!   their kinds were first requested
//!
//! # Example
//!
//! ```rust
//! use blinc_paint::{Color, LineString, RecordingCanvas, StrokeStyle, Transform2D};
//! use blinc_replay::{BatchGroup, BatchKind};
//!
//! let mut group = BatchGroup::new();
//!
//! let batch = group.get_batch(None, BatchKind::LineString);
//! batch.set_fill_stroke_style(None, Some(StrokeStyle::new(Color::RED, 2.0)));
//! batch.draw_line_string_geometry(&LineString::new([(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
//!
//! group.finish();
//!
//! // Once per frame
//! let mut canvas = RecordingCanvas::new();
//! group.draw(&mut canvas, &Transform2D::scale(2.0, 2.0));
//! assert_eq!(canvas.paint_count(), 1);
//! ```

pub mod batch;
pub mod error;
pub mod group;
pub mod instruction;
pub mod line_string;
pub mod polygon;

pub use batch::{Batch, BatchKind};
pub use error::{ReplayError, Result};
pub use group::BatchGroup;
pub use instruction::Instruction;
pub use line_string::LineStringBatch;
pub use polygon::PolygonBatch;
