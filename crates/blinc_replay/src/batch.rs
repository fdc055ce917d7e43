//! Batches
//!
//! A batch accumulates an instruction stream and a flat coordinate buffer for
//! one shape kind. The two are co-indexed: every [`Instruction::MoveToLineTo`]
//! consumes the pairs between the previous span's end and its own end, so the
//! spans, in order, cover the coordinate buffer exactly once.
//!
//! Batches are built once, sealed with `finish`, and then replayed any number
//! of times against a [`Canvas2D`] through a per-frame transform.

use std::fmt;
use std::str::FromStr;

use blinc_paint::{
    transform_coordinates, Canvas2D, FillStyle, Geometry, LineString, MultiLineString,
    MultiPolygon, Point, Polygon, StrokeStyle, Transform2D,
};

use crate::error::ReplayError;
use crate::instruction::Instruction;
use crate::line_string::LineStringBatch;
use crate::polygon::PolygonBatch;

/// The shape kind a batch handles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BatchKind {
    LineString,
    Polygon,
}

impl BatchKind {
    pub const ALL: [BatchKind; 2] = [BatchKind::LineString, BatchKind::Polygon];

    pub const fn as_str(&self) -> &'static str {
        match self {
            BatchKind::LineString => "line-string",
            BatchKind::Polygon => "polygon",
        }
    }

    /// The kind whose batch accepts `geometry`
    pub fn for_geometry(geometry: &Geometry) -> Self {
        match geometry {
            Geometry::LineString(_) | Geometry::MultiLineString(_) => BatchKind::LineString,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => BatchKind::Polygon,
        }
    }
}

impl fmt::Display for BatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BatchKind {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line-string" | "LineString" => Ok(BatchKind::LineString),
            "polygon" | "Polygon" => Ok(BatchKind::Polygon),
            _ => Err(ReplayError::UnknownBatchKind(s.to_string())),
        }
    }
}

/// Building/sealed lifecycle of a batch's style state
#[derive(Clone, Debug)]
pub(crate) enum BuildState<S> {
    Building(S),
    Sealed,
}

impl<S> BuildState<S> {
    /// The building state, or a panic naming `operation` if already sealed
    pub(crate) fn building_mut(&mut self, operation: &str) -> &mut S {
        match self {
            BuildState::Building(state) => state,
            BuildState::Sealed => panic!("{operation} called on a sealed batch"),
        }
    }

    /// Transition to sealed, returning the final building state
    pub(crate) fn seal(&mut self) -> S {
        match std::mem::replace(self, BuildState::Sealed) {
            BuildState::Building(state) => state,
            BuildState::Sealed => panic!("finish called on an already sealed batch"),
        }
    }

    pub(crate) fn is_sealed(&self) -> bool {
        matches!(self, BuildState::Sealed)
    }
}

/// Instruction stream, coordinate buffer and pixel scratch space shared by
/// every batch kind
#[derive(Clone, Debug, Default)]
pub(crate) struct BatchBuffer {
    instructions: Vec<Instruction>,
    coordinates: Vec<f64>,
    /// Reused across `replay` calls, never handed out
    pixel_coordinates: Vec<f32>,
}

impl BatchBuffer {
    pub(crate) fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub(crate) fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Number of coordinates (not pairs) in the buffer
    pub(crate) fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub(crate) fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Append `points` and return the new buffer length, usable as the end of
    /// a [`Instruction::MoveToLineTo`] span. With `close`, the first point is
    /// repeated at the end.
    pub(crate) fn append_coordinates(&mut self, points: &[Point], close: bool) -> usize {
        let extra = if close { 2 } else { 0 };
        self.coordinates.reserve(points.len() * 2 + extra);
        for point in points {
            self.coordinates.push(point.x);
            self.coordinates.push(point.y);
        }
        if close {
            if let Some(first) = points.first() {
                self.coordinates.push(first.x);
                self.coordinates.push(first.y);
            }
        }
        self.coordinates.len()
    }

    /// Transform the coordinates into pixel space and replay every instruction
    /// against `canvas`.
    ///
    /// # Panics
    ///
    /// If the instruction spans do not consume the coordinate buffer exactly.
    pub(crate) fn replay<C: Canvas2D + ?Sized>(&mut self, canvas: &mut C, transform: &Transform2D) {
        transform_coordinates(&self.coordinates, transform, &mut self.pixel_coordinates);
        let pixels = &self.pixel_coordinates;

        let mut cursor = 0;
        for instruction in &self.instructions {
            match instruction {
                Instruction::BeginPath => canvas.begin_path(),
                Instruction::ClosePath => canvas.close_path(),
                Instruction::Fill => canvas.fill(),
                Instruction::Stroke => canvas.stroke(),
                Instruction::MoveToLineTo(end) => {
                    let end = *end;
                    assert!(
                        cursor < end && end <= pixels.len(),
                        "MoveToLineTo span {cursor}..{end} is outside the {} pixel coordinates",
                        pixels.len()
                    );
                    canvas.move_to(pixels[cursor], pixels[cursor + 1]);
                    cursor += 2;
                    while cursor < end {
                        canvas.line_to(pixels[cursor], pixels[cursor + 1]);
                        cursor += 2;
                    }
                }
                Instruction::SetFillStyle(style) => canvas.set_fill_color(style.color),
                Instruction::SetStrokeStyle(style) => {
                    canvas.set_stroke_color(style.color);
                    canvas.set_line_width(style.width);
                    canvas.set_line_cap(style.line_cap);
                    canvas.set_line_join(style.line_join);
                }
            }
        }

        assert_eq!(
            cursor,
            pixels.len(),
            "instruction spans out of sync with the coordinate buffer"
        );
    }
}

/// A batch of one shape kind
#[derive(Clone, Debug)]
pub enum Batch {
    LineString(LineStringBatch),
    Polygon(PolygonBatch),
}

impl Batch {
    /// Create an empty, building batch of `kind`
    pub fn new(kind: BatchKind) -> Self {
        match kind {
            BatchKind::LineString => Batch::LineString(LineStringBatch::new()),
            BatchKind::Polygon => Batch::Polygon(PolygonBatch::new()),
        }
    }

    pub fn kind(&self) -> BatchKind {
        match self {
            Batch::LineString(_) => BatchKind::LineString,
            Batch::Polygon(_) => BatchKind::Polygon,
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        self.buffer().instructions()
    }

    pub fn coordinates(&self) -> &[f64] {
        self.buffer().coordinates()
    }

    pub fn is_sealed(&self) -> bool {
        match self {
            Batch::LineString(batch) => batch.is_sealed(),
            Batch::Polygon(batch) => batch.is_sealed(),
        }
    }

    /// Set the styles for geometry ingested after this call
    ///
    /// # Panics
    ///
    /// If the batch is sealed or the style combination is invalid for its kind.
    pub fn set_fill_stroke_style(&mut self, fill: Option<FillStyle>, stroke: Option<StrokeStyle>) {
        match self {
            Batch::LineString(batch) => batch.set_fill_stroke_style(fill, stroke),
            Batch::Polygon(batch) => batch.set_fill_stroke_style(fill, stroke),
        }
    }

    pub fn draw_line_string_geometry(&mut self, geometry: &LineString) {
        self.as_line_string("draw_line_string_geometry")
            .draw_line_string_geometry(geometry);
    }

    pub fn draw_multi_line_string_geometry(&mut self, geometry: &MultiLineString) {
        self.as_line_string("draw_multi_line_string_geometry")
            .draw_multi_line_string_geometry(geometry);
    }

    pub fn draw_polygon_geometry(&mut self, geometry: &Polygon) {
        self.as_polygon("draw_polygon_geometry")
            .draw_polygon_geometry(geometry);
    }

    pub fn draw_multi_polygon_geometry(&mut self, geometry: &MultiPolygon) {
        self.as_polygon("draw_multi_polygon_geometry")
            .draw_multi_polygon_geometry(geometry);
    }

    /// Ingest any geometry. Its kind must match the batch kind.
    pub fn draw_geometry(&mut self, geometry: &Geometry) {
        match geometry {
            Geometry::LineString(g) => self.draw_line_string_geometry(g),
            Geometry::MultiLineString(g) => self.draw_multi_line_string_geometry(g),
            Geometry::Polygon(g) => self.draw_polygon_geometry(g),
            Geometry::MultiPolygon(g) => self.draw_multi_polygon_geometry(g),
        }
    }

    /// Seal the batch, flushing any open path
    ///
    /// # Panics
    ///
    /// If the batch is already sealed.
    pub fn finish(&mut self) {
        match self {
            Batch::LineString(batch) => batch.finish(),
            Batch::Polygon(batch) => batch.finish(),
        }
    }

    /// Replay the batch against `canvas`, mapping coordinates through `transform`
    pub fn draw<C: Canvas2D + ?Sized>(&mut self, canvas: &mut C, transform: &Transform2D) {
        tracing::trace!(
            kind = %self.kind(),
            instructions = self.instructions().len(),
            coordinates = self.coordinates().len(),
            "replaying batch"
        );
        match self {
            Batch::LineString(batch) => batch.draw(canvas, transform),
            Batch::Polygon(batch) => batch.draw(canvas, transform),
        }
    }

    pub fn as_line_string_mut(&mut self) -> Option<&mut LineStringBatch> {
        match self {
            Batch::LineString(batch) => Some(batch),
            Batch::Polygon(_) => None,
        }
    }

    pub fn as_polygon_mut(&mut self) -> Option<&mut PolygonBatch> {
        match self {
            Batch::Polygon(batch) => Some(batch),
            Batch::LineString(_) => None,
        }
    }

    fn buffer(&self) -> &BatchBuffer {
        match self {
            Batch::LineString(batch) => batch.buffer(),
            Batch::Polygon(batch) => batch.buffer(),
        }
    }

    fn as_line_string(&mut self, operation: &str) -> &mut LineStringBatch {
        match self {
            Batch::LineString(batch) => batch,
            Batch::Polygon(_) => panic!("{operation} is not supported by a polygon batch"),
        }
    }

    fn as_polygon(&mut self, operation: &str) -> &mut PolygonBatch {
        match self {
            Batch::Polygon(batch) => batch,
            Batch::LineString(_) => panic!("{operation} is not supported by a line-string batch"),
        }
    }
}
