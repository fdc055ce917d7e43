//! Line string batches
//!
//! All line strings of a batch share one open canvas path for as long as the
//! stroke style stays the same. A style change flushes the open path with a
//! `Stroke`, applies the new style and begins a new path.

use blinc_paint::{Canvas2D, FillStyle, LineString, MultiLineString, Point, StrokeStyle, Transform2D};

use crate::batch::{BatchBuffer, BuildState};
use crate::instruction::Instruction;

#[derive(Clone, Debug, Default)]
struct LineStringState {
    /// Style last emitted into the instruction stream
    current_stroke_style: Option<StrokeStyle>,
    /// Style to use for the next ingested line
    stroke_style: Option<StrokeStyle>,
    /// Coordinate count at the last `Stroke`; anything past it is an open path
    last_draw: usize,
}

/// Batch of line strings and multi line strings
#[derive(Clone, Debug)]
pub struct LineStringBatch {
    buffer: BatchBuffer,
    state: BuildState<LineStringState>,
}

impl Default for LineStringBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl LineStringBatch {
    pub fn new() -> Self {
        Self {
            buffer: BatchBuffer::default(),
            state: BuildState::Building(LineStringState::default()),
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        self.buffer.instructions()
    }

    pub fn coordinates(&self) -> &[f64] {
        self.buffer.coordinates()
    }

    pub fn is_sealed(&self) -> bool {
        self.state.is_sealed()
    }

    /// Set the stroke for subsequently ingested lines. Nothing is emitted
    /// until the next line arrives.
    ///
    /// # Panics
    ///
    /// If the batch is sealed, `fill` is present, or `stroke` is absent.
    pub fn set_fill_stroke_style(&mut self, fill: Option<FillStyle>, stroke: Option<StrokeStyle>) {
        let state = self.state.building_mut("set_fill_stroke_style");
        assert!(fill.is_none(), "line strings cannot be filled");
        assert!(stroke.is_some(), "line strings require a stroke style");
        state.stroke_style = stroke;
    }

    pub fn draw_line_string_geometry(&mut self, geometry: &LineString) {
        self.state.building_mut("draw_line_string_geometry");
        self.draw_coordinates(geometry.points());
    }

    pub fn draw_multi_line_string_geometry(&mut self, geometry: &MultiLineString) {
        self.state.building_mut("draw_multi_line_string_geometry");
        for line in geometry.lines() {
            self.draw_coordinates(line.points());
        }
    }

    /// Flush the open path and seal the batch
    ///
    /// # Panics
    ///
    /// If the batch is already sealed.
    pub fn finish(&mut self) {
        let state = self.state.seal();
        if state.last_draw != self.buffer.len() {
            self.buffer.push(Instruction::Stroke);
        }
    }

    pub fn draw<C: Canvas2D + ?Sized>(&mut self, canvas: &mut C, transform: &Transform2D) {
        self.buffer.replay(canvas, transform);
    }

    pub(crate) fn buffer(&self) -> &BatchBuffer {
        &self.buffer
    }

    fn draw_coordinates(&mut self, points: &[Point]) {
        // An empty line has no pair to move to
        if points.is_empty() {
            return;
        }
        let state = self.state.building_mut("draw_coordinates");
        let buffer = &mut self.buffer;

        if state.current_stroke_style != state.stroke_style {
            if state.last_draw != buffer.len() {
                buffer.push(Instruction::Stroke);
                state.last_draw = buffer.len();
            }
            if let Some(style) = state.stroke_style {
                buffer.push(Instruction::SetStrokeStyle(style));
            }
            buffer.push(Instruction::BeginPath);
            state.current_stroke_style = state.stroke_style;
        }

        let end = buffer.append_coordinates(points, false);
        buffer.push(Instruction::MoveToLineTo(end));
    }
}
