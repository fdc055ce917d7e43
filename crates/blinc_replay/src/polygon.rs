//! Polygon batches
//!
//! Each polygon becomes one canvas path holding all of its rings, filled
//! and/or stroked once. Holes are cut out by the canvas fill rule. Fill and
//! stroke styles are tracked independently so that a change to one never
//! re-emits the other.

use blinc_paint::{Canvas2D, FillStyle, MultiPolygon, Point, Polygon, StrokeStyle, Transform2D};

use crate::batch::{BatchBuffer, BuildState};
use crate::instruction::Instruction;

#[derive(Clone, Debug, Default)]
struct PolygonState {
    current_fill_style: Option<FillStyle>,
    current_stroke_style: Option<StrokeStyle>,
    fill_style: Option<FillStyle>,
    stroke_style: Option<StrokeStyle>,
}

impl PolygonState {
    /// Emit style changes for the pending styles that differ from the
    /// applied ones
    fn apply_styles(&mut self, buffer: &mut BatchBuffer) {
        if let Some(fill) = self.fill_style {
            if self.current_fill_style != Some(fill) {
                buffer.push(Instruction::SetFillStyle(fill));
                self.current_fill_style = Some(fill);
            }
        }
        if let Some(stroke) = self.stroke_style {
            if self.current_stroke_style != Some(stroke) {
                buffer.push(Instruction::SetStrokeStyle(stroke));
                self.current_stroke_style = Some(stroke);
            }
        }
    }

    fn draw_rings(&self, buffer: &mut BatchBuffer, rings: &[Vec<Point>]) {
        if rings.iter().all(Vec::is_empty) {
            return;
        }
        buffer.push(Instruction::BeginPath);
        for ring in rings.iter().filter(|ring| !ring.is_empty()) {
            let end = buffer.append_coordinates(ring, true);
            buffer.push(Instruction::MoveToLineTo(end));
            buffer.push(Instruction::ClosePath);
        }
        if self.fill_style.is_some() {
            buffer.push(Instruction::Fill);
        }
        if self.stroke_style.is_some() {
            buffer.push(Instruction::Stroke);
        }
    }
}

/// Batch of polygons and multi polygons
#[derive(Clone, Debug)]
pub struct PolygonBatch {
    buffer: BatchBuffer,
    state: BuildState<PolygonState>,
}

impl Default for PolygonBatch {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonBatch {
    pub fn new() -> Self {
        Self {
            buffer: BatchBuffer::default(),
            state: BuildState::Building(PolygonState::default()),
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

    /// Set the fill and stroke for subsequently ingested polygons. Either may
    /// be absent, but not both.
    ///
    /// # Panics
    ///
    /// If the batch is sealed or both styles are absent.
    pub fn set_fill_stroke_style(&mut self, fill: Option<FillStyle>, stroke: Option<StrokeStyle>) {
        let state = self.state.building_mut("set_fill_stroke_style");
        assert!(
            fill.is_some() || stroke.is_some(),
            "polygons require a fill style, a stroke style, or both"
        );
        state.fill_style = fill;
        state.stroke_style = stroke;
    }

    pub fn draw_polygon_geometry(&mut self, geometry: &Polygon) {
        let state = self.state.building_mut("draw_polygon_geometry");
        state.apply_styles(&mut self.buffer);
        state.draw_rings(&mut self.buffer, geometry.rings());
    }

    pub fn draw_multi_polygon_geometry(&mut self, geometry: &MultiPolygon) {
        let state = self.state.building_mut("draw_multi_polygon_geometry");
        state.apply_styles(&mut self.buffer);
        for polygon in geometry.polygons() {
            state.draw_rings(&mut self.buffer, polygon.rings());
        }
    }

    /// Seal the batch. Every polygon is already filled/stroked, so nothing is
    /// emitted.
    ///
    /// # Panics
    ///
    /// If the batch is already sealed.
    pub fn finish(&mut self) {
        self.state.seal();
    }

    pub fn draw<C: Canvas2D + ?Sized>(&mut self, canvas: &mut C, transform: &Transform2D) {
        self.buffer.replay(canvas, transform);
    }

    pub(crate) fn buffer(&self) -> &BatchBuffer {
        &self.buffer
    }
}
