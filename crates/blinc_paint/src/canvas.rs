//! Canvas - the stateful 2D drawing surface
//!
//! [`Canvas2D`] mirrors the immediate-mode path API of an HTML canvas or a
//! Skia canvas: a current path is built with `move_to`/`line_to`, then filled
//! or stroked with the current fill/stroke state.

use crate::color::Color;
use crate::style::{LineCap, LineJoin};

/// A stateful 2D drawing surface
pub trait Canvas2D {
    /// Start a new, empty path
    fn begin_path(&mut self);

    /// Close the current sub-path back to its first point
    fn close_path(&mut self);

    /// Fill the current path with the current fill color
    fn fill(&mut self);

    /// Stroke the current path with the current stroke state
    fn stroke(&mut self);

    fn move_to(&mut self, x: f32, y: f32);

    fn line_to(&mut self, x: f32, y: f32);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    fn set_line_cap(&mut self, _cap: LineCap) {
        // Surfaces without cap support keep their default
    }

    fn set_line_join(&mut self, _join: LineJoin) {
        // Surfaces without join support keep their default
    }
}

/// A canvas operation captured by [`RecordingCanvas`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CanvasOp {
    BeginPath,
    ClosePath,
    Fill,
    Stroke,
    MoveTo(f32, f32),
    LineTo(f32, f32),
    SetFillColor(Color),
    SetStrokeColor(Color),
    SetLineWidth(f32),
    SetLineCap(LineCap),
    SetLineJoin(LineJoin),
}

/// A canvas that records operations instead of rasterizing them
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded operations
    pub fn ops(&self) -> &[CanvasOp] {
        &self.ops
    }

    /// Take ownership of recorded operations
    pub fn take_ops(&mut self) -> Vec<CanvasOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Number of `fill` and `stroke` calls, i.e. rasterization passes
    pub fn paint_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, CanvasOp::Fill | CanvasOp::Stroke))
            .count()
    }
}

impl Canvas2D for RecordingCanvas {
    fn begin_path(&mut self) {
        self.ops.push(CanvasOp::BeginPath);
    }

    fn close_path(&mut self) {
        self.ops.push(CanvasOp::ClosePath);
    }

    fn fill(&mut self) {
        self.ops.push(CanvasOp::Fill);
    }

    fn stroke(&mut self) {
        self.ops.push(CanvasOp::Stroke);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.ops.push(CanvasOp::MoveTo(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.ops.push(CanvasOp::LineTo(x, y));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(CanvasOp::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.ops.push(CanvasOp::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(CanvasOp::SetLineWidth(width));
    }

    fn set_line_cap(&mut self, cap: LineCap) {
        self.ops.push(CanvasOp::SetLineCap(cap));
    }

    fn set_line_join(&mut self, join: LineJoin) {
        self.ops.push(CanvasOp::SetLineJoin(join));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas() {
        let mut canvas = RecordingCanvas::new();
        canvas.set_fill_color(Color::BLUE);
        canvas.begin_path();
        canvas.move_to(0.0, 0.0);
        canvas.line_to(10.0, 0.0);
        canvas.close_path();
        canvas.fill();

        assert_eq!(canvas.ops().len(), 6);
        assert_eq!(canvas.paint_count(), 1);

        let ops = canvas.take_ops();
        assert_eq!(ops[0], CanvasOp::SetFillColor(Color::BLUE));
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_default_cap_and_join_are_noops() {
        struct Counting(usize);

        impl Canvas2D for Counting {
            fn begin_path(&mut self) {
                self.0 += 1;
            }
            fn close_path(&mut self) {}
            fn fill(&mut self) {}
            fn stroke(&mut self) {}
            fn move_to(&mut self, _x: f32, _y: f32) {}
            fn line_to(&mut self, _x: f32, _y: f32) {}
            fn set_fill_color(&mut self, _color: Color) {}
            fn set_stroke_color(&mut self, _color: Color) {}
            fn set_line_width(&mut self, _width: f32) {}
        }

        let mut canvas = Counting(0);
        canvas.set_line_cap(LineCap::Round);
        canvas.set_line_join(LineJoin::Bevel);
        canvas.begin_path();
        assert_eq!(canvas.0, 1);
    }
}
