//! Replay instructions

use blinc_paint::{FillStyle, StrokeStyle};

/// A single operation in a batch's replay stream
///
/// Instructions never carry coordinates themselves. [`Instruction::MoveToLineTo`]
/// consumes the coordinate pairs between the end of the previous span and its
/// `end` index in the owning batch's coordinate buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instruction {
    BeginPath,
    ClosePath,
    Fill,
    /// Move to the first pair of the span, then line to every following pair
    /// up to the exclusive coordinate index `end`
    MoveToLineTo(usize),
    SetFillStyle(FillStyle),
    SetStrokeStyle(StrokeStyle),
    Stroke,
}

impl Instruction {
    /// Whether this instruction changes surface state rather than the path
    pub fn is_style_change(&self) -> bool {
        matches!(
            self,
            Instruction::SetFillStyle(_) | Instruction::SetStrokeStyle(_)
        )
    }
}
