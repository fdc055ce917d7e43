//! Batch groups
//!
//! A [`BatchGroup`] owns every batch compiled for a frame source, keyed by
//! z-index and then by shape kind. Replay order is:
//!
//! 1. z-indices ascending (lower z is painted underneath)
//! 2. within one z-index, kinds in the order they were first requested
//!
//! Callers that need polygons under lines at the same z-index must request
//! the polygon batch first.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use blinc_paint::{Canvas2D, FillStyle, Geometry, StrokeStyle, Transform2D};

use crate::batch::{Batch, BatchKind};
use crate::instruction::Instruction;

/// Batches grouped by z-index and kind
#[derive(Clone, Debug, Default)]
pub struct BatchGroup {
    /// Per z-index, at most one batch per kind, in creation order
    batches_by_z_index: FxHashMap<i32, SmallVec<[Batch; 2]>>,
    finished: bool,
}

impl BatchGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the batch for `(z_index, kind)`, creating it on first use.
    /// A missing z-index means 0.
    ///
    /// # Panics
    ///
    /// If the batch does not exist yet and the group is already finished.
    pub fn get_batch(&mut self, z_index: Option<i32>, kind: BatchKind) -> &mut Batch {
        let z_index = z_index.unwrap_or(0);
        let existing = self
            .batches_by_z_index
            .get(&z_index)
            .and_then(|batches| batches.iter().position(|batch| batch.kind() == kind));
        assert!(
            existing.is_some() || !self.finished,
            "cannot create a {kind} batch at z-index {z_index} in a finished group"
        );

        let batches = self.batches_by_z_index.entry(z_index).or_default();
        let index = match existing {
            Some(index) => index,
            None => {
                tracing::debug!(z_index, %kind, "creating batch");
                batches.push(Batch::new(kind));
                batches.len() - 1
            }
        };
        &mut batches[index]
    }

    /// Route `geometry` to the batch of its kind at `z_index`, with the given
    /// styles.
    ///
    /// # Panics
    ///
    /// If the target batch is sealed or the styles are invalid for the kind.
    pub fn add_geometry(
        &mut self,
        z_index: Option<i32>,
        geometry: &Geometry,
        fill: Option<FillStyle>,
        stroke: Option<StrokeStyle>,
    ) {
        let batch = self.get_batch(z_index, BatchKind::for_geometry(geometry));
        batch.set_fill_stroke_style(fill, stroke);
        batch.draw_geometry(geometry);
    }

    /// True iff no batch has ever been requested
    pub fn is_empty(&self) -> bool {
        self.batches_by_z_index.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn batch_count(&self) -> usize {
        self.batches_by_z_index.values().map(SmallVec::len).sum()
    }

    /// All z-indices in replay order
    pub fn z_indices(&self) -> Vec<i32> {
        let mut z_indices: Vec<i32> = self.batches_by_z_index.keys().copied().collect();
        z_indices.sort_unstable();
        z_indices
    }

    /// The batches at `z_index`, in creation order
    pub fn batches(&self, z_index: i32) -> &[Batch] {
        self.batches_by_z_index
            .get(&z_index)
            .map(|batches| batches.as_slice())
            .unwrap_or_default()
    }

    /// Seal every batch. Must be called once, before the first `draw`.
    ///
    /// # Panics
    ///
    /// If the group (or any of its batches) was already finished.
    pub fn finish(&mut self) {
        assert!(!self.finished, "batch group finished twice");
        for batch in self.batches_by_z_index.values_mut().flatten() {
            batch.finish();
        }
        self.finished = true;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let all = || self.batches_by_z_index.values().flatten();
            let instructions: usize = all().map(|b| b.instructions().len()).sum();
            let style_changes = all()
                .flat_map(Batch::instructions)
                .filter(|i| i.is_style_change())
                .count();
            let coordinates: usize = all().map(|b| b.coordinates().len()).sum();
            tracing::debug!(
                z_indices = self.batches_by_z_index.len(),
                batches = self.batch_count(),
                instructions,
                style_changes,
                coordinates,
                "batch group finished"
            );
        }
    }

    /// Replay every batch against `canvas`, lowest z-index first
    pub fn draw<C: Canvas2D + ?Sized>(&mut self, canvas: &mut C, transform: &Transform2D) {
        for z_index in self.z_indices() {
            if let Some(batches) = self.batches_by_z_index.get_mut(&z_index) {
                for batch in batches.iter_mut() {
                    batch.draw(canvas, transform);
                }
            }
        }
    }

    /// Total instructions across all batches
    pub fn instruction_count(&self) -> usize {
        self.batches_by_z_index
            .values()
            .flatten()
            .map(|batch| batch.instructions().len())
            .sum()
    }

    /// Iterate every instruction in replay order
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> + '_ {
        self.z_indices()
            .into_iter()
            .flat_map(move |z_index| self.batches(z_index))
            .flat_map(Batch::instructions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blinc_paint::{CanvasOp, Color, LineString, Polygon, RecordingCanvas};

    fn stroke(color: Color) -> StrokeStyle {
        StrokeStyle::new(color, 1.0)
    }

    fn line(y: f64) -> LineString {
        LineString::new([(0.0, y), (1.0, y)])
    }

    #[test]
    fn test_get_batch_is_lazy_and_unique() {
        let mut group = BatchGroup::new();
        assert!(group.is_empty());

        group.get_batch(None, BatchKind::LineString);
        group.get_batch(Some(0), BatchKind::LineString);
        group.get_batch(Some(0), BatchKind::Polygon);
        group.get_batch(Some(3), BatchKind::Polygon);

        assert!(!group.is_empty());
        assert_eq!(group.batch_count(), 3);
        assert_eq!(group.z_indices(), vec![0, 3]);
        let kinds: Vec<_> = group.batches(0).iter().map(Batch::kind).collect();
        assert_eq!(kinds, vec![BatchKind::LineString, BatchKind::Polygon]);
        assert!(group.batches(42).is_empty());
    }

    #[test]
    fn test_draw_visits_z_indices_in_ascending_order() {
        let mut group = BatchGroup::new();
        for (z_index, color) in [(5, Color::RED), (-1, Color::GREEN), (0, Color::BLUE)] {
            let batch = group.get_batch(Some(z_index), BatchKind::LineString);
            batch.set_fill_stroke_style(None, Some(stroke(color)));
            batch.draw_line_string_geometry(&line(z_index as f64));
        }
        group.finish();

        let mut canvas = RecordingCanvas::new();
        group.draw(&mut canvas, &Transform2D::identity());

        let colors: Vec<Color> = canvas
            .ops()
            .iter()
            .filter_map(|op| match op {
                CanvasOp::SetStrokeColor(color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![Color::GREEN, Color::BLUE, Color::RED]);
    }

    #[test]
    fn test_kinds_replay_in_creation_order() {
        let mut group = BatchGroup::new();
        group.add_geometry(
            None,
            &Geometry::from(line(0.0)),
            None,
            Some(stroke(Color::BLACK)),
        );
        group.add_geometry(
            None,
            &Geometry::from(Polygon::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)])),
            Some(Color::BLUE.into()),
            None,
        );
        group.finish();

        let mut canvas = RecordingCanvas::new();
        group.draw(&mut canvas, &Transform2D::identity());
        let first_stroke = canvas.ops().iter().position(|op| *op == CanvasOp::Stroke);
        let first_fill = canvas.ops().iter().position(|op| *op == CanvasOp::Fill);
        assert!(first_stroke < first_fill);
    }

    #[test]
    fn test_finish_seals_every_batch() {
        let mut group = BatchGroup::new();
        group.get_batch(Some(1), BatchKind::LineString);
        group.get_batch(Some(2), BatchKind::Polygon);
        group.finish();

        assert!(group.is_finished());
        for z_index in group.z_indices() {
            assert!(group.batches(z_index).iter().all(Batch::is_sealed));
        }
    }

    #[test]
    fn test_get_existing_batch_after_finish() {
        let mut group = BatchGroup::new();
        group.get_batch(Some(1), BatchKind::LineString);
        group.finish();

        assert!(group.get_batch(Some(1), BatchKind::LineString).is_sealed());
        assert_eq!(group.batch_count(), 1);
    }

    #[test]
    #[should_panic(expected = "cannot create a polygon batch at z-index 1 in a finished group")]
    fn test_new_batch_after_finish_panics() {
        let mut group = BatchGroup::new();
        group.get_batch(Some(1), BatchKind::LineString);
        group.finish();
        group.get_batch(Some(1), BatchKind::Polygon);
    }

    #[test]
    #[should_panic(expected = "finished twice")]
    fn test_finish_twice_panics() {
        let mut group = BatchGroup::new();
        group.finish();
        group.finish();
    }

    #[test]
    fn test_instructions_in_replay_order() {
        let mut group = BatchGroup::new();
        group.add_geometry(Some(2), &Geometry::from(line(0.0)), None, Some(stroke(Color::RED)));
        group.add_geometry(Some(1), &Geometry::from(line(1.0)), None, Some(stroke(Color::BLUE)));
        group.finish();

        assert_eq!(group.instruction_count(), 8);
        let first = group.instructions().next().copied();
        assert_eq!(first, Some(Instruction::SetStrokeStyle(stroke(Color::BLUE))));
    }
}
