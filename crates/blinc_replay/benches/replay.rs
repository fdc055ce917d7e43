//! Benchmarks for batch compilation and per-frame replay.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use blinc_paint::{
    Canvas2D, Color, FillStyle, LineString, Point, Polygon, StrokeStyle, Transform2D,
};
use blinc_replay::{BatchGroup, BatchKind};

/// Counts canvas calls without storing them, so replay cost dominates.
#[derive(Default)]
struct NullCanvas {
    calls: usize,
}

impl Canvas2D for NullCanvas {
    fn begin_path(&mut self) {
        self.calls += 1;
    }
    fn close_path(&mut self) {
        self.calls += 1;
    }
    fn fill(&mut self) {
        self.calls += 1;
    }
    fn stroke(&mut self) {
        self.calls += 1;
    }
    fn move_to(&mut self, _x: f32, _y: f32) {
        self.calls += 1;
    }
    fn line_to(&mut self, _x: f32, _y: f32) {
        self.calls += 1;
    }
    fn set_fill_color(&mut self, _color: Color) {
        self.calls += 1;
    }
    fn set_stroke_color(&mut self, _color: Color) {
        self.calls += 1;
    }
    fn set_line_width(&mut self, _width: f32) {
        self.calls += 1;
    }
}

/// `n` line strings and `n` polygons with a handful of alternating styles
fn make_group(n: usize) -> BatchGroup {
    let mut group = BatchGroup::new();
    let strokes = [
        StrokeStyle::new(Color::from_hex(0x3366CC), 1.0),
        StrokeStyle::new(Color::from_hex(0xDC3912), 2.0),
    ];
    let fills = [
        FillStyle::new(Color::from_hex(0x109618)),
        FillStyle::new(Color::from_hex(0xFF9900)),
    ];

    for i in 0..n {
        let fi = i as f64;
        let z_index = Some((i % 4) as i32);

        let polygons = group.get_batch(z_index, BatchKind::Polygon);
        polygons.set_fill_stroke_style(Some(fills[i / 16 % 2]), None);
        polygons.draw_polygon_geometry(&Polygon::new((0..12).map(|k| {
            let t = k as f64 / 12.0 * std::f64::consts::TAU;
            Point::new((fi * 7.3) % 1920.0 + 20.0 * t.cos(), (fi * 13.7) % 1080.0 + 20.0 * t.sin())
        })));

        let lines = group.get_batch(z_index, BatchKind::LineString);
        lines.set_fill_stroke_style(None, Some(strokes[i / 8 % 2]));
        lines.draw_line_string_geometry(&LineString::new(
            (0..32).map(|k| Point::new(fi + k as f64 * 3.0, (fi * 0.31 + k as f64).sin() * 40.0)),
        ));
    }
    group.finish();
    group
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    for &count in &[100, 1_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| black_box(make_group(count)));
        });
    }
    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    for &count in &[100, 1_000, 10_000] {
        let mut batches = make_group(count);
        let transform = Transform2D::translate(-200.0, 100.0).then(&Transform2D::scale(0.5, -0.5));
        group.bench_function(BenchmarkId::from_parameter(count), |b| {
            b.iter(|| {
                let mut canvas = NullCanvas::default();
                batches.draw(&mut canvas, black_box(&transform));
                black_box(canvas.calls)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_compile, bench_replay);
criterion_main!(benches);
