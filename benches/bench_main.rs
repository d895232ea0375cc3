use std::f64::consts::TAU;
use std::hint::black_box;

use cartometer::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use geo::Point;

fn ring(count: usize) -> Vec<Point<f64>> {
    (0..count)
        .map(|i| {
            let t = i as f64 / count as f64 * TAU;
            Point::new(73.05 + t.cos() * 0.05, 33.68 + t.sin() * 0.05)
        })
        .collect()
}

fn bench_recompute(c: &mut Criterion) {
    let points = ring(100);

    c.bench_function("area_recompute_100_points", |b| {
        b.iter(|| {
            let mut engine = MeasurementEngine::new();
            engine.toggle_mode(MeasureMode::Area);
            for p in &points {
                engine.add_point(*p);
            }
            black_box(engine.result().map(MeasurementResult::total))
        });
    });

    c.bench_function("distance_recompute_100_points", |b| {
        b.iter(|| {
            let mut engine = MeasurementEngine::new();
            engine.toggle_mode(MeasureMode::Distance);
            for p in &points {
                engine.add_point(*p);
            }
            black_box(engine.result().map(MeasurementResult::total))
        });
    });
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
