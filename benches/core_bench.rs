use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_editor::{Curve, CurveCollection, CurveKind, Point, RecomputeMode};
use std::hint::black_box;

fn wave_nodes(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = i as f64 * 25.0;
            let y = if i % 2 == 0 { 0.0 } else { 80.0 + (i % 5) as f64 * 10.0 };
            Point::new(x, y)
        })
        .collect()
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");

    for kind in [CurveKind::Bezier, CurveKind::CubicSpline, CurveKind::InterpolationPolynomial] {
        for (label, mode) in [("exact", RecomputeMode::Exact), ("fast", RecomputeMode::Fast)] {
            group.bench_with_input(
                BenchmarkId::new(format!("{}_{}", kind.label(), label), 12),
                &mode,
                |b, &mode| {
                    let mut curve = Curve::with_nodes(kind, wave_nodes(12));
                    b.iter(|| {
                        // Revision erhöhen, damit jede Iteration wirklich rechnet
                        curve.translate(Point::new(0.5, 0.0));
                        curve.recompute(black_box(mode));
                        black_box(curve.points().len())
                    })
                },
            );
        }
    }

    group.finish();
}

fn build_collection(curve_count: usize) -> CurveCollection {
    let mut collection = CurveCollection::new();
    for index in 0..curve_count {
        let offset = Point::new(0.0, index as f64 * 150.0);
        let nodes = wave_nodes(6).into_iter().map(|p| p + offset).collect();
        let mut curve = Curve::with_nodes(CurveKind::Bezier, nodes);
        curve.recompute(RecomputeMode::Exact);
        collection.add(curve, false);
    }
    collection
}

fn bench_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_testing");

    for &curve_count in &[10usize, 100usize] {
        let collection = build_collection(curve_count);
        let queries: Vec<Point> = (0..256)
            .map(|i| Point::new((i % 16) as f64 * 8.0, (i / 16) as f64 * 90.0))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("nearest_curve", curve_count),
            &collection,
            |b, collection| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &queries {
                        if let Some(hit) = collection.distance_to_nearest_curve(black_box(*point)) {
                            if hit.distance < 10.0 {
                                hits += 1;
                            }
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_recompute, bench_hit_testing);
criterion_main!(core_benches);
