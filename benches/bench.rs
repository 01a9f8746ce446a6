// Criterion benchmarks for Garment Sizer

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use garment_sizer::core::{find_closest_size, predict, SizeChart, SizingEngine};
use garment_sizer::models::{BodySample, FitPreference, SizingRequest, Weighting};

fn bench_predict(c: &mut Criterion) {
    c.bench_function("predict", |b| {
        b.iter(|| predict(black_box(42.0), black_box(1.05)));
    });
}

fn bench_find_closest_size(c: &mut Criterion) {
    let chart = SizeChart::standard();
    let sample = BodySample::new(42.0, 38.0, 19.74);

    let mut group = c.benchmark_group("find_closest_size");

    for weighting in [Weighting::Standard, Weighting::ChestWeighted] {
        group.bench_with_input(
            BenchmarkId::new("weighting", format!("{:?}", weighting)),
            &weighting,
            |b, &weighting| {
                b.iter(|| find_closest_size(black_box(&chart), black_box(&sample), weighting));
            },
        );
    }

    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let engine = SizingEngine::size_and_pattern();

    let requests: Vec<SizingRequest> = (30..=55)
        .map(|chest| {
            SizingRequest::new(chest as f64, (chest - 5) as f64).with_fit(FitPreference::Relaxed)
        })
        .collect();

    c.bench_function("recommend_slider_sweep", |b| {
        b.iter(|| {
            for request in &requests {
                let _ = black_box(engine.recommend(black_box(request)));
            }
        });
    });
}

criterion_group!(benches, bench_predict, bench_find_closest_size, bench_recommend);

criterion_main!(benches);
