//! Benchmarks for channel statistics, covariance adjustment and rescaling
//!
//! Run with: cargo bench --bench statistics

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reinhard_core::{Channel, Dimensions, Gamut, Plane, WorkingImage};
use reinhard_stats::{
    cross_correlation, image_stats, rescale, standardize, ChannelStats, CovarianceAdjustment,
    Decorrelating, Limited,
};

fn create_working_image(size: u32) -> WorkingImage {
    let dims = Dimensions::new(size, size);
    let n = (size * size) as usize;
    let l: Vec<f32> = (0..n).map(|i| (i % 100) as f32).collect();
    let a: Vec<f32> = (0..n).map(|i| ((i * 7) % 300) as f32 - 150.0).collect();
    let b: Vec<f32> = (0..n).map(|i| ((i * 13) % 200) as f32 - 80.0).collect();

    WorkingImage::from_planes([
        Plane::new(dims, l).unwrap(),
        Plane::new(dims, a).unwrap(),
        Plane::new(dims, b).unwrap(),
    ])
    .unwrap()
}

fn standardized_chroma(image: &WorkingImage) -> [Plane; 2] {
    [Channel::ChromaA, Channel::ChromaB].map(|c| {
        let plane = image.plane(c);
        standardize(plane, &ChannelStats::of(plane))
    })
}

fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("Channel statistics");

    for size in [64u32, 512] {
        let image = create_working_image(size);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("image_stats", size), &image, |b, img| {
            b.iter(|| image_stats(black_box(img)));
        });

        let [za, zb] = standardized_chroma(&image);
        group.bench_with_input(
            BenchmarkId::new("cross_correlation", size),
            &(za, zb),
            |b, (za, zb)| b.iter(|| cross_correlation(black_box(za), black_box(zb))),
        );
    }

    group.finish();
}

fn bench_covariance(c: &mut Criterion) {
    let mut group = c.benchmark_group("Covariance adjustment");
    let image = create_working_image(512);
    let [za, zb] = standardized_chroma(&image);

    let limited = Limited::new(0.5);
    group.bench_function("limited_0.5", |b| {
        b.iter(|| limited.adjust([black_box(&za), black_box(&zb)], 0.3));
    });

    group.bench_function("decorrelating", |b| {
        b.iter(|| Decorrelating.adjust([black_box(&za), black_box(&zb)], 0.3));
    });

    group.finish();
}

fn bench_rescale(c: &mut Criterion) {
    let gamut = Gamut {
        lightness: (0.0, 100.0),
        chroma: [127.0, 127.0],
    };
    let image = create_working_image(512);

    c.bench_function("rescale 512x512", |b| {
        b.iter(|| rescale(black_box(image.clone()), &gamut).unwrap());
    });
}

criterion_group!(benches, bench_stats, bench_covariance, bench_rescale);
criterion_main!(benches);
