//! End-to-end colour transfer benchmarks
//!
//! Run with: cargo bench --bench end_to_end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reinhard::{
    ColorSpaceKind, Dimensions, DisplayImage, PixelLayout, TransferEngine, TransferOptions,
};

fn create_pair(size: u32) -> (DisplayImage, DisplayImage) {
    let dims = Dimensions::new(size, size);
    let source = DisplayImage::from_fn(dims, PixelLayout::Rgb, |x, y| {
        [(128 + x * 127 / size) as u8, (40 + y * 80 / size) as u8, 30]
    })
    .unwrap();
    let target = DisplayImage::from_fn(dims, PixelLayout::Rgb, |x, y| {
        [20, (60 + x * 100 / size) as u8, (100 + y * 155 / size) as u8]
    })
    .unwrap();
    (source, target)
}

fn bench_transfer(c: &mut Criterion) {
    let mut group = c.benchmark_group("Transfer");
    group.sample_size(20);

    for kind in [ColorSpaceKind::Lab, ColorSpaceKind::LogLms] {
        let engine = TransferEngine::new(TransferOptions::default().color_space(kind)).unwrap();

        for size in [128u32, 512] {
            let (source, target) = create_pair(size);
            group.throughput(Throughput::Elements((size * size) as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", kind), size),
                &(source, target),
                |b, (s, t)| b.iter(|| engine.transfer(black_box(s), black_box(t)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Iterations");
    let (source, target) = create_pair(256);

    for iterations in [1u32, 2, 4] {
        let engine = TransferEngine::new(TransferOptions::new().iterations(iterations)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(iterations), &iterations, |b, _| {
            b.iter(|| engine.transfer(black_box(&source), black_box(&target)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transfer, bench_iterations);
criterion_main!(benches);
