//! Benchmarks for working colour space conversions
//!
//! Run with: cargo bench --bench color_spaces

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reinhard_color::color_space;
use reinhard_core::{ColorSpaceKind, Dimensions, DisplayImage, PixelLayout};

fn create_test_image(size: u32) -> DisplayImage {
    DisplayImage::from_fn(Dimensions::new(size, size), PixelLayout::Rgb, |x, y| {
        [
            ((x * 255) / size) as u8,
            ((y * 255) / size) as u8,
            (((x + y) * 255) / (2 * size)) as u8,
        ]
    })
    .unwrap()
}

fn bench_conversions(c: &mut Criterion) {
    for kind in [ColorSpaceKind::Lab, ColorSpaceKind::LogLms] {
        let space = color_space(kind);
        let mut group = c.benchmark_group(format!("{} conversion", space.name()));

        // 64x64 stays sequential, the larger sizes cross the rayon threshold
        for size in [64u32, 256, 1024] {
            let image = create_test_image(size);
            let working = space.to_working(&image).unwrap();
            group.throughput(Throughput::Elements((size * size) as u64));

            group.bench_with_input(BenchmarkId::new("to_working", size), &image, |b, img| {
                b.iter(|| space.to_working(black_box(img)).unwrap());
            });

            group.bench_with_input(BenchmarkId::new("from_working", size), &working, |b, w| {
                b.iter(|| space.from_working(black_box(w), PixelLayout::Rgb).unwrap());
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_conversions);
criterion_main!(benches);
