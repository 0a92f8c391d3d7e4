use blankscan::analysis::{count_nonzero, dominant_solid_color};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, GrayImage, Luma};

fn bench_blank_check(c: &mut Criterion) {
    let blank = GrayImage::new(1920, 1080);
    let mut last_lit = GrayImage::new(1920, 1080);
    last_lit.put_pixel(1919, 1079, Luma([1]));

    c.bench_function("count_nonzero 1080p blank", |b| {
        b.iter(|| count_nonzero(black_box(&blank)))
    });
    c.bench_function("count_nonzero 1080p one lit", |b| {
        b.iter(|| count_nonzero(black_box(&last_lit)))
    });

    let dynamic = DynamicImage::ImageLuma8(last_lit);
    c.bench_function("dominant_solid_color 1080p", |b| {
        b.iter(|| dominant_solid_color(black_box(&dynamic), 80.0))
    });
}

criterion_group!(benches, bench_blank_check);
criterion_main!(benches);
