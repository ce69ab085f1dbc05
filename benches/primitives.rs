//! Throughput benchmarks for the hot drawing paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use softraster::blit::{blit, blit_blended};
use softraster::color::{Pixel, BLACK, GREEN, RED};
use softraster::rendering_buffer::PixelBuffer;
use softraster::renderer_primitives::{blend_line, fill_circle, fill_rect};

fn bench_fill_rect(c: &mut Criterion) {
    let mut buf = PixelBuffer::new(640, 480, 640).unwrap();
    c.bench_function("fill_rect_640x480", |b| {
        b.iter(|| fill_rect(&mut buf, black_box(RED), 0, 0, 640, 480));
    });
}

fn bench_fill_circle(c: &mut Criterion) {
    let mut buf = PixelBuffer::new(512, 512, 512).unwrap();
    c.bench_function("fill_circle_r200", |b| {
        b.iter(|| fill_circle(&mut buf, black_box(GREEN), 256, 256, 200));
    });
}

fn bench_blend_line(c: &mut Criterion) {
    let mut buf = PixelBuffer::new(640, 480, 640).unwrap();
    buf.clear(BLACK);
    let semi = Pixel::from_rgba(255, 255, 255, 128);
    c.bench_function("blend_line_diagonal", |b| {
        b.iter(|| blend_line(&mut buf, black_box(semi), 0, 0, 639, 479));
    });
}

fn bench_blit(c: &mut Criterion) {
    let mut sprite = PixelBuffer::new(128, 128, 128).unwrap();
    sprite.clear(Pixel::from_rgba(200, 100, 50, 128));
    let mut dst = PixelBuffer::new(640, 480, 640).unwrap();
    dst.clear(BLACK);

    c.bench_function("blit_128", |b| {
        b.iter(|| blit(&sprite, &mut dst, black_box(100), black_box(100)));
    });
    c.bench_function("blit_blended_128", |b| {
        b.iter(|| blit_blended(&sprite, &mut dst, black_box(100), black_box(100)));
    });
}

criterion_group!(
    benches,
    bench_fill_rect,
    bench_fill_circle,
    bench_blend_line,
    bench_blit
);
criterion_main!(benches);
