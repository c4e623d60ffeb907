use criterion::{criterion_group, criterion_main, Criterion};
use gridmatch::{decode, ChannelOrder, Color, Grid, MatchConfig, Matcher, PixelLayout, Tolerance};
use std::hint::black_box;

fn make_bgr(width: usize, height: usize, stride: usize) -> Vec<u8> {
    let mut data = vec![0u8; stride * height];
    for y in 0..height {
        for x in 0..width {
            let value = ((x * 13) ^ (y * 7) ^ (x * y)) as u8;
            let idx = y * stride + x * 3;
            data[idx] = value;
            data[idx + 1] = value.wrapping_mul(3);
            data[idx + 2] = value.wrapping_add(90);
        }
    }
    data
}

fn bench_decode(c: &mut Criterion) {
    let (width, height) = (640, 480);
    let stride = width * 3 + 4;
    let data = make_bgr(width, height, stride);
    let layout = PixelLayout::new(width, height, stride, ChannelOrder::Bgr);

    c.bench_function("decode_bgr_640x480_padded", |b| {
        b.iter(|| black_box(decode(black_box(&data), layout).unwrap()));
    });
}

fn bench_search(c: &mut Criterion) {
    let (width, height) = (320, 240);
    let stride = width * 3;
    let data = make_bgr(width, height, stride);
    let source = decode(&data, PixelLayout::new(width, height, stride, ChannelOrder::Bgr)).unwrap();

    let template = source.crop(250, 200, 24, 16).unwrap();
    let exact = Matcher::new(template.clone());
    c.bench_function("find_exact_24x16_in_320x240", |b| {
        b.iter(|| black_box(exact.find(black_box(&source))));
    });

    let tolerant = Matcher::new(template)
        .with_config(MatchConfig::with_tolerance(Tolerance::new(0.02).unwrap()));
    c.bench_function("find_tolerance_24x16_in_320x240", |b| {
        b.iter(|| black_box(tolerant.find(black_box(&source))));
    });

    let absent = Matcher::new(Grid::filled(16, 16, Color::rgb(1, 2, 3)).unwrap());
    c.bench_function("find_absent_16x16_in_320x240", |b| {
        b.iter(|| black_box(absent.find(black_box(&source))));
    });
}

criterion_group!(benches, bench_decode, bench_search);
criterion_main!(benches);
