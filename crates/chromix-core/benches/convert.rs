//! Performance benchmarks for companding and profile conversion.
//!
//! Compares the table-driven batch companding path against the scalar
//! formulas, and measures batch conversion throughput through the XYZ hub.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chromix_core::color::{CieLab, Rgb};
use chromix_core::companding::{Companding, srgb};
use chromix_core::{ColorProfileConverter, ConversionOptions};

const SAMPLE_COUNTS: &[usize] = &[16, 256, 4096, 65536];

fn sample_data(count: usize) -> Vec<[f32; 4]> {
    (0..count)
        .map(|i| {
            let t = i as f32 / count as f32;
            [t, 1.0 - t, (t * 3.7).fract(), 1.0]
        })
        .collect()
}

fn bench_companding(c: &mut Criterion) {
    let mut group = c.benchmark_group("sRGB expand");

    for &count in SAMPLE_COUNTS {
        group.throughput(Throughput::Elements(count as u64));
        let data = sample_data(count);

        group.bench_with_input(BenchmarkId::new("batch", count), &count, |b, _| {
            b.iter(|| {
                let mut samples = data.clone();
                Companding::Srgb.expand_in_place(black_box(&mut samples));
                samples
            })
        });

        group.bench_with_input(BenchmarkId::new("scalar formula", count), &count, |b, _| {
            b.iter(|| {
                let mut samples = data.clone();
                for sample in samples.iter_mut() {
                    sample[0] = srgb::expand(black_box(sample[0]));
                    sample[1] = srgb::expand(black_box(sample[1]));
                    sample[2] = srgb::expand(black_box(sample[2]));
                }
                samples
            })
        });
    }

    group.finish();
}

fn bench_rgb_to_lab(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rgb -> CieLab");
    let converter = ColorProfileConverter::new(ConversionOptions::default());

    for &count in SAMPLE_COUNTS {
        group.throughput(Throughput::Elements(count as u64));

        let source: Vec<Rgb> = (0..count)
            .map(|i| {
                let t = i as f32 / count as f32;
                Rgb::new(t, (t * 2.0).fract(), 1.0 - t)
            })
            .collect();
        let mut destination = vec![CieLab::default(); count];

        group.bench_with_input(BenchmarkId::new("slice", count), &count, |b, _| {
            b.iter(|| {
                converter
                    .convert_slice(black_box(&source), black_box(&mut destination))
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_companding, bench_rgb_to_lab);
criterion_main!(benches);
