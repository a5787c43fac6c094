//! Benchmarks for automation timelines.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tabla_dsp::dsp::envelope::Envelope;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    // Bass-hit gain: one exponential decay
    let decay = Envelope::new(1.0)
        .set_value_at(1.0, 0.0)
        .exponential_ramp_to(0.01, 0.35);

    // Clap gain: linear attack then exponential decay
    let clap = Envelope::new(1.0)
        .set_value_at(0.0, 0.0)
        .linear_ramp_to(0.6, 0.005)
        .exponential_ramp_to(0.01, 0.2);

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("exponential", size), &size, |b, _| {
            b.iter(|| {
                decay.render(black_box(&mut buffer), black_box(0.1), SAMPLE_RATE);
            })
        });

        group.bench_with_input(BenchmarkId::new("attack_decay", size), &size, |b, _| {
            b.iter(|| {
                clap.render(black_box(&mut buffer), black_box(0.003), SAMPLE_RATE);
            })
        });

        // Past the last event: the hold path
        group.bench_with_input(BenchmarkId::new("hold", size), &size, |b, _| {
            b.iter(|| {
                clap.render(black_box(&mut buffer), black_box(1.0), SAMPLE_RATE);
            })
        });
    }

    group.finish();
}
