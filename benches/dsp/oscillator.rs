//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use tabla_dsp::dsp::oscillator::OscillatorBlock;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let cases = [
            // sin() per sample
            ("sine", OscillatorBlock::sine(), 110.0),
            // PolyBLEP on one edge
            ("sawtooth", OscillatorBlock::sawtooth(), 440.0),
            // PolyBLEP on both edges, at the tak's pitch
            ("square", OscillatorBlock::square(), 2_000.0),
            ("triangle", OscillatorBlock::triangle(), 1_100.0),
        ];

        for (name, mut osc, freq) in cases {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for sample in buffer.iter_mut() {
                        *sample = osc.next_sample(black_box(freq), SAMPLE_RATE);
                    }
                    black_box(&buffer);
                })
            });
        }
    }

    group.finish();
}
