//! Benchmarks for complete voices.
//!
//! Each voice is rendered from its start, over the block where all of its
//! automation is still moving: the most expensive part of its life.

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use tabla_dsp::{
    dsp::noise::NoiseBuffer,
    graph::node::{GraphNode, RenderCtx},
    VoiceKind,
};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/voices");
    let ctx = RenderCtx::new(SAMPLE_RATE, 0.0);
    let noise = NoiseBuffer::generate(SAMPLE_RATE, &mut StdRng::seed_from_u64(0));

    let kinds = [
        ("dum", VoiceKind::Dum),
        ("tak", VoiceKind::Tak),
        ("sak", VoiceKind::Sak),
        ("clap", VoiceKind::Clap),
        ("zaghroota", VoiceKind::Zaghroota),
    ];

    for &size in BLOCK_SIZES {
        for (name, kind) in kinds {
            let mut buffer = vec![0.0f32; size];
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter_batched(
                    || kind.build(0.0, || noise.clone()),
                    |mut voice| {
                        voice.render_block(black_box(&mut buffer), black_box(&ctx));
                        voice
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }

    group.finish();
}
