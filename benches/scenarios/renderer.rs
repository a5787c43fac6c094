//! Benchmark for the renderer under load.
//!
//! Queues one bar of maqsum plus a double clap and a trill on an offline
//! context, then times a device-sized callback: the worst moment of a
//! hype session.

use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use tabla_dsp::{
    dsp::noise::NoiseBuffer,
    engine::{AudioContext, Renderer},
    EngineConfig, VoiceKind,
};

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f32 = 48_000.0;

const BUSY_BAR: [VoiceKind; 9] = [
    VoiceKind::Dum,
    VoiceKind::Sak,
    VoiceKind::Tak,
    VoiceKind::Sak,
    VoiceKind::Dum,
    VoiceKind::Tak,
    VoiceKind::Clap,
    VoiceKind::Clap,
    VoiceKind::Zaghroota,
];

fn busy_renderer(noise: &NoiseBuffer) -> (AudioContext, Renderer) {
    let (context, renderer) = AudioContext::offline(SAMPLE_RATE, &EngineConfig::default());
    let _ = context.create_master_gain(0.8);
    for kind in BUSY_BAR {
        let _ = context.schedule(kind.build(0.0, || noise.clone()));
    }
    (context, renderer)
}

pub fn bench_renderer(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/renderer");
    let noise = NoiseBuffer::generate(SAMPLE_RATE, &mut StdRng::seed_from_u64(0));

    for &size in BLOCK_SIZES {
        // Stereo device buffer
        let mut data = vec![0.0f32; size * 2];
        group.bench_with_input(BenchmarkId::new("busy_bar", size), &size, |b, _| {
            b.iter_batched(
                || busy_renderer(&noise),
                |(context, mut renderer)| {
                    renderer.render_interleaved(black_box(&mut data), 2);
                    (context, renderer)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}
