//! Benchmark for noise buffer generation.
//!
//! Every noisy hit allocates and fills a fresh 2 s buffer on the control
//! side, so this is the cost paid per dum, tak, sak and clap.

use std::hint::black_box;

use criterion::Criterion;
use rand::{rngs::StdRng, SeedableRng};
use tabla_dsp::dsp::noise::NoiseBuffer;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");
    let mut rng = StdRng::seed_from_u64(0);

    for sample_rate in [44_100.0f32, 48_000.0] {
        group.bench_function(format!("generate_{}", sample_rate as u32), |b| {
            b.iter(|| NoiseBuffer::generate(black_box(sample_rate), &mut rng))
        });
    }

    group.finish();
}
