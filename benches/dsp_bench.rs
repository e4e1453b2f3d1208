//! Benchmarks for the render path.
//!
//! Run with: cargo bench
//!
//! The render callback has to finish well inside its block deadline:
//! at 48kHz, a 512-frame block gives a 10.67ms budget. Everything here
//! measures per-block cost at the buffer sizes cpal typically hands us.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use entrain_dsp::dsp::noise::{BrownNoise, PinkNoise, WhiteNoise};
use entrain_dsp::dsp::oscillator::OscillatorBlock;
use entrain_dsp::engine::{ModulationSettings, NoiseType, SignalEngine};
use entrain_dsp::presets;

/// Common buffer sizes used in audio applications.
const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

const SAMPLE_RATE: f32 = 48_000.0;

fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut osc = OscillatorBlock::sine();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), 440.0, SAMPLE_RATE);
            })
        });

        let mut osc = OscillatorBlock::triangle();
        group.bench_with_input(BenchmarkId::new("triangle", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer), 440.0, SAMPLE_RATE);
            })
        });
    }

    group.finish();
}

fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        let mut white = WhiteNoise::new();
        group.bench_with_input(BenchmarkId::new("white", size), &size, |b, _| {
            b.iter(|| white.render(black_box(&mut buffer)))
        });

        let mut pink = PinkNoise::new();
        group.bench_with_input(BenchmarkId::new("pink", size), &size, |b, _| {
            b.iter(|| pink.render(black_box(&mut buffer)))
        });

        let mut brown = BrownNoise::new();
        group.bench_with_input(BenchmarkId::new("brown", size), &size, |b, _| {
            b.iter(|| brown.render(black_box(&mut buffer)))
        });
    }

    group.finish();
}

/// Whole-engine render with every modulation stage live. This is the worst
/// case the device callback will ever see for a single graph.
fn bench_engine_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/render");

    let full_chain = ModulationSettings {
        carrier_frequency: 200.0,
        beat_frequency: 10.0,
        binaural_intensity: 1.0,
        a_mod_depth: 0.5,
        stereo_depth: 0.5,
        f_mod_depth: 0.5,
        noise_type: NoiseType::Pink,
        noise_level: 0.3,
        mix_level: 0.8,
        volume: 0.5,
    };

    for (label, settings) in [
        ("default_preset", presets::get_default()),
        ("full_chain", full_chain),
    ] {
        for &size in BLOCK_SIZES {
            let mut engine = SignalEngine::offline(SAMPLE_RATE);
            engine.play(settings);
            let mut left = vec![0.0f32; size];
            let mut right = vec![0.0f32; size];

            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    engine.render_offline(black_box(&mut left), black_box(&mut right));
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_oscillator, bench_noise, bench_engine_render);
criterion_main!(benches);
