//! End-to-end synthesis tests, including the pinned 2x4 scenario.
//!
//! Expected values are rebuilt here from the documented algorithm
//! (band order, flip, log-frequency mapping, phase draws, linear
//! envelope resampling, epsilon-guarded normalization) rather than
//! hard-coded, so a regression in any one step shows up as a mismatch.

use std::f64::consts::PI;

use specart_synth::resample::linspace;
use specart_synth::rng::{create_rng, draw_phases, PHASE_SEED};
use specart_synth::{synthesize, IntensityMatrix, SynthParams};

const NORM_EPSILON: f64 = 1e-10;

/// Straight-line lerp over ascending knots, zero outside. Deliberately
/// a naive scan, independent of the engine's implementation.
fn lerp_envelope(t: f64, knots: &[f64], values: &[f64]) -> f64 {
    let last = knots.len() - 1;
    if t < knots[0] || t > knots[last] {
        return 0.0;
    }
    for seg in 0..last {
        if t <= knots[seg + 1] {
            let frac = (t - knots[seg]) / (knots[seg + 1] - knots[seg]);
            return values[seg] + (values[seg + 1] - values[seg]) * frac;
        }
    }
    values[last]
}

#[test]
fn test_two_by_four_scenario() {
    // Top image row = highest band; after the vertical flip, band 0 is
    // the source's bottom row.
    let matrix = IntensityMatrix::from_rows(&[
        vec![0, 0, 255, 255],
        vec![255, 255, 0, 0],
    ])
    .unwrap();
    let params = SynthParams {
        min_freq: 100.0,
        max_freq: 200.0,
        duration_seconds: 1.0,
        sample_rate: 8,
        invert: false,
    };

    let audio = synthesize(&matrix, &params).unwrap();
    assert_eq!(audio.len(), 8);

    let column_times = linspace(0.0, 1.0, 4);
    let sample_times = linspace(0.0, 1.0, 8);
    let mut rng = create_rng(PHASE_SEED);
    let phases = draw_phases(&mut rng, 2);

    // Band 0: source row 1, 100 Hz. Band 1: source row 0, 100 * 2^(1/2) Hz.
    let band_envelopes = [
        [1.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 1.0],
    ];

    let mut expected = vec![0.0f64; 8];
    for band in 0..2 {
        let freq = 100.0 * (band as f64 / 2.0 * (200.0f64 / 100.0).ln()).exp();
        for (sample, &t) in expected.iter_mut().zip(&sample_times) {
            let amp = lerp_envelope(t, &column_times, &band_envelopes[band]);
            *sample += amp * (2.0 * PI * freq * (t + phases[band])).sin();
        }
    }
    let peak = expected.iter().fold(0.0f64, |acc, &s| acc.max(s.abs()));
    for sample in &mut expected {
        *sample /= peak + NORM_EPSILON;
    }

    for (i, (&got, &want)) in audio.iter().zip(&expected).enumerate() {
        assert!(
            (got - want).abs() < 1e-9,
            "sample {i}: got {got}, want {want}"
        );
    }
}

#[test]
fn test_single_band_is_a_pure_enveloped_sine() {
    // One full-intensity row: the output is one 250 Hz sine at unit
    // envelope, rescaled to peak.
    let matrix = IntensityMatrix::new(1, 16, vec![255; 16]).unwrap();
    let params = SynthParams {
        min_freq: 250.0,
        max_freq: 500.0,
        duration_seconds: 0.1,
        sample_rate: 4000,
        invert: false,
    };

    let audio = synthesize(&matrix, &params).unwrap();

    let sample_times = linspace(0.0, 0.1, 400);
    let mut rng = create_rng(PHASE_SEED);
    let phase = draw_phases(&mut rng, 1)[0];

    let raw: Vec<f64> = sample_times
        .iter()
        .map(|&t| (2.0 * PI * 250.0 * (t + phase)).sin())
        .collect();
    let peak = raw.iter().fold(0.0f64, |acc, &s| acc.max(s.abs()));

    for (i, (&got, &r)) in audio.iter().zip(&raw).enumerate() {
        let want = r / (peak + NORM_EPSILON);
        assert!(
            (got - want).abs() < 1e-9,
            "sample {i}: got {got}, want {want}"
        );
    }
}

#[test]
fn test_rerun_is_bit_identical() {
    let matrix = IntensityMatrix::from_rows(&[
        vec![10, 200, 30],
        vec![250, 0, 80],
        vec![5, 120, 240],
    ])
    .unwrap();
    let params = SynthParams {
        min_freq: 300.0,
        max_freq: 3000.0,
        duration_seconds: 0.2,
        sample_rate: 22050,
        invert: false,
    };

    let first = synthesize(&matrix, &params).unwrap();
    let second = synthesize(&matrix, &params).unwrap();
    assert_eq!(first, second, "synthesis must be bit-reproducible");
}

#[test]
fn test_invert_symmetry() {
    let matrix = IntensityMatrix::from_rows(&[vec![0, 64, 128, 192, 255]]).unwrap();
    let params = SynthParams {
        min_freq: 440.0,
        max_freq: 880.0,
        duration_seconds: 0.05,
        sample_rate: 8000,
        invert: true,
    };
    let plain_params = SynthParams {
        invert: false,
        ..params
    };

    let inverted = synthesize(&matrix, &params).unwrap();
    let pre_inverted = synthesize(&matrix.inverted(), &plain_params).unwrap();
    assert_eq!(inverted, pre_inverted);
}

#[test]
fn test_invalid_band_is_rejected_before_synthesis() {
    let matrix = IntensityMatrix::new(1, 1, vec![255]).unwrap();
    let base = SynthParams {
        min_freq: 100.0,
        max_freq: 200.0,
        duration_seconds: 1.0,
        sample_rate: 8,
        invert: false,
    };

    for params in [
        SynthParams { min_freq: 0.0, ..base },
        SynthParams { min_freq: -5.0, ..base },
        SynthParams { max_freq: 100.0, ..base },
        SynthParams { duration_seconds: -1.0, ..base },
        SynthParams { sample_rate: 0, ..base },
    ] {
        let err = synthesize(&matrix, &params).unwrap_err();
        assert!(err.to_string().starts_with("invalid parameter"));
    }
}
