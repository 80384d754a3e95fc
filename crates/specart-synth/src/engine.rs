//! Core synthesis routine.
//!
//! Maps a 2-D intensity matrix into a 1-D audio buffer: each image row
//! becomes the amplitude envelope of one sine oscillator, oscillator
//! frequency follows row position on a log scale, and the summed bank
//! is normalized to unit peak. Pure and single-pass; the only output
//! is the returned buffer.

use std::f64::consts::PI;

use crate::error::{SynthError, SynthResult};
use crate::matrix::IntensityMatrix;
use crate::resample::{interp_zero, linspace};
use crate::rng::{create_rng, draw_phases, PHASE_SEED};

/// Guard against division by zero when the whole buffer is silent.
const NORM_EPSILON: f64 = 1e-10;

/// Parameters for one synthesis run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SynthParams {
    /// Lowest oscillator frequency in Hz (bottom image row).
    pub min_freq: f64,
    /// Highest oscillator frequency in Hz (top image row).
    pub max_freq: f64,
    /// Output duration in seconds.
    pub duration_seconds: f64,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Invert intensities (`v -> 255 - v`) before synthesis.
    pub invert: bool,
}

impl SynthParams {
    /// Validates the frequency band, duration, and sample rate.
    ///
    /// # Errors
    /// `InvalidParameter` when `min_freq <= 0`, `max_freq <= min_freq`,
    /// `duration_seconds <= 0`, `sample_rate == 0`, any of them is
    /// non-finite, or the duration rounds to zero output samples.
    pub fn validate(&self) -> SynthResult<()> {
        if !self.min_freq.is_finite() || self.min_freq <= 0.0 {
            return Err(SynthError::invalid_param(
                "min_freq",
                format!("must be a positive finite frequency, got {}", self.min_freq),
            ));
        }
        if !self.max_freq.is_finite() || self.max_freq <= self.min_freq {
            return Err(SynthError::invalid_param(
                "max_freq",
                format!(
                    "must be finite and greater than min_freq ({}), got {}",
                    self.min_freq, self.max_freq
                ),
            ));
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(SynthError::invalid_param(
                "duration_seconds",
                format!("must be a positive finite duration, got {}", self.duration_seconds),
            ));
        }
        if self.sample_rate == 0 {
            return Err(SynthError::invalid_param("sample_rate", "must be nonzero"));
        }
        if self.num_samples() == 0 {
            return Err(SynthError::invalid_param(
                "duration_seconds",
                format!(
                    "{} s at {} Hz rounds to zero output samples",
                    self.duration_seconds, self.sample_rate
                ),
            ));
        }
        Ok(())
    }

    /// Output buffer length: `round(duration * sample_rate)`.
    pub fn num_samples(&self) -> usize {
        (self.duration_seconds * self.sample_rate as f64).round() as usize
    }
}

/// Center frequency of one band, by geometric interpolation.
///
/// Band 0 sits exactly at `min_freq`; each step up multiplies by
/// `(max_freq / min_freq)^(1 / num_rows)`. The divisor is `num_rows`,
/// not `num_rows - 1`, so the top band approaches `max_freq` from
/// below rather than reaching it.
pub fn row_frequency(row: usize, num_rows: usize, min_freq: f64, max_freq: f64) -> f64 {
    min_freq * (row as f64 / num_rows as f64 * (max_freq / min_freq).ln()).exp()
}

/// Synthesizes an audio buffer from an intensity matrix.
///
/// The image is flipped vertically before band mapping: the top image
/// row lands on the highest frequency, so the rendered spectrogram
/// reads like the source image. Phase offsets come from a PCG32
/// generator seeded with a fixed constant, one draw per band in
/// bottom-to-top order, which makes the output bit-reproducible for
/// identical inputs.
///
/// # Arguments
/// * `matrix` - Intensity grid; never mutated (inversion copies)
/// * `params` - Frequency band, duration, sample rate, invert flag
///
/// # Returns
/// `params.num_samples()` samples normalized into `[-1, 1]`. An
/// all-zero matrix yields an all-zero buffer, not NaN.
pub fn synthesize(matrix: &IntensityMatrix, params: &SynthParams) -> SynthResult<Vec<f64>> {
    params.validate()?;

    let source = if params.invert {
        matrix.inverted()
    } else {
        matrix.clone()
    };
    let num_rows = source.rows();
    let num_samples = params.num_samples();

    let column_times = linspace(0.0, params.duration_seconds, source.cols());
    let sample_times = linspace(0.0, params.duration_seconds, num_samples);

    let mut rng = create_rng(PHASE_SEED);
    let phases = draw_phases(&mut rng, num_rows);

    let mut audio = vec![0.0f64; num_samples];
    let mut envelope = vec![0.0f64; source.cols()];

    for (band, &phase) in phases.iter().enumerate() {
        // Band 0 is the bottom image row; walk the matrix bottom-up.
        let row = source.row(num_rows - 1 - band);
        for (value, &raw) in envelope.iter_mut().zip(row) {
            *value = f64::from(raw) / 255.0;
        }
        let amplitudes = interp_zero(&sample_times, &column_times, &envelope);
        let freq = row_frequency(band, num_rows, params.min_freq, params.max_freq);

        for ((sample, &t), amp) in audio.iter_mut().zip(&sample_times).zip(amplitudes) {
            *sample += amp * (2.0 * PI * freq * (t + phase)).sin();
        }
    }

    let peak = audio.iter().fold(0.0f64, |acc, &s| acc.max(s.abs()));
    for sample in &mut audio {
        *sample /= peak + NORM_EPSILON;
    }

    Ok(audio)
}
