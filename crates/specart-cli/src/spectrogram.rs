//! Spectrogram preview rendering.
//!
//! Short-time Fourier magnitude of the generated audio, written as a
//! grayscale PNG with frequency increasing upward. Presentational
//! only; synthesis correctness does not depend on it.

use std::path::Path;

use anyhow::{Context, Result};
use image::{GrayImage, ImageFormat, Luma};
use rustfft::{num_complex::Complex, FftPlanner};

const FFT_SIZE: usize = 1024;
const HOP_SIZE: usize = FFT_SIZE / 4;
const DB_FLOOR: f32 = 1e-10;

/// Renders an STFT magnitude image of the samples.
///
/// One pixel column per analysis frame, one pixel row per positive
/// frequency bin (highest frequency at the top), log-magnitude mapped
/// onto the full grayscale range.
pub fn spectrogram_image(samples: &[f64]) -> GrayImage {
    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(FFT_SIZE);

    // Hann window
    let window: Vec<f32> = (0..FFT_SIZE)
        .map(|i| 0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / FFT_SIZE as f32).cos()))
        .collect();

    let num_frames = if samples.len() > FFT_SIZE {
        (samples.len() - FFT_SIZE) / HOP_SIZE + 1
    } else {
        1
    };
    let nyquist = FFT_SIZE / 2;

    let mut columns: Vec<Vec<f32>> = Vec::with_capacity(num_frames);
    let mut min_db = f32::MAX;
    let mut max_db = f32::MIN;

    let mut buffer = vec![Complex::new(0.0f32, 0.0f32); FFT_SIZE];
    for frame in 0..num_frames {
        let start = frame * HOP_SIZE;
        for (i, slot) in buffer.iter_mut().enumerate() {
            let sample = samples.get(start + i).copied().unwrap_or(0.0) as f32;
            *slot = Complex::new(sample * window[i], 0.0);
        }
        fft.process(&mut buffer);

        let column: Vec<f32> = buffer
            .iter()
            .take(nyquist)
            .map(|c| {
                let power = c.re * c.re + c.im * c.im;
                10.0 * (power + DB_FLOOR).log10()
            })
            .collect();
        for &db in &column {
            min_db = min_db.min(db);
            max_db = max_db.max(db);
        }
        columns.push(column);
    }

    let range = (max_db - min_db).max(f32::EPSILON);
    let mut img = GrayImage::new(num_frames as u32, nyquist as u32);
    for (x, column) in columns.iter().enumerate() {
        for (bin, &db) in column.iter().enumerate() {
            let level = ((db - min_db) / range * 255.0).round() as u8;
            // Bin 0 (DC) sits at the bottom of the image.
            let y = (nyquist - 1 - bin) as u32;
            img.put_pixel(x as u32, y, Luma([level]));
        }
    }
    img
}

/// Renders the spectrogram and writes it as a PNG.
pub fn write_png(samples: &[f64], path: &Path) -> Result<()> {
    let img = spectrogram_image(samples);
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("failed to write spectrogram: {}", path.display()))
}
