//! Image decoding and channel extraction.
//!
//! Turns an image file into the engine's intensity matrix: decode,
//! convert to RGB8, pull out one channel (or the channel average for
//! grayscale).

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use image::RgbImage;
use specart_synth::IntensityMatrix;

/// Which image channel feeds the synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Channel {
    /// Average of red, green, and blue.
    Grayscale,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Human-readable label for status output.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Grayscale => "grayscale",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

/// Loads an image and extracts the selected channel as a matrix.
pub fn load_channel(path: &Path, channel: Channel) -> Result<IntensityMatrix> {
    let img = image::open(path)
        .with_context(|| format!("failed to open image: {}", path.display()))?
        .to_rgb8();
    matrix_from_rgb(&img, channel)
}

/// Extracts one channel of an RGB image into an intensity matrix.
///
/// Image row 0 (top) becomes matrix row 0; the engine handles the
/// frequency-axis flip itself.
pub fn matrix_from_rgb(img: &RgbImage, channel: Channel) -> Result<IntensityMatrix> {
    let (width, height) = img.dimensions();
    let mut data = Vec::with_capacity((width * height) as usize);

    for pixel in img.pixels() {
        let [r, g, b] = pixel.0;
        let value = match channel {
            Channel::Grayscale => ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8,
            Channel::Red => r,
            Channel::Green => g,
            Channel::Blue => b,
        };
        data.push(value);
    }

    IntensityMatrix::new(height as usize, width as usize, data)
        .context("image has no pixels")
}
