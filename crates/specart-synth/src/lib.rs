//! Spectrogram-Art Synthesis Engine
//!
//! This crate turns a 2-D intensity field (an image channel) into a
//! 1-D audio waveform. Each image row drives the amplitude envelope of
//! one sine oscillator; row position picks the oscillator frequency on
//! a logarithmic scale between a caller-supplied band. Played back and
//! viewed as a spectrogram, the image reappears as a
//! frequency-vs-time pattern.
//!
//! # Determinism
//!
//! Synthesis is deterministic. Given the same matrix and parameters,
//! the output is byte-identical across runs (on the same platform).
//! Per-band phase offsets come from a PCG32 generator seeded with a
//! fixed constant, drawn once per band in band order.
//!
//! # Example
//!
//! ```
//! use specart_synth::{synthesize, IntensityMatrix, SynthParams};
//!
//! let matrix = IntensityMatrix::from_rows(&[
//!     vec![0, 0, 255, 255],
//!     vec![255, 255, 0, 0],
//! ])?;
//! let params = SynthParams {
//!     min_freq: 100.0,
//!     max_freq: 200.0,
//!     duration_seconds: 1.0,
//!     sample_rate: 8,
//!     invert: false,
//! };
//!
//! let audio = synthesize(&matrix, &params)?;
//! assert_eq!(audio.len(), 8);
//! # Ok::<(), specart_synth::SynthError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`synthesize()`] - Main entry point
//! - [`matrix`] - Source intensity grid
//! - [`resample`] - Time axes and envelope interpolation
//! - [`rng`] - Deterministic phase generator
//! - [`error`] - Error types

pub mod engine;
pub mod error;
pub mod matrix;
pub mod resample;
pub mod rng;

// Re-export main types at crate root
pub use engine::{row_frequency, synthesize, SynthParams};
pub use error::{SynthError, SynthResult};
pub use matrix::IntensityMatrix;
