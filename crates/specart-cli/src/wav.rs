//! Deterministic WAV encoding.
//!
//! Writes 16-bit PCM mono WAV files with no timestamps or variable
//! metadata, so identical samples always produce identical bytes. The
//! BLAKE3 hash of the PCM data is surfaced for byte-identity checks.

use std::io::{self, Write};

/// WAV file format parameters.
#[derive(Debug, Clone, Copy)]
pub struct WavFormat {
    /// Number of channels (always 1 here).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (always 16 for this implementation).
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Creates a mono WAV format.
    pub fn mono(sample_rate: u32) -> Self {
        Self {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
        }
    }

    fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}

/// An encoded WAV file plus its PCM content hash.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hex digest of the raw PCM data.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
}

/// Writes a complete WAV file to a writer.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_all(&16u32.to_le_bytes())?; // Chunk size (16 for PCM)
    writer.write_all(&1u16.to_le_bytes())?; // Audio format (1 = PCM)
    writer.write_all(&format.channels.to_le_bytes())?;
    writer.write_all(&format.sample_rate.to_le_bytes())?;
    writer.write_all(&format.byte_rate().to_le_bytes())?;
    writer.write_all(&format.block_align().to_le_bytes())?;
    writer.write_all(&format.bits_per_sample.to_le_bytes())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Samples are expected to be in range [-1.0, 1.0]; values outside are
/// clipped.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        let pcm_value = (clipped * 32767.0).round() as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Encodes samples as a mono 16-bit WAV file.
pub fn encode_mono(samples: &[f64], sample_rate: u32) -> WavResult {
    let pcm = samples_to_pcm16(samples);
    let pcm_hash = blake3::hash(&pcm).to_hex().to_string();

    let format = WavFormat::mono(sample_rate);
    let mut wav_data = Vec::with_capacity(44 + pcm.len());
    write_wav(&mut wav_data, &format, &pcm).expect("writing to Vec should not fail");

    WavResult {
        wav_data,
        pcm_hash,
        sample_rate,
    }
}
