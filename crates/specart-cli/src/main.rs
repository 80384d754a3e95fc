//! specart - spectrogram-art audio generator
//!
//! Encodes an image into audio whose spectrogram reproduces the image:
//! each image row drives one sine oscillator on a log-frequency axis.
//! The synthesis itself lives in `specart-synth`; this binary is the
//! glue around it (image decode, WAV encode, spectrogram preview).

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use specart_synth::{row_frequency, synthesize, SynthParams};

mod image_input;
mod spectrogram;
mod wav;

use image_input::Channel;

/// Spectrogram-art audio generator
#[derive(Parser)]
#[command(name = "specart")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input image
    #[arg(short, long)]
    input: PathBuf,

    /// Output WAV path (".wav" is appended when missing)
    #[arg(short, long)]
    output: PathBuf,

    /// Lowest oscillator frequency in Hz
    #[arg(long, default_value_t = 500.0)]
    min_freq: f64,

    /// Highest oscillator frequency in Hz
    #[arg(long, default_value_t = 10_000.0)]
    max_freq: f64,

    /// Output duration in seconds
    #[arg(short, long)]
    duration: f64,

    /// Output sample rate in Hz
    #[arg(long, default_value_t = 44_100)]
    sample_rate: u32,

    /// Invert image intensities before synthesis
    #[arg(long)]
    invert: bool,

    /// Image channel to encode
    #[arg(long, value_enum, default_value_t = Channel::Grayscale)]
    channel: Channel,

    /// Also write a spectrogram preview PNG to this path
    #[arg(long)]
    spectrogram: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let matrix = image_input::load_channel(&cli.input, cli.channel)?;

    println!(
        "{} {} ({} channel, {} bands x {} steps)",
        "Source:".cyan().bold(),
        cli.input.display(),
        cli.channel.label(),
        matrix.rows(),
        matrix.cols(),
    );

    let params = SynthParams {
        min_freq: cli.min_freq,
        max_freq: cli.max_freq,
        duration_seconds: cli.duration,
        sample_rate: cli.sample_rate,
        invert: cli.invert,
    };
    let top_freq = row_frequency(matrix.rows() - 1, matrix.rows(), cli.min_freq, cli.max_freq);
    println!(
        "{} {:.1} Hz - {:.1} Hz over {} s at {} Hz",
        "Band:".cyan().bold(),
        cli.min_freq,
        top_freq,
        cli.duration,
        cli.sample_rate,
    );

    let audio = synthesize(&matrix, &params)?;

    let out_path = with_wav_extension(&cli.output);
    let result = wav::encode_mono(&audio, cli.sample_rate);
    fs::write(&out_path, &result.wav_data)
        .with_context(|| format!("failed to write audio: {}", out_path.display()))?;

    println!("{} {}", "PCM hash:".dimmed(), result.pcm_hash);
    println!(
        "{} {} ({} samples)",
        "Wrote".green().bold(),
        out_path.display(),
        audio.len(),
    );

    if let Some(preview_path) = &cli.spectrogram {
        spectrogram::write_png(&audio, preview_path)?;
        println!(
            "{} {}",
            "Spectrogram preview:".green().bold(),
            preview_path.display(),
        );
    }

    Ok(())
}

/// Appends ".wav" unless the path already ends in it.
fn with_wav_extension(path: &Path) -> PathBuf {
    let already_wav = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("wav"));
    if already_wav {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".wav");
        PathBuf::from(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wav_extension_appended() {
        assert_eq!(
            with_wav_extension(Path::new("out")),
            PathBuf::from("out.wav")
        );
        assert_eq!(
            with_wav_extension(Path::new("out.png")),
            PathBuf::from("out.png.wav")
        );
    }

    #[test]
    fn test_wav_extension_preserved() {
        assert_eq!(
            with_wav_extension(Path::new("out.wav")),
            PathBuf::from("out.wav")
        );
        assert_eq!(
            with_wav_extension(Path::new("out.WAV")),
            PathBuf::from("out.WAV")
        );
    }
}
