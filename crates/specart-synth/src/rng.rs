//! Deterministic RNG for per-band phase offsets.
//!
//! All randomness in the engine flows through this module. Phase draws
//! use PCG32 with a fixed seed so that identical inputs always produce
//! byte-identical audio.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Fixed seed for the phase generator.
///
/// Seeded once per `synthesize` call, never from ambient process state,
/// so two runs over the same image and parameters are bit-identical.
pub const PHASE_SEED: u32 = 1;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in
/// both halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Draws one phase offset in `[0, 1)` per frequency band.
///
/// Draw order is the band order (lowest frequency first); the draws are
/// pre-collected so the attribution stays fixed even if the per-band
/// oscillator work is ever fanned out.
pub fn draw_phases(rng: &mut Pcg32, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen::<f64>()).collect()
}
