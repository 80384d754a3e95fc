//! Time-axis construction and envelope resampling.
//!
//! An image column only exists at `cols` evenly spaced instants across
//! the output duration, while the audio buffer needs an amplitude at
//! every sample instant. This module builds both time axes and
//! resamples an envelope from one onto the other with piecewise-linear
//! interpolation. Outside the image's temporal extent the envelope is
//! silent: no extrapolation, just zero.

/// Returns `count` evenly spaced points covering `[start, stop]`,
/// endpoints inclusive.
///
/// `count == 1` yields `[start]`. The final point is pinned to `stop`
/// exactly rather than accumulated from the step, so the last sample
/// instant always lands on the last column instant.
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            let mut points: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            points[count - 1] = stop;
            points
        }
    }
}

/// Resamples `values` (defined at ascending `xs`) onto `sample_xs`.
///
/// Piecewise-linear between knots; `0.0` for any query before `xs[0]`
/// or after `xs[last]`.
///
/// # Panics
/// Debug-asserts that `xs` and `values` have equal, nonzero length.
pub fn interp_zero(sample_xs: &[f64], xs: &[f64], values: &[f64]) -> Vec<f64> {
    debug_assert_eq!(xs.len(), values.len());
    debug_assert!(!xs.is_empty());
    sample_xs.iter().map(|&x| interp_one(x, xs, values)).collect()
}

fn interp_one(x: f64, xs: &[f64], values: &[f64]) -> f64 {
    let last = xs.len() - 1;
    if x < xs[0] || x > xs[last] {
        return 0.0;
    }
    // First knot strictly past x; 0 is impossible here since x >= xs[0].
    let hi = xs.partition_point(|&knot| knot <= x);
    if hi > last {
        return values[last];
    }
    let lo = hi - 1;
    let span = xs[hi] - xs[lo];
    if span == 0.0 {
        return values[lo];
    }
    let frac = (x - xs[lo]) / span;
    values[lo] + (values[hi] - values[lo]) * frac
}
