//! X-Axis Crossings (RPB)
//!
//! Counts how many times the cursor crosses the vertical midline, as
//! strict sign changes between consecutive x samples. A sample exactly at
//! x = 0 has no sign, so touching the midline without passing through it
//! is not a crossing; this matches the established measure definition and
//! is kept as-is for reproducibility.

/// Count strict sign changes in consecutive x samples
pub fn axis_crossings(xs: &[f64]) -> u32 {
    xs.windows(2)
        .filter(|w| (w[0] > 0.0 && w[1] < 0.0) || (w[0] < 0.0 && w[1] > 0.0))
        .count() as u32
}
