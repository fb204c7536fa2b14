//! Time Normalization
//!
//! Raw sampling rates vary per trial because recording stops at a
//! different natural endpoint each time. Resampling every trial to a
//! fixed number of time points puts them all on a common base, so that
//! cross-trial averaging and fixed-length feature vectors are meaningful.
//!
//! The interpolant is piecewise linear over the trial's own index domain
//! [0, n-1], evaluated at `timepoints` equally spaced positions. The
//! evaluation grid never leaves [0, n-1], so extrapolation cannot occur,
//! and integer grid positions reproduce the original samples exactly.

use crate::pipeline::trial::{Point, Trial};
use crate::{Error, Result};

/// A trial resampled to a fixed number of time points. The first and last
/// points correspond to trial start and trial end exactly.
#[derive(Debug, Clone)]
pub struct NormalizedTrajectory {
    points: Vec<Point>,
}

impl NormalizedTrajectory {
    /// Resample a trial to `timepoints` samples via linear interpolation.
    /// Requires at least 2 real samples on each axis.
    pub fn from_trial(trial: &Trial, timepoints: usize) -> Result<Self> {
        if !trial.is_viable() {
            return Err(Error::InsufficientData(format!(
                "trial has {} x / {} y samples, need at least 2 for interpolation",
                trial.xs().len(),
                trial.ys().len()
            )));
        }

        let xs = resample_linear(trial.xs(), timepoints);
        let ys = resample_linear(trial.ys(), timepoints);
        let points = xs
            .into_iter()
            .zip(ys)
            .map(|(x, y)| Point::new(x, y))
            .collect();

        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Point {
        self.points[0]
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }
}

/// Evaluate the piecewise-linear interpolant of `values` (indexed 0..n-1)
/// at `count` equally spaced positions spanning [0, n-1].
fn resample_linear(values: &[f64], count: usize) -> Vec<f64> {
    let n = values.len();
    let span = (n - 1) as f64;
    let step = span / (count - 1) as f64;

    (0..count)
        .map(|i| {
            let position = if i == count - 1 { span } else { i as f64 * step };
            let lower = position.floor() as usize;
            let frac = position - lower as f64;
            if frac == 0.0 || lower + 1 >= n {
                values[lower.min(n - 1)]
            } else {
                values[lower] * (1.0 - frac) + values[lower + 1] * frac
            }
        })
        .collect()
}
