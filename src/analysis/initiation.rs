//! Initiation Angle
//!
//! Direction of the early movement, taken as the vector from the first
//! resampled point to the 10th, relative to the x axis. The atan2
//! argument order (Δy as y[0] − y[k], Δx as x[k] − x[0]) is part of the
//! measure's contract and is reproduced exactly; the result is reported
//! in degrees, absolute value.
//!
//! The correspondence flag is a coarse proxy for "did the initial
//! movement already lean toward the eventual (right) target": an absolute
//! angle under 90° points into the right half-plane.

use crate::pipeline::remap::RemappedTrajectory;

/// Index of the resampled point the initiation vector is taken to
pub const INITIATION_POINT: usize = 10;

/// Initiation angle in degrees, absolute value
pub fn initiation_angle(trajectory: &RemappedTrajectory) -> f64 {
    let first = trajectory.first();
    let later = trajectory.points()[INITIATION_POINT];
    let angle = (first.y - later.y).atan2(later.x - first.x);
    angle.to_degrees().abs()
}

/// Whether the initiation angle points toward the right target
pub fn initiation_correspondence(angle_degrees: f64) -> bool {
    angle_degrees < 90.0
}
