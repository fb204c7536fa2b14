//! Path Length
//!
//! Arc length of the resampled polyline, and the straight-line distance
//! between its endpoints. The straight-line distance is the lower bound
//! any actual path must meet or exceed, which makes the pair useful as a
//! movement-efficiency ratio downstream.

use crate::pipeline::remap::RemappedTrajectory;

/// Sum of Euclidean distances between consecutive resampled samples
pub fn trajectory_length(trajectory: &RemappedTrajectory) -> f64 {
    trajectory
        .points()
        .windows(2)
        .map(|w| w[0].distance_to(&w[1]))
        .sum()
}

/// Straight-line distance between the first and last sample
pub fn real_min_length(trajectory: &RemappedTrajectory) -> f64 {
    trajectory.first().distance_to(&trajectory.last())
}
