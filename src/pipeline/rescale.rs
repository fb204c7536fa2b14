//! Coordinate Frame Rescaling
//!
//! Maps a subject's normalized trajectories into the canonical decision
//! space: the shared starting button at (0,0) and the two response
//! targets nominally at (±normalized_x, normalized_y). The reference
//! positions are estimated from the subject's own data, so the step order
//! is load-bearing: the left/right partition must be taken on the raw
//! first/last samples before any centering happens.

use crate::app::config::SpaceConfig;
use crate::pipeline::normalize::NormalizedTrajectory;
use crate::pipeline::trial::Point;
use crate::{Error, Result};

/// Subject-level frame statistics estimated from all trials.
///
/// `continue_x`/`continue_y` locate the shared starting button;
/// `left_x`/`right_x` are the mean final x of the trials ending on each
/// side; `targets_y` is the mean final y over all trials.
#[derive(Debug, Clone, Copy)]
pub struct FrameStats {
    pub continue_x: f64,
    pub continue_y: f64,
    pub left_x: f64,
    pub right_x: f64,
    pub targets_y: f64,
}

impl FrameStats {
    /// Estimate the frame from a subject's normalized trajectories.
    ///
    /// Trials are partitioned by final x relative to the starting button;
    /// a trial ending exactly at `continue_x` falls on neither side. If
    /// every trial ends on one side the opposite mean is undefined and the
    /// subject's partition is degenerate; that is surfaced as an error
    /// rather than allowed to propagate as a silent NaN.
    pub fn compute(trajectories: &[NormalizedTrajectory]) -> Result<Self> {
        if trajectories.is_empty() {
            return Err(Error::InsufficientData(
                "no trajectories to estimate the coordinate frame from".to_string(),
            ));
        }

        let n = trajectories.len() as f64;
        let continue_x = trajectories.iter().map(|t| t.first().x).sum::<f64>() / n;
        let continue_y = trajectories.iter().map(|t| t.first().y).sum::<f64>() / n;
        let targets_y = trajectories.iter().map(|t| t.last().y).sum::<f64>() / n;

        let left: Vec<f64> = trajectories
            .iter()
            .map(|t| t.last().x)
            .filter(|&x| x < continue_x)
            .collect();
        let right: Vec<f64> = trajectories
            .iter()
            .map(|t| t.last().x)
            .filter(|&x| x > continue_x)
            .collect();

        if left.is_empty() {
            return Err(Error::ClassificationDegeneracy { side: "left" });
        }
        if right.is_empty() {
            return Err(Error::ClassificationDegeneracy { side: "right" });
        }

        let left_x = left.iter().sum::<f64>() / left.len() as f64;
        let right_x = right.iter().sum::<f64>() / right.len() as f64;

        Ok(Self {
            continue_x,
            continue_y,
            left_x,
            right_x,
            targets_y,
        })
    }
}

/// A trajectory in the canonical decision space
#[derive(Debug, Clone)]
pub struct RescaledTrajectory {
    points: Vec<Point>,
}

impl RescaledTrajectory {
    /// Apply the frame transform. A single affine map per axis:
    /// x is centered on the button then scaled so the target separation
    /// spans 2·normalized_x; y is centered then scaled to normalized_y
    /// with a sign flip, because the raw vertical axis grows downward on
    /// screen while the analysis convention grows upward.
    pub fn from_normalized(
        trajectory: NormalizedTrajectory,
        stats: &FrameStats,
        space: &SpaceConfig,
    ) -> Self {
        let x_scale = space.normalized_x / ((stats.right_x - stats.left_x) / 2.0);
        let y_scale = -space.normalized_y / (stats.continue_y - stats.targets_y);

        let points = trajectory
            .points()
            .iter()
            .map(|p| {
                Point::new(
                    (p.x - stats.continue_x) * x_scale,
                    (p.y - stats.continue_y) * y_scale,
                )
            })
            .collect();

        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub(crate) fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Build directly from canonical-space points (tests, synthetic data)
    #[cfg(test)]
    pub(crate) fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }
}
