//! Measure Extraction
//!
//! Bundles the eight per-trial measures computed from one rescaled,
//! remapped trajectory. Non-trajectory rows and rows of not-OK subjects
//! carry no `MeasureSet` at all; the output writer renders that as
//! missing values in every measure column.

use crate::analysis::area::area_under_curve;
use crate::analysis::crossings::axis_crossings;
use crate::analysis::deviation::max_deviation;
use crate::analysis::flips::x_flips;
use crate::analysis::initiation::{initiation_angle, initiation_correspondence};
use crate::analysis::length::{real_min_length, trajectory_length};
use crate::app::config::SpaceConfig;
use crate::pipeline::remap::RemappedTrajectory;

/// Per-trial scalar outputs
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureSet {
    /// Local x-direction reversals
    pub flips: u32,
    /// X-axis crossings
    pub rpb: u32,
    /// Signed area between the path and the canonical diagonal
    pub auc: f64,
    /// Largest distance to the sampled first-to-last reference line
    pub max_deviation: f64,
    /// Early-movement direction relative to the x axis, degrees
    pub initiation_angle: f64,
    /// Whether the early movement leaned toward the right target
    pub initiation_correspondence: bool,
    /// Polyline arc length
    pub trajectory_length: f64,
    /// Straight-line distance between first and last sample
    pub real_min_length: f64,
}

impl MeasureSet {
    /// Compute all measures for one trajectory
    pub fn extract(trajectory: &RemappedTrajectory, space: &SpaceConfig) -> Self {
        let xs: Vec<f64> = trajectory.points().iter().map(|p| p.x).collect();
        let angle = initiation_angle(trajectory);

        Self {
            flips: x_flips(&xs),
            rpb: axis_crossings(&xs),
            auc: area_under_curve(trajectory, space),
            max_deviation: max_deviation(trajectory),
            initiation_angle: angle,
            initiation_correspondence: initiation_correspondence(angle),
            trajectory_length: trajectory_length(trajectory),
            real_min_length: real_min_length(trajectory),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::rescale::RescaledTrajectory;
    use crate::pipeline::trial::Point;

    #[test]
    fn test_extract_on_canonical_diagonal() {
        let space = SpaceConfig::default();
        let points: Vec<Point> = (0..101)
            .map(|i| {
                let t = i as f64 / 100.0;
                Point::new(space.normalized_x * t, space.normalized_y * t)
            })
            .collect();
        let traj = RemappedTrajectory::from_rescaled(RescaledTrajectory::from_points(points));
        let measures = MeasureSet::extract(&traj, &space);

        assert_eq!(measures.flips, 0);
        assert_eq!(measures.rpb, 0);
        assert!(measures.auc.abs() < 1e-12);
        assert!(measures.max_deviation < 1e-12);
        assert!(measures.initiation_correspondence);
        assert!((measures.trajectory_length - measures.real_min_length).abs() < 1e-9);
    }

    #[test]
    fn test_extract_on_curved_path() {
        let space = SpaceConfig::default();
        // Arcs left before committing right: above the diagonal throughout
        let points: Vec<Point> = (0..101)
            .map(|i| {
                let t = i as f64 / 100.0;
                let x = t * t;
                let y = space.normalized_y * t;
                Point::new(x, y)
            })
            .collect();
        let traj = RemappedTrajectory::from_rescaled(RescaledTrajectory::from_points(points));
        let measures = MeasureSet::extract(&traj, &space);

        assert_eq!(measures.flips, 0);
        assert!(measures.auc > 0.0);
        assert!(measures.max_deviation > 0.0);
        assert!(measures.trajectory_length > measures.real_min_length);
    }
}
