//! Area Under the Curve
//!
//! Signed area between the trajectory and the canonical diagonal from the
//! start (0,0) to the modeled right target (normalized_x, normalized_y).
//! The reference line is evaluated at the trajectory's own x samples, so
//! a trajectory that traces the diagonal integrates to exactly zero.
//! Integration is the trapezoidal rule with step 1/T over the sample
//! index, matching the established convention (note: 1/T, not 1/(T-1)).

use crate::app::config::SpaceConfig;
use crate::pipeline::remap::RemappedTrajectory;

/// Trapezoidal-rule signed area between the path and the canonical
/// diagonal. Positive when the path lies above the diagonal.
pub fn area_under_curve(trajectory: &RemappedTrajectory, space: &SpaceConfig) -> f64 {
    let slope = space.normalized_y / space.normalized_x;
    let dx = 1.0 / trajectory.len() as f64;

    let deviations: Vec<f64> = trajectory
        .points()
        .iter()
        .map(|p| p.y - slope * p.x)
        .collect();

    deviations
        .windows(2)
        .map(|w| (w[0] + w[1]) / 2.0 * dx)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::trial::Point;

    fn remapped(points: Vec<Point>) -> RemappedTrajectory {
        use crate::pipeline::rescale::RescaledTrajectory;
        RemappedTrajectory::from_rescaled(RescaledTrajectory::from_points(points))
    }

    fn diagonal(t: usize, space: &SpaceConfig) -> Vec<Point> {
        (0..t)
            .map(|i| {
                let x = space.normalized_x * i as f64 / (t - 1) as f64;
                Point::new(x, space.normalized_y / space.normalized_x * x)
            })
            .collect()
    }

    #[test]
    fn test_diagonal_integrates_to_zero() {
        let space = SpaceConfig::default();
        let traj = remapped(diagonal(101, &space));
        assert!(area_under_curve(&traj, &space).abs() < 1e-12);
    }

    #[test]
    fn test_path_above_diagonal_is_positive() {
        let space = SpaceConfig::default();
        let points: Vec<Point> = diagonal(101, &space)
            .into_iter()
            .map(|p| Point::new(p.x, p.y + 0.2))
            .collect();
        let traj = remapped(points);
        let auc = area_under_curve(&traj, &space);
        assert!(auc > 0.0);
        // constant offset of 0.2 over 100 trapezoids of width 1/101
        assert!((auc - 0.2 * 100.0 / 101.0).abs() < 1e-9);
    }

    #[test]
    fn test_path_below_diagonal_is_negative() {
        let space = SpaceConfig::default();
        let points: Vec<Point> = diagonal(101, &space)
            .into_iter()
            .map(|p| Point::new(p.x, p.y - 0.1))
            .collect();
        let traj = remapped(points);
        assert!(area_under_curve(&traj, &space) < 0.0);
    }
}
