//! Maximum Deviation
//!
//! Largest distance from the trajectory to the straight reference line
//! connecting the trial's own first and last samples.
//!
//! The reference line is discretized into T points and each trajectory
//! sample takes the distance to the nearest of those T points, not the
//! true perpendicular projection onto the segment. The discretized form
//! slightly overestimates the continuous distance between line samples;
//! it is kept deliberately because downstream comparisons assume the
//! established measure's exact numeric behavior.

use crate::pipeline::remap::RemappedTrajectory;
use crate::pipeline::trial::Point;

/// Maximum over all samples of the minimum distance to the sampled
/// first-to-last reference line. Always ≥ 0; zero only when every sample
/// lies exactly on a sampled line point.
pub fn max_deviation(trajectory: &RemappedTrajectory) -> f64 {
    let count = trajectory.len();
    let first = trajectory.first();
    let last = trajectory.last();

    // Reference segment sampled at the same T positions as the trajectory
    let line: Vec<Point> = (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            Point::new(
                first.x + (last.x - first.x) * t,
                first.y + (last.y - first.y) * t,
            )
        })
        .collect();

    trajectory
        .points()
        .iter()
        .map(|p| {
            line.iter()
                .map(|l| p.distance_to(l))
                .fold(f64::INFINITY, f64::min)
        })
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::rescale::RescaledTrajectory;

    fn remapped(points: Vec<Point>) -> RemappedTrajectory {
        RemappedTrajectory::from_rescaled(RescaledTrajectory::from_points(points))
    }

    #[test]
    fn test_straight_line_has_zero_deviation() {
        let points: Vec<Point> = (0..101)
            .map(|i| {
                let t = i as f64 / 100.0;
                Point::new(t, 1.5 * t)
            })
            .collect();
        let traj = remapped(points);
        assert!(max_deviation(&traj) < 1e-12);
    }

    #[test]
    fn test_deviation_is_never_negative() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(-0.4, 0.9),
            Point::new(0.3, 0.2),
            Point::new(1.0, 1.5),
        ];
        let traj = remapped(points);
        assert!(max_deviation(&traj) >= 0.0);
    }

    #[test]
    fn test_known_arc_deviation() {
        // Straight reference from (0,0) to (2,0); a single detour point at
        // (1,1) sits at distance 1 from the nearest line sample when the
        // line is sampled densely enough to land on (1,0).
        let mut points: Vec<Point> = (0..=100)
            .map(|i| Point::new(i as f64 / 50.0, 0.0))
            .collect();
        points[50] = Point::new(1.0, 1.0);
        let traj = remapped(points);
        let dev = max_deviation(&traj);
        assert!((dev - 1.0).abs() < 1e-9, "got {dev}");
    }

    #[test]
    fn test_discretization_uses_nearest_sample_not_projection() {
        // Reference from (0,0) to (1,0) sampled at only 3 points: the
        // nearest sample to (0.25, 0.1) is (0.5, 0) or (0,0), both farther
        // than the true perpendicular distance 0.1.
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.25, 0.1),
            Point::new(1.0, 0.0),
        ];
        let traj = remapped(points);
        let dev = max_deviation(&traj);
        let expected = (0.25f64.powi(2) + 0.1f64.powi(2)).sqrt();
        assert!((dev - expected).abs() < 1e-12);
        assert!(dev > 0.1);
    }
}
