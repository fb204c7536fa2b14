//! Trajectory Remapping
//!
//! Mirrors trajectories that end on the left target about the y-axis so
//! every trajectory ends on the right side. Pooled analysis can then
//! treat all trials as moving toward a single modeled target, regardless
//! of the original left/right choice. Taking a `RescaledTrajectory` makes
//! "remap only after rescale" a type-level precondition.

use crate::pipeline::rescale::RescaledTrajectory;
use crate::pipeline::trial::Point;

/// A rescaled trajectory guaranteed to end with x ≥ 0
#[derive(Debug, Clone)]
pub struct RemappedTrajectory {
    points: Vec<Point>,
}

impl RemappedTrajectory {
    /// Mirror about x = 0 when the trajectory ends on the left
    pub fn from_rescaled(trajectory: RescaledTrajectory) -> Self {
        let mirror = trajectory.last().x < 0.0;
        let mut points = trajectory.into_points();
        if mirror {
            for p in &mut points {
                p.x = -p.x;
            }
        }
        Self { points }
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
