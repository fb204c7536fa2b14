//! Trajectory Measures
//!
//! Per-trial scalar features computed on rescaled, remapped trajectories:
//! - x-direction flips and x-axis crossings (response competition)
//! - area under the curve and maximum deviation (attraction to the
//!   unchosen option)
//! - initiation angle and correspondence (early commitment)
//! - path length and its straight-line lower bound
//!
//! Several of these reproduce documented numeric approximations of the
//! established analysis conventions on purpose; downstream statistics
//! assume by-construction reproducibility, so "better" geometry here
//! would be a regression.

pub mod area;
pub mod crossings;
pub mod deviation;
pub mod flips;
pub mod initiation;
pub mod length;
pub mod measures;

pub use measures::MeasureSet;
