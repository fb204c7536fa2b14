//! Trajectory Processing Pipeline
//!
//! Each stage consumes the previous stage's output type, so the order
//! dependencies of the transform (normalize before rescale, rescale
//! before remap) are enforced at the type level:
//!
//! `Trial` → `NormalizedTrajectory` → `RescaledTrajectory` → `RemappedTrajectory`

pub mod normalize;
pub mod remap;
pub mod rescale;
pub mod trial;

pub use normalize::NormalizedTrajectory;
pub use remap::RemappedTrajectory;
pub use rescale::{FrameStats, RescaledTrajectory};
pub use trial::{Point, Trial};
