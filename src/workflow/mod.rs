//! Workflow Module
//!
//! Orchestrates the complete preprocessing workflow: per-subject pipeline
//! runs, cross-subject batching, and the unified output table.

pub mod batch;
pub mod output;
pub mod subject;

pub use batch::{BatchProcessor, BatchSummary};
pub use subject::{OutputRow, SubjectResult};
