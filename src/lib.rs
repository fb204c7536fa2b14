//! # Mousetrack
//!
//! A preprocessing pipeline that turns raw per-participant mouse-cursor
//! trajectory logs (one CSV per subject, recorded during a two-choice
//! decision task) into a normalized, feature-enriched dataset suitable
//! for statistical analysis.
//!
//! ## Overview
//!
//! Each subject file contains one row per experimental event. Rows that
//! carry mouse-tracking data hold the full coordinate sequence of one
//! trial as a comma-separated string; other rows (questionnaires,
//! attention checks) carry no coordinates but may still be worth keeping.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐   ┌────────────┐   ┌──────────┐   ┌────────┐   ┌──────────┐
//! │  Parse   │──▶│ Normalize  │──▶│ Rescale  │──▶│ Remap  │──▶│ Measures │
//! │ (tokens) │   │ (T points) │   │ (affine) │   │ (x≥0)  │   │ (8 cols) │
//! └──────────┘   └────────────┘   └──────────┘   └────────┘   └──────────┘
//! ```
//!
//! Alongside the coordinate pipeline, a row classifier decides which raw
//! rows are trajectory rows, which are preserved non-trajectory rows, and
//! which are dropped (practice trials, empty filler rows).
//!
//! ## Architecture
//!
//! - [`ingest`]: CSV subject files, row classification and preservation
//! - [`pipeline`]: trial parsing, time normalization, rescale, remap
//! - [`analysis`]: per-trial trajectory measures (flips, AUC, deviation, ...)
//! - [`workflow`]: per-subject orchestration and cross-subject batching
//! - [`app`]: CLI and configuration management

pub mod app;
pub mod ingest;
pub mod pipeline;
pub mod analysis;
pub mod workflow;

// Re-export commonly used types
pub use analysis::measures::MeasureSet;
pub use app::config::Config;
pub use pipeline::{NormalizedTrajectory, RemappedTrajectory, RescaledTrajectory, Trial};
pub use workflow::batch::BatchProcessor;
pub use workflow::subject::SubjectResult;

/// Result type alias for the preprocessing pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the preprocessing pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A coordinate token failed to parse, or a required column is absent.
    /// Fatal for the offending subject only.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A trial or subject has too little data to process. Downgrades the
    /// subject to not-OK instead of aborting the batch.
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// The left/right endpoint partition came out one-sided, so the x scale
    /// factor is undefined. Surfaced instead of silently dividing by zero.
    #[error("Classification degeneracy: no trials end on the {side} side")]
    ClassificationDegeneracy { side: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
