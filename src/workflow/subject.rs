//! Per-Subject Processing
//!
//! Runs one subject file end to end: classify rows, parse trials, run the
//! coordinate pipeline, extract measures. Data problems that only concern
//! this subject (a malformed coordinate token, too few samples, a
//! one-sided endpoint partition) downgrade the subject to not-OK and its
//! rows are still emitted with all-missing measures; only file-level
//! problems (unreadable file, absent column) propagate as errors.

use std::path::Path;

use tracing::{debug, warn};

use crate::analysis::measures::MeasureSet;
use crate::app::config::Config;
use crate::ingest::classifier::{RowClass, RowClassifier};
use crate::ingest::reader::{RawRow, SubjectFile};
use crate::pipeline::normalize::NormalizedTrajectory;
use crate::pipeline::remap::RemappedTrajectory;
use crate::pipeline::rescale::{FrameStats, RescaledTrajectory};
use crate::pipeline::trial::Trial;
use crate::{Error, Result};

/// One retained row of the output table
#[derive(Debug, Clone)]
pub struct OutputRow {
    /// Original field values, aligned with the subject file's header
    pub fields: Vec<Option<String>>,
    /// Scalar response rescaled to [0, 1], when a response column is
    /// configured and the row has one
    pub explicit_slider: Option<f64>,
    /// Trajectory measures; `None` on non-trajectory rows and for not-OK
    /// subjects
    pub measures: Option<MeasureSet>,
    /// Final remapped trajectory; `None` on non-trajectory rows and for
    /// not-OK subjects
    pub trajectory: Option<RemappedTrajectory>,
}

/// Result of processing one subject file
#[derive(Debug, Clone)]
pub struct SubjectResult {
    /// Source file stem, for logs and provenance
    pub source: String,
    /// Column names of the subject file
    pub headers: Vec<String>,
    /// Whether usable mouse data was recorded and passed validation.
    /// Set once here and never changed.
    pub is_ok: bool,
    /// Retained rows in original file order
    pub rows: Vec<OutputRow>,
}

impl SubjectResult {
    /// Number of retained rows carrying trajectory data
    pub fn trajectory_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.trajectory.is_some()).count()
    }
}

/// Process one subject file from disk
pub fn process_subject(path: &Path, config: &Config) -> Result<SubjectResult> {
    let file = SubjectFile::read(path)?;
    process_file(file, config)
}

/// Process an already loaded subject file
pub fn process_file(file: SubjectFile, config: &Config) -> Result<SubjectResult> {
    let classifier = RowClassifier::for_file(&file, config)?;
    let x_index = file.require_column(&config.columns.x_coord)?;
    let y_index = file.require_column(&config.columns.y_coord)?;
    let response_index = match &config.columns.response {
        Some(name) => Some(file.require_column(name)?),
        None => None,
    };

    let classes = classifier.classify(&file.rows);
    let kept: Vec<(&RawRow, bool)> = file
        .rows
        .iter()
        .zip(&classes)
        .filter(|(_, class)| class.is_kept())
        .map(|(row, class)| (row, *class == RowClass::Trajectory))
        .collect();

    // Parse every trajectory row up front; the validity verdict covers the
    // whole subject, not individual trials.
    let mut trials: Vec<Trial> = Vec::new();
    let mut downgrade: Option<Error> = None;
    for &(row, is_trajectory) in &kept {
        if !is_trajectory {
            continue;
        }
        let x_cell = row.get(x_index).unwrap_or_default();
        let y_cell = row.get(y_index).unwrap_or_default();
        match Trial::parse(x_cell, y_cell) {
            Ok(trial) => trials.push(trial),
            Err(e) => {
                downgrade = Some(e);
                break;
            }
        }
    }

    if downgrade.is_none() {
        downgrade = validate_trials(&trials, config).err();
    }

    let trajectories = if downgrade.is_none() {
        match run_pipeline(&trials, config) {
            Ok(t) => Some(t),
            Err(e) => {
                downgrade = Some(e);
                None
            }
        }
    } else {
        None
    };

    let is_ok = downgrade.is_none();
    if let Some(e) = &downgrade {
        warn!(subject = %file.source, error = %e, "subject downgraded to not-OK");
    } else {
        debug!(subject = %file.source, trials = trials.len(), "pipeline complete");
    }

    let mut remapped = trajectories.map(|t| t.into_iter());
    let rows = kept
        .into_iter()
        .map(|(row, is_trajectory)| {
            let trajectory = if is_trajectory {
                remapped.as_mut().and_then(|iter| iter.next())
            } else {
                None
            };
            let measures = trajectory
                .as_ref()
                .map(|t| MeasureSet::extract(t, &config.space));
            OutputRow {
                fields: row.fields().to_vec(),
                explicit_slider: slider_value(row, response_index),
                measures,
                trajectory,
            }
        })
        .collect();

    Ok(SubjectResult {
        source: file.source,
        headers: file.headers,
        is_ok,
        rows,
    })
}

/// Subject-level validity: at least one trajectory row, every trial
/// viable, and (strict-count policy) the expected trial count when one is
/// configured.
fn validate_trials(trials: &[Trial], config: &Config) -> Result<()> {
    if trials.is_empty() {
        return Err(Error::InsufficientData(
            "no trajectory rows in subject file".to_string(),
        ));
    }
    if let Some(bad) = trials.iter().position(|t| !t.is_viable()) {
        return Err(Error::InsufficientData(format!(
            "trial {bad} has fewer than 2 real samples"
        )));
    }
    if let Some(expected) = config.trials.expected_trials {
        if trials.len() != expected {
            return Err(Error::InsufficientData(format!(
                "expected {expected} trials, found {}",
                trials.len()
            )));
        }
    }
    Ok(())
}

/// Normalize, rescale, and remap the subject's trials, in that order
fn run_pipeline(trials: &[Trial], config: &Config) -> Result<Vec<RemappedTrajectory>> {
    let normalized: Vec<NormalizedTrajectory> = trials
        .iter()
        .map(|t| NormalizedTrajectory::from_trial(t, config.space.timepoints))
        .collect::<Result<_>>()?;

    let stats = FrameStats::compute(&normalized)?;

    Ok(normalized
        .into_iter()
        .map(|t| {
            RemappedTrajectory::from_rescaled(RescaledTrajectory::from_normalized(
                t,
                &stats,
                &config.space,
            ))
        })
        .collect())
}

/// Scalar-response value rescaled from a 0-100 slider to [0, 1]
fn slider_value(row: &RawRow, response_index: Option<usize>) -> Option<f64> {
    let index = response_index?;
    let raw = row.get(index)?;
    match raw.parse::<f64>() {
        Ok(value) => Some(value / 100.0),
        Err(_) => {
            debug!(value = raw, "non-numeric response value ignored");
            None
        }
    }
}
