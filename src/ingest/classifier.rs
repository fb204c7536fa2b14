//! Row Classification and Preservation
//!
//! A row either carries trajectory coordinates or it does not; that
//! partition is fixed here and never revisited. Practice trials are
//! removed first, then the keep/drop decision runs: keep rows with
//! trajectory data or with data in any configured preserve column.

use crate::app::config::Config;
use crate::ingest::reader::{RawRow, SubjectFile};
use crate::Result;

/// Classification of one raw input row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowClass {
    /// Carries mouse coordinates; gets the full measure set
    Trajectory,
    /// No coordinates, but non-missing data in a preserve column;
    /// retained with all-missing measures
    Preserved,
    /// Practice trial, removed before the keep/drop decision
    Practice,
    /// Nothing worth keeping
    Dropped,
}

impl RowClass {
    /// Whether the row survives into the output
    pub fn is_kept(self) -> bool {
        matches!(self, RowClass::Trajectory | RowClass::Preserved)
    }
}

/// Classifies the rows of one subject file against the configured columns
#[derive(Debug)]
pub struct RowClassifier {
    x_index: usize,
    preserve_indices: Vec<usize>,
    marker: Option<(usize, String)>,
    practice_trials: usize,
}

impl RowClassifier {
    /// Resolve the configured column names against a subject file's header
    pub fn for_file(file: &SubjectFile, config: &Config) -> Result<Self> {
        let x_index = file.require_column(&config.columns.x_coord)?;

        let mut preserve_indices = Vec::with_capacity(config.columns.preserve.len());
        for name in &config.columns.preserve {
            preserve_indices.push(file.require_column(name)?);
        }

        let marker = match &config.trials.practice_marker {
            Some(m) => Some((file.require_column(&m.column)?, m.token.clone())),
            None => None,
        };

        Ok(Self {
            x_index,
            preserve_indices,
            marker,
            practice_trials: config.trials.practice_trials,
        })
    }

    /// Classify every row of the file, in original order.
    ///
    /// Practice removal happens first: rows matching the phase marker are
    /// discarded, as are the first `practice_trials` trajectory rows among
    /// the remainder. Only then does the preserve logic run, so a preserve
    /// column cannot rescue a practice trial.
    pub fn classify(&self, rows: &[RawRow]) -> Vec<RowClass> {
        let mut practice_seen = 0usize;
        rows.iter()
            .map(|row| {
                if let Some((idx, token)) = &self.marker {
                    if row.get(*idx).is_some_and(|v| v.contains(token.as_str())) {
                        return RowClass::Practice;
                    }
                }

                let has_trajectory = row.has_value(self.x_index);
                if has_trajectory && practice_seen < self.practice_trials {
                    practice_seen += 1;
                    return RowClass::Practice;
                }

                if has_trajectory {
                    RowClass::Trajectory
                } else if self
                    .preserve_indices
                    .iter()
                    .any(|&idx| row.has_value(idx))
                {
                    RowClass::Preserved
                } else {
                    RowClass::Dropped
                }
            })
            .collect()
    }
}
