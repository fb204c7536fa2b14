//! Batch Driver
//!
//! Processes every subject file in a data directory. Subjects are
//! independent, so a failure in one file is logged and the batch moves
//! on; within-subject row order is the only ordering that matters.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::app::config::Config;
use crate::workflow::subject::{process_subject, SubjectResult};
use crate::Result;

/// Outcome of a directory run
#[derive(Debug)]
pub struct BatchSummary {
    /// Successfully processed subjects (OK or downgraded), in file order
    pub subjects: Vec<SubjectResult>,
    /// Files that failed outright, with the error text
    pub failures: Vec<(String, String)>,
}

impl BatchSummary {
    /// Number of subjects that passed validation
    pub fn ok_subjects(&self) -> usize {
        self.subjects.iter().filter(|s| s.is_ok).count()
    }
}

/// Runs the per-subject pipeline across a directory of CSV files
#[derive(Debug)]
pub struct BatchProcessor {
    config: Config,
}

impl BatchProcessor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process every subject CSV in `data_dir`, isolating failures
    pub fn process_directory(&self, data_dir: &Path) -> Result<BatchSummary> {
        let mut files = subject_files(data_dir)?;
        files.sort();

        let mut subjects = Vec::new();
        let mut failures = Vec::new();

        for path in files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string());
            info!(file = %name, "processing subject");

            match process_subject(&path, &self.config) {
                Ok(result) => {
                    if result.is_ok {
                        info!(
                            subject = %result.source,
                            rows = result.rows.len(),
                            trials = result.trajectory_rows(),
                            "subject processed"
                        );
                    } else {
                        info!(subject = %result.source, "subject emitted as not-OK");
                    }
                    subjects.push(result);
                }
                Err(e) => {
                    error!(file = %name, error = %e, "subject failed, continuing batch");
                    failures.push((name, e.to_string()));
                }
            }
        }

        Ok(BatchSummary { subjects, failures })
    }
}

/// Enumerate candidate subject files: `*.csv`, skipping previous batch
/// outputs (names starting with "all") and editor/system droppings.
fn subject_files(data_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(data_dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };
        if !name.to_ascii_lowercase().ends_with(".csv") {
            continue;
        }
        if name.starts_with("all") || name.starts_with('.') || name.starts_with('$') {
            continue;
        }
        files.push(path);
    }
    Ok(files)
}
