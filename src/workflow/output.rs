//! Unified Output Table
//!
//! Concatenates all subjects into a single CSV: one row per retained
//! input row, carrying the union of original columns across subjects,
//! the eight measure columns, the validity flag, a subject identifier,
//! and the final remapped trajectory as T x-columns and T y-columns.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::config::Config;
use crate::workflow::subject::SubjectResult;
use crate::Result;

/// Measure/metadata columns appended after the original columns
const MEASURE_COLUMNS: [&str; 9] = [
    "is_OK",
    "flips",
    "max_deviation",
    "RPB",
    "AUC",
    "initiation_angle",
    "initiation_correspondence",
    "trajectory_length",
    "real_min_length",
];

/// Default output path: `all_subjects_processed<date>.csv` in `dir`
pub fn dated_output_path(dir: &Path) -> PathBuf {
    let date = Local::now().date_naive();
    dir.join(format!("all_subjects_processed{date}.csv"))
}

/// Union of the subjects' original columns, in first-seen order
fn original_columns(subjects: &[SubjectResult]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for subject in subjects {
        for header in &subject.headers {
            if !columns.iter().any(|c| c == header) {
                columns.push(header.clone());
            }
        }
    }
    columns
}

/// Write the unified table for all subjects
pub fn write_unified(subjects: &[SubjectResult], config: &Config, path: &Path) -> Result<()> {
    let timepoints = config.space.timepoints;
    let has_slider = config.columns.response.is_some();
    let originals = original_columns(subjects);

    let mut writer = csv::Writer::from_path(path)?;

    // Header: originals, slider, measures, subject id, trajectory columns
    let mut header: Vec<String> = originals.clone();
    if has_slider {
        header.push("explicit_slider".to_string());
    }
    header.extend(MEASURE_COLUMNS.iter().map(|c| c.to_string()));
    header.push("subject_id".to_string());
    for i in 0..timepoints {
        header.push(format!("x_{i}"));
    }
    for i in 0..timepoints {
        header.push(format!("y_{i}"));
    }
    writer.write_record(&header)?;

    for (index, subject) in subjects.iter().enumerate() {
        let subject_id = (index + 1).to_string();
        let column_map: HashMap<&str, usize> = subject
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.as_str(), i))
            .collect();

        for row in &subject.rows {
            let mut record: Vec<String> = Vec::with_capacity(header.len());

            for column in &originals {
                let value = column_map
                    .get(column.as_str())
                    .and_then(|&i| row.fields.get(i))
                    .and_then(|f| f.clone());
                record.push(value.unwrap_or_default());
            }

            if has_slider {
                record.push(format_opt(row.explicit_slider));
            }

            record.push(subject.is_ok.to_string());
            match &row.measures {
                Some(m) => {
                    record.push(m.flips.to_string());
                    record.push(m.max_deviation.to_string());
                    record.push(m.rpb.to_string());
                    record.push(m.auc.to_string());
                    record.push(m.initiation_angle.to_string());
                    record.push(m.initiation_correspondence.to_string());
                    record.push(m.trajectory_length.to_string());
                    record.push(m.real_min_length.to_string());
                }
                None => record.extend(std::iter::repeat(String::new()).take(8)),
            }
            record.push(subject_id.clone());

            match &row.trajectory {
                Some(t) => {
                    record.extend(t.points().iter().map(|p| p.x.to_string()));
                    record.extend(t.points().iter().map(|p| p.y.to_string()));
                }
                None => {
                    record.extend(std::iter::repeat(String::new()).take(2 * timepoints));
                }
            }

            writer.write_record(&record)?;
        }
    }

    writer.flush()?;
    Ok(())
}

fn format_opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
