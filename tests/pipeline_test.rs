//! End-to-end tests for the preprocessing pipeline
//!
//! These run whole subject files through ingestion, classification, the
//! coordinate pipeline, measure extraction, and the unified CSV writer.

use std::io::Write;
use std::path::{Path, PathBuf};

use mousetrack::app::config::Config;
use mousetrack::workflow::batch::BatchProcessor;
use mousetrack::workflow::output;
use mousetrack::workflow::subject::process_subject;
use tempfile::TempDir;

fn write_subject(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

/// Subject with one right-ending and one left-ending trial plus a
/// questionnaire row holding a slider response.
const MIXED_SUBJECT: &str = "x_cord,y_cord,response\n\
    \"0,1,2,3\",\"0,-1,-2,-3\",\n\
    ,,7\n\
    \"0,-1,-2,-3\",\"0,-1,-2,-3\",\n";

#[test]
fn test_preserved_row_keeps_payload_and_gets_missing_measures() {
    let dir = TempDir::new().unwrap();
    let path = write_subject(dir.path(), "01.csv", MIXED_SUBJECT);

    let mut config = Config::default();
    config.columns.preserve = vec!["response".to_string()];
    config.trials.practice_trials = 0;

    let result = process_subject(&path, &config).unwrap();
    assert!(result.is_ok);
    assert_eq!(result.rows.len(), 3);

    // trajectory rows carry numeric measures
    assert!(result.rows[0].measures.is_some());
    assert!(result.rows[2].measures.is_some());
    // the questionnaire row is preserved, measures all missing
    assert!(result.rows[1].measures.is_none());
    assert!(result.rows[1].trajectory.is_none());
    let response_idx = result.headers.iter().position(|h| h == "response").unwrap();
    assert_eq!(result.rows[1].fields[response_idx].as_deref(), Some("7"));
}

#[test]
fn test_empty_preserve_list_reproduces_legacy_filtering() {
    let dir = TempDir::new().unwrap();
    let path = write_subject(dir.path(), "01.csv", MIXED_SUBJECT);

    // No preserve columns: only rows with trajectory data survive
    let config = Config::default();
    let result = process_subject(&path, &config).unwrap();
    assert!(result.is_ok);
    assert_eq!(result.rows.len(), 2);
    assert!(result.rows.iter().all(|r| r.measures.is_some()));
}

#[test]
fn test_single_sample_subject_is_not_ok() {
    let dir = TempDir::new().unwrap();
    // One trajectory row whose only real sample precedes the padding
    let path = write_subject(dir.path(), "01.csv", "x_cord,y_cord\n\"5,,,\",\"5,,,\"\n");

    let result = process_subject(&path, &Config::default()).unwrap();
    assert!(!result.is_ok);
    assert_eq!(result.rows.len(), 1);
    assert!(result.rows[0].measures.is_none());
    assert!(result.rows[0].trajectory.is_none());
}

#[test]
fn test_all_trials_on_one_side_is_not_ok() {
    let dir = TempDir::new().unwrap();
    // Both trials end right of the shared start: the left-target mean is
    // undefined, so the subject is downgraded instead of emitting NaN.
    let path = write_subject(
        dir.path(),
        "01.csv",
        "x_cord,y_cord\n\"0,1,2,3\",\"0,0,-1,-3\"\n\"0,1,2,3\",\"0,0,-1,-3\"\n",
    );

    let result = process_subject(&path, &Config::default()).unwrap();
    assert!(!result.is_ok);
    assert_eq!(result.rows.len(), 2);
    assert!(result.rows.iter().all(|r| r.measures.is_none()));
}

#[test]
fn test_remapped_trajectories_end_right_and_have_t_points() {
    let dir = TempDir::new().unwrap();
    let path = write_subject(dir.path(), "01.csv", MIXED_SUBJECT);

    let mut config = Config::default();
    config.columns.preserve = vec!["response".to_string()];

    let result = process_subject(&path, &config).unwrap();
    for row in &result.rows {
        if let Some(traj) = &row.trajectory {
            assert_eq!(traj.len(), config.space.timepoints);
            assert!(traj.last().x >= 0.0);
        }
    }
}

#[test]
fn test_practice_rows_are_dropped_before_preservation() {
    let dir = TempDir::new().unwrap();
    let content = "x_cord,y_cord,response\n\
        \"0,9,9,9\",\"0,1,2,3\",\n\
        \"0,1,2,3\",\"0,-1,-2,-3\",\n\
        ,,7\n\
        \"0,-1,-2,-3\",\"0,-1,-2,-3\",\n";
    let path = write_subject(dir.path(), "01.csv", content);

    let mut config = Config::default();
    config.columns.preserve = vec!["response".to_string()];
    config.trials.practice_trials = 1;

    let result = process_subject(&path, &config).unwrap();
    // the first trajectory row is practice and gone; 2 trials + 1 preserved
    assert_eq!(result.rows.len(), 3);
    assert_eq!(result.rows.iter().filter(|r| r.measures.is_some()).count(), 2);
}

#[test]
fn test_batch_writes_unified_csv() {
    let data = TempDir::new().unwrap();
    write_subject(data.path(), "01.csv", MIXED_SUBJECT);
    write_subject(data.path(), "02.csv", MIXED_SUBJECT);

    let mut config = Config::default();
    config.columns.preserve = vec!["response".to_string()];
    config.columns.response = Some("response".to_string());

    let processor = BatchProcessor::new(config);
    let summary = processor.process_directory(data.path()).unwrap();
    assert_eq!(summary.subjects.len(), 2);
    assert_eq!(summary.ok_subjects(), 2);

    let out = TempDir::new().unwrap();
    let out_path = out.path().join("all.csv");
    output::write_unified(&summary.subjects, processor.config(), &out_path).unwrap();

    let mut reader = csv::ReaderBuilder::new().from_path(&out_path).unwrap();
    let headers = reader.headers().unwrap().clone();
    let records: Vec<_> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 6);

    let sid = headers.iter().position(|h| h == "subject_id").unwrap();
    let slider = headers.iter().position(|h| h == "explicit_slider").unwrap();
    let flips = headers.iter().position(|h| h == "flips").unwrap();
    let is_ok = headers.iter().position(|h| h == "is_OK").unwrap();

    // subject ids are 1-based and follow file order
    assert_eq!(&records[0][sid], "1");
    assert_eq!(&records[3][sid], "2");
    // the questionnaire row keeps its rescaled slider value, no measures
    assert_eq!(&records[1][slider], "0.07");
    assert_eq!(&records[1][flips], "");
    assert_eq!(&records[1][is_ok], "true");
    // trajectory rows have numeric measures
    assert!(records[0][flips].parse::<u32>().is_ok());
}

#[test]
fn test_measures_on_straight_and_wavering_trials() {
    let dir = TempDir::new().unwrap();
    // trial 1 runs straight right; trial 2 wavers across the midline
    let content = "x_cord,y_cord\n\
        \"0,1,2,3,4\",\"0,-1,-2,-3,-4\"\n\
        \"0,2,-2,3,-4\",\"0,-1,-2,-3,-4\"\n";
    let path = write_subject(dir.path(), "01.csv", content);

    let result = process_subject(&path, &Config::default()).unwrap();
    assert!(result.is_ok);

    let straight = result.rows[0].measures.as_ref().unwrap();
    let wavering = result.rows[1].measures.as_ref().unwrap();

    assert_eq!(straight.flips, 0);
    assert_eq!(straight.rpb, 0);
    assert!(wavering.flips >= 2);
    assert!(wavering.rpb >= 2);
    assert!(wavering.trajectory_length > straight.trajectory_length);
    assert!(straight.real_min_length > 0.0);
}
