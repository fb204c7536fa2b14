//! Mousetrack - Mouse-Trajectory Preprocessing
//!
//! Turns raw per-subject mouse-tracking CSV logs into a unified,
//! measure-enriched dataset.

use std::path::{Path, PathBuf};

use mousetrack::app::cli::{Cli, Commands};
use mousetrack::app::config::Config;
use mousetrack::workflow::batch::BatchProcessor;
use mousetrack::workflow::output;
use mousetrack::workflow::subject::process_subject;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // Execute command
    match cli.command {
        Commands::Process { data, output } => {
            run_process(&data, output, config)?;
        }
        Commands::Inspect { input } => {
            run_inspect(&input, &config)?;
        }
        Commands::Init { path, force } => {
            run_init(path, force, &config)?;
        }
    }

    Ok(())
}

fn run_process(data_dir: &Path, output_dir: Option<PathBuf>, config: Config) -> anyhow::Result<()> {
    let output_dir = output_dir.unwrap_or_else(|| data_dir.to_path_buf());
    std::fs::create_dir_all(&output_dir)?;

    let processor = BatchProcessor::new(config);
    let summary = processor.process_directory(data_dir)?;

    if summary.subjects.is_empty() {
        warn!("no subject files processed, nothing to write");
        return Ok(());
    }

    let output_path = output::dated_output_path(&output_dir);
    output::write_unified(&summary.subjects, processor.config(), &output_path)?;

    info!(
        subjects = summary.subjects.len(),
        ok = summary.ok_subjects(),
        failed = summary.failures.len(),
        output = %output_path.display(),
        "batch complete"
    );
    for (file, error) in &summary.failures {
        warn!(file = %file, error = %error, "subject was skipped");
    }

    Ok(())
}

fn run_inspect(input: &Path, config: &Config) -> anyhow::Result<()> {
    let result = process_subject(input, config)?;

    println!("subject:          {}", result.source);
    println!("valid (is_OK):    {}", result.is_ok);
    println!("retained rows:    {}", result.rows.len());
    println!("trajectory rows:  {}", result.trajectory_rows());

    for (i, row) in result.rows.iter().enumerate() {
        if let Some(m) = &row.measures {
            println!(
                "  trial {:>3}: flips={} RPB={} AUC={:.4} max_dev={:.4} angle={:.1} length={:.4}",
                i, m.flips, m.rpb, m.auc, m.max_deviation, m.initiation_angle, m.trajectory_length
            );
        }
    }

    Ok(())
}

fn run_init(path: Option<PathBuf>, force: bool, config: &Config) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from("mousetrack.toml"));
    if path.exists() && !force {
        anyhow::bail!(
            "config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }
    config.save(&path)?;
    info!(path = %path.display(), "wrote config");
    Ok(())
}
