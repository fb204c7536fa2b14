//! Configuration Management

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Column names in the subject CSV files
    #[serde(default)]
    pub columns: ColumnConfig,
    /// Trial filtering and validation settings
    #[serde(default)]
    pub trials: TrialConfig,
    /// Canonical decision-space settings
    #[serde(default)]
    pub space: SpaceConfig,
}

/// Column configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Column holding the comma-separated x coordinate sequence
    pub x_coord: String,
    /// Column holding the comma-separated y coordinate sequence
    pub y_coord: String,
    /// Optional scalar-response (slider) column; values are divided by 100
    /// and carried into the output as `explicit_slider`
    #[serde(default)]
    pub response: Option<String>,
    /// Non-trajectory rows with data in any of these columns are preserved.
    /// An empty list reproduces the legacy behavior: keep trajectory rows only.
    #[serde(default)]
    pub preserve: Vec<String>,
}

/// Trial filtering and validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Number of leading trajectory rows per subject to discard as practice
    #[serde(default)]
    pub practice_trials: usize,
    /// Phase-marker rule: drop rows whose marker column contains the token.
    /// Applied in addition to `practice_trials` when configured.
    #[serde(default)]
    pub practice_marker: Option<PracticeMarker>,
    /// Strict-count policy: when set, a subject whose trajectory-row count
    /// differs from this value is downgraded to not-OK
    #[serde(default)]
    pub expected_trials: Option<usize>,
}

/// Phase-marker based practice detection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeMarker {
    /// Column carrying the experiment phase label
    pub column: String,
    /// Substring identifying practice rows (e.g. "practice")
    pub token: String,
}

/// Canonical decision-space configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceConfig {
    /// Number of resampled time points per trajectory
    pub timepoints: usize,
    /// Absolute x coordinate of the two targets after rescaling
    pub normalized_x: f64,
    /// y coordinate of the targets after rescaling
    pub normalized_y: f64,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            x_coord: "x_cord".to_string(),
            y_coord: "y_cord".to_string(),
            response: None,
            preserve: Vec::new(),
        }
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            practice_trials: 0,
            practice_marker: None,
            expected_trials: None,
        }
    }
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            timepoints: 101,
            normalized_x: 1.0,
            normalized_y: 1.5,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.columns.x_coord.trim().is_empty() || self.columns.y_coord.trim().is_empty() {
            return Err(crate::Error::Config(
                "x_coord and y_coord column names must not be empty".to_string(),
            ));
        }
        // The initiation angle reads the 10th resampled point, so the
        // resampled trajectory must extend past index 10.
        if self.space.timepoints < 12 {
            return Err(crate::Error::Config(format!(
                "timepoints must be at least 12, got {}",
                self.space.timepoints
            )));
        }
        if self.space.normalized_x <= 0.0 {
            return Err(crate::Error::Config(format!(
                "normalized_x must be positive, got {}",
                self.space.normalized_x
            )));
        }
        if self.space.normalized_y <= 0.0 {
            return Err(crate::Error::Config(format!(
                "normalized_y must be positive, got {}",
                self.space.normalized_y
            )));
        }
        if let Some(expected) = self.trials.expected_trials {
            if expected == 0 {
                return Err(crate::Error::Config(
                    "expected_trials must be > 0 when set".to_string(),
                ));
            }
        }
        if let Some(marker) = &self.trials.practice_marker {
            if marker.column.trim().is_empty() || marker.token.trim().is_empty() {
                return Err(crate::Error::Config(
                    "practice_marker column and token must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<(), crate::Error> {
        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
