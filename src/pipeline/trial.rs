//! Coordinate Parsing
//!
//! Turns the raw comma-separated coordinate cells of one trajectory row
//! into numeric sample sequences. Recording stops at a different natural
//! endpoint on every trial, so trial lengths vary; shorter trials carry
//! trailing missing markers when they come out of grid-shaped exports,
//! and those are trimmed here.

use crate::{Error, Result};

/// Point in the 2D decision space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One trial's parsed coordinate sequences, trailing missing values trimmed.
///
/// The x and y sequences are kept separate because grid exports can pad
/// them to different raw lengths; time normalization puts both on the same
/// fixed-length base before they are paired into points.
#[derive(Debug, Clone)]
pub struct Trial {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl Trial {
    /// Parse the x and y coordinate cells of one trajectory row.
    ///
    /// Every token must be numeric or a missing marker (empty / "nan");
    /// a non-numeric token is an ingestion error. Missing markers are only
    /// legal as trailing padding.
    pub fn parse(x_cell: &str, y_cell: &str) -> Result<Self> {
        let xs = parse_sequence(x_cell, "x")?;
        let ys = parse_sequence(y_cell, "y")?;
        Ok(Self { xs, ys })
    }

    /// Construct directly from sample vectors (tests, synthetic data)
    pub fn from_samples(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        Self { xs, ys }
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Whether the trial has enough real samples for linear interpolation.
    /// Fewer than 2 samples on either axis cannot be resampled and must be
    /// flagged invalid rather than silently producing degenerate output.
    pub fn is_viable(&self) -> bool {
        self.xs.len() >= 2 && self.ys.len() >= 2
    }
}

/// Parse one comma-separated coordinate cell and trim trailing missing
/// markers. An interior missing marker means the export is corrupt.
fn parse_sequence(cell: &str, axis: &str) -> Result<Vec<f64>> {
    let mut values: Vec<Option<f64>> = Vec::new();
    for token in cell.split(',') {
        let token = token.trim();
        if token.is_empty() || token.eq_ignore_ascii_case("nan") {
            values.push(None);
            continue;
        }
        let value: f64 = token.parse().map_err(|_| {
            Error::Parse(format!("malformed {axis} coordinate token '{token}'"))
        })?;
        values.push(Some(value));
    }

    // Trim trailing missing markers (ragged-grid padding)
    while values.last() == Some(&None) {
        values.pop();
    }

    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            v.ok_or_else(|| {
                Error::Parse(format!("missing {axis} coordinate inside trial at index {i}"))
            })
        })
        .collect()
}
