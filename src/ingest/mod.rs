//! Subject File Ingestion
//!
//! Reads one delimited file per subject and decides, row by row, which
//! records carry trajectory data, which are preserved non-trajectory rows
//! (questionnaires, attention checks), and which are dropped.

pub mod classifier;
pub mod reader;

pub use classifier::{RowClass, RowClassifier};
pub use reader::{RawRow, SubjectFile};
