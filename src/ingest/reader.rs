//! Subject CSV Reader
//!
//! Loads one subject file into memory as raw string records. Nothing is
//! interpreted at this stage; coordinate parsing and row classification
//! happen downstream so that a single malformed row cannot poison the
//! record order.

use std::path::Path;

use crate::Result;

/// One record from a subject file. Fields are aligned with the file header;
/// an empty cell is a missing value. The trajectory / non-trajectory
/// partition of a row is fixed at ingestion and never changes.
#[derive(Debug, Clone)]
pub struct RawRow {
    fields: Vec<Option<String>>,
}

impl RawRow {
    /// Build a row from raw cell values; empty cells become missing
    pub fn new(cells: Vec<String>) -> Self {
        let fields = cells
            .into_iter()
            .map(|c| {
                let trimmed = c.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();
        Self { fields }
    }

    /// Value at a column index, if present and non-missing
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).and_then(|f| f.as_deref())
    }

    /// Whether the cell at `index` holds a non-missing value
    pub fn has_value(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// All fields in header order
    pub fn fields(&self) -> &[Option<String>] {
        &self.fields
    }
}

/// A fully loaded subject file: header plus raw rows in original order
#[derive(Debug, Clone)]
pub struct SubjectFile {
    /// Source file stem, kept for log messages
    pub source: String,
    /// Column names from the file header
    pub headers: Vec<String>,
    /// Raw rows in file order
    pub rows: Vec<RawRow>,
}

impl SubjectFile {
    /// Read a subject CSV file
    pub fn read(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut cells: Vec<String> = record.iter().map(|c| c.to_string()).collect();
            // Short records happen in hand-edited files; pad to header width
            cells.resize(headers.len(), String::new());
            rows.push(RawRow::new(cells));
        }

        let source = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        Ok(Self {
            source,
            headers,
            rows,
        })
    }

    /// Index of a named column, if the file has it
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a named column, or a parse error naming the missing column
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| {
            crate::Error::Parse(format!("column '{}' absent from '{}'", name, self.source))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_subject_file() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "07.csv",
            "x_cord,y_cord,choice\n\"1,2,3\",\"4,5,6\",left\n,,\n",
        );

        let file = SubjectFile::read(&path).unwrap();
        assert_eq!(file.source, "07");
        assert_eq!(file.headers, vec!["x_cord", "y_cord", "choice"]);
        assert_eq!(file.rows.len(), 2);
        assert_eq!(file.rows[0].get(0), Some("1,2,3"));
        assert_eq!(file.rows[0].get(2), Some("left"));
        assert!(!file.rows[1].has_value(0));
    }

    #[test]
    fn test_require_column_reports_missing() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "s.csv", "a,b\n1,2\n");
        let file = SubjectFile::read(&path).unwrap();
        assert_eq!(file.require_column("a").unwrap(), 0);
        assert!(file.require_column("x_cord").is_err());
    }

    #[test]
    fn test_short_records_are_padded() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "s.csv", "a,b,c\n1\n");
        let file = SubjectFile::read(&path).unwrap();
        assert_eq!(file.rows[0].get(0), Some("1"));
        assert!(!file.rows[0].has_value(2));
    }
}
