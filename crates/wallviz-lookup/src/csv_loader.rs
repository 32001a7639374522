//! Delimited-text table loader.
//!
//! A lookup table file is a header row followed by data rows:
//!
//! ```text
//! default, 0.0, 1.39, 2.78      <- header: column axis from the 2nd cell on
//! 0.0,     0.3, -0.2, -0.4      <- data:   row key, then one value per column
//! 0.1,     0.6,  0.3,  0.1
//! ```
//!
//! The first cell of the header is a label and is ignored.  Empty lines are
//! skipped; every other line must have as many cells as the header.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

/// Raw cells, one `Vec<String>` per non-empty line.
pub type Table = Vec<Vec<String>>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("cannot open {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read {path}: file contains no rows")]
    EmptyTable { path: PathBuf },

    #[error("cannot read {path}: {reason}")]
    MalformedTable { path: PathBuf, reason: String },

    #[error("cannot read {path}: cell ({row}, {column}) = '{value}' is not a number")]
    InvalidNumber {
        path: PathBuf,
        row: usize,
        column: usize,
        value: String,
    },
}

/// Reads and interprets one lookup table file.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, split each line on `delimiter` and validate the shape.
    ///
    /// # Errors
    ///
    /// [`CsvError::FileUnreadable`] when the file cannot be opened or read,
    /// otherwise whatever [`validate_data`] reports.
    pub fn read_csv(&self, delimiter: char) -> Result<Table, CsvError> {
        let unreadable = |source| CsvError::FileUnreadable {
            path: self.path.clone(),
            source,
        };
        let file = File::open(&self.path).map_err(unreadable)?;

        let mut table = Table::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(unreadable)?;
            let tokens = split_line(&line, delimiter);
            if !tokens.is_empty() {
                table.push(tokens);
            }
        }

        validate_data(&table, &self.path)?;
        Ok(table)
    }

    /// Values of the data rows, skipping the key column.
    pub fn value_map(&self, table: &Table) -> Result<Vec<Vec<f64>>, CsvError> {
        table
            .iter()
            .enumerate()
            .skip(1)
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .skip(1)
                    .map(|(column, cell)| self.parse_cell(row, column, cell))
                    .collect()
            })
            .collect()
    }

    /// Row axis: the first cell of every data row.
    pub fn row_index(&self, table: &Table) -> Result<Vec<f64>, CsvError> {
        table
            .iter()
            .enumerate()
            .skip(1)
            .map(|(row, cells)| match cells.first() {
                Some(cell) => self.parse_cell(row, 0, cell),
                None => Err(self.malformed(format!("row {row} is empty"))),
            })
            .collect()
    }

    /// Column axis: the header cells after the label.
    pub fn column_index(&self, table: &Table) -> Result<Vec<f64>, CsvError> {
        let header = table.first().ok_or_else(|| CsvError::EmptyTable {
            path: self.path.clone(),
        })?;
        header
            .iter()
            .enumerate()
            .skip(1)
            .map(|(column, cell)| self.parse_cell(0, column, cell))
            .collect()
    }

    fn parse_cell(&self, row: usize, column: usize, cell: &str) -> Result<f64, CsvError> {
        cell.trim().parse().map_err(|_| CsvError::InvalidNumber {
            path: self.path.clone(),
            row,
            column,
            value: cell.to_string(),
        })
    }

    pub(crate) fn malformed(&self, reason: String) -> CsvError {
        CsvError::MalformedTable {
            path: self.path.clone(),
            reason,
        }
    }
}

/// Split like a stream tokenizer: an empty line has no tokens and a single
/// trailing delimiter does not produce an empty last cell.
fn split_line(line: &str, delimiter: char) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }
    let line = line.strip_suffix(delimiter).unwrap_or(line);
    line.split(delimiter).map(str::to_string).collect()
}

/// Check that `table` has a header of at least two cells and that every row
/// is as wide as the header.
pub fn validate_data(table: &Table, path: &Path) -> Result<(), CsvError> {
    let header = table.first().ok_or_else(|| CsvError::EmptyTable {
        path: path.to_path_buf(),
    })?;
    if header.len() < 2 {
        return Err(CsvError::MalformedTable {
            path: path.to_path_buf(),
            reason: "CSV file should have at least 2 columns".to_string(),
        });
    }
    if let Some((row, cells)) = table
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, cells)| cells.len() != header.len())
    {
        return Err(CsvError::MalformedTable {
            path: path.to_path_buf(),
            reason: format!(
                "each row should have the same number of columns (row {row} has {}, header has {})",
                cells.len(),
                header.len()
            ),
        });
    }
    Ok(())
}

/// Clamp `value` into `[axis[0], axis[last]]`, logging a warning when it
/// was out of range.  `name` identifies the input in the log line.
///
/// An empty axis leaves `value` unchanged.  The bounds are the first and last
/// axis entries as given, so an unsorted axis never panics; it just clamps to
/// whatever those entries are.
pub fn clamp_value(value: f64, axis: &[f64], name: &str) -> f64 {
    let (Some(&min), Some(&max)) = (axis.first(), axis.last()) else {
        return value;
    };
    if value < min || max < value {
        warn!(input = %name, value, min, max, "input is out of range; using closest value");
        return value.max(min).min(max);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_table(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("map.csv");
        let mut f = File::create(&path).expect("create");
        f.write_all(contents.as_bytes()).expect("write");
        (dir, path)
    }

    // ── read_csv ────────────────────────────────────────────────────────────

    #[test]
    fn reads_rows_and_skips_blank_lines() {
        let (_dir, path) = write_table("default,0,10\n\n0,1.5,2.5\r\n1,3,4\n");
        let table = CsvLoader::new(&path).read_csv(',').expect("valid");
        assert_eq!(table.len(), 3);
        assert_eq!(table[1], ["0", "1.5", "2.5"]);
    }

    #[test]
    fn custom_delimiter() {
        let (_dir, path) = write_table("x;1;2\n0;5;6\n");
        let table = CsvLoader::new(&path).read_csv(';').expect("valid");
        assert_eq!(table[0], ["x", "1", "2"]);
    }

    #[test]
    fn trailing_delimiter_is_not_a_cell() {
        assert_eq!(split_line("a,b,", ','), ["a", "b"]);
        assert_eq!(split_line("a,,b", ','), ["a", "", "b"]);
        assert!(split_line("", ',').is_empty());
    }

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let err = CsvLoader::new(dir.path().join("absent.csv")).read_csv(',').unwrap_err();
        assert!(matches!(err, CsvError::FileUnreadable { .. }));
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn empty_file_is_reported_not_indexed() {
        let (_dir, path) = write_table("\n\n");
        let err = CsvLoader::new(&path).read_csv(',').unwrap_err();
        assert!(matches!(err, CsvError::EmptyTable { .. }));
    }

    // ── validate_data ───────────────────────────────────────────────────────

    #[test]
    fn single_column_header_is_malformed() {
        let (_dir, path) = write_table("only\n1\n");
        let err = CsvLoader::new(&path).read_csv(',').unwrap_err();
        assert!(matches!(err, CsvError::MalformedTable { .. }));
        assert!(err.to_string().contains("at least 2 columns"));
    }

    #[test]
    fn ragged_row_is_malformed() {
        let (_dir, path) = write_table("h,1,2\n0,1,2\n1,1\n");
        let err = CsvLoader::new(&path).read_csv(',').unwrap_err();
        match err {
            CsvError::MalformedTable { reason, .. } => assert!(reason.contains("row 2"), "{reason}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    // ── axes and values ─────────────────────────────────────────────────────

    #[test]
    fn axes_and_values_are_parsed() {
        let (_dir, path) = write_table("default, 0.0, 5.0\n0.0, 1.0, 2.0\n0.5, 3.0, 4.0\n");
        let loader = CsvLoader::new(&path);
        let table = loader.read_csv(',').expect("valid");

        assert_eq!(loader.column_index(&table).unwrap(), [0.0, 5.0]);
        assert_eq!(loader.row_index(&table).unwrap(), [0.0, 0.5]);
        assert_eq!(loader.value_map(&table).unwrap(), [vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn non_numeric_cell_is_located() {
        let (_dir, path) = write_table("default,0,1\n0,1,oops\n");
        let loader = CsvLoader::new(&path);
        let table = loader.read_csv(',').expect("shape is valid");
        match loader.value_map(&table).unwrap_err() {
            CsvError::InvalidNumber { row, column, value, .. } => {
                assert_eq!((row, column), (1, 2));
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    // ── clamp_value ─────────────────────────────────────────────────────────

    #[test]
    fn clamp_passes_in_range_values() {
        assert_eq!(clamp_value(1.5, &[0.0, 1.0, 2.0], "velocity"), 1.5);
    }

    #[test]
    fn clamp_snaps_to_nearest_bound() {
        assert_eq!(clamp_value(-3.0, &[0.0, 1.0, 2.0], "velocity"), 0.0);
        assert_eq!(clamp_value(9.0, &[0.0, 1.0, 2.0], "velocity"), 2.0);
    }

    #[test]
    fn clamp_with_empty_axis_is_identity() {
        assert_eq!(clamp_value(4.0, &[], "pedal"), 4.0);
    }

    #[test]
    fn clamp_on_descending_axis_does_not_panic() {
        assert_eq!(clamp_value(3.0, &[5.0, 1.0], "pedal"), 1.0);
        assert_eq!(clamp_value(0.0, &[5.0, 1.0], "pedal"), 1.0);
    }
}
