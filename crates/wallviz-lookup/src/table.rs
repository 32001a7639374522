//! [`LookupTable`] – a 2-D map with sorted axes and clamped bilinear lookup.
//!
//! # Example
//!
//! ```rust,no_run
//! use wallviz_lookup::LookupTable;
//!
//! let accel_map = LookupTable::load("accel_map.csv", ',').unwrap();
//! // velocity on the row axis, pedal on the column axis
//! let accel = accel_map.lookup(3.2, 0.15);
//! # let _ = accel;
//! ```

use std::path::Path;

use tracing::warn;

use crate::csv_loader::{clamp_value, validate_data, CsvError, CsvLoader, Table};

#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    row_index: Vec<f64>,
    column_index: Vec<f64>,
    values: Vec<Vec<f64>>,
}

impl LookupTable {
    /// Read, validate and index the file at `path`.
    pub fn load(path: impl AsRef<Path>, delimiter: char) -> Result<Self, CsvError> {
        let loader = CsvLoader::new(path.as_ref());
        let table = loader.read_csv(delimiter)?;
        Self::from_table(&loader, &table)
    }

    /// Index a table.  Its shape is checked again, both axes must be
    /// strictly ascending and there must be at least one data row.
    pub fn from_table(loader: &CsvLoader, table: &Table) -> Result<Self, CsvError> {
        validate_data(table, loader.path())?;
        let row_index = loader.row_index(table)?;
        let column_index = loader.column_index(table)?;
        let values = loader.value_map(table)?;

        if row_index.is_empty() {
            return Err(loader.malformed("table has a header but no data rows".to_string()));
        }
        if !is_strictly_ascending(&row_index) {
            return Err(loader.malformed("row keys must be strictly ascending".to_string()));
        }
        if !is_strictly_ascending(&column_index) {
            return Err(loader.malformed("header values must be strictly ascending".to_string()));
        }

        Ok(Self {
            row_index,
            column_index,
            values,
        })
    }

    pub fn row_index(&self) -> &[f64] {
        &self.row_index
    }

    pub fn column_index(&self) -> &[f64] {
        &self.column_index
    }

    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// Bilinearly interpolated value at (`row_key`, `column_key`).
    ///
    /// Keys outside an axis are clamped to its nearest end (with a warning).
    /// A NaN key yields NaN.
    pub fn lookup(&self, row_key: f64, column_key: f64) -> f64 {
        if row_key.is_nan() || column_key.is_nan() {
            warn!(row_key, column_key, "lookup key is NaN");
            return f64::NAN;
        }
        let row_key = clamp_value(row_key, &self.row_index, "row key");
        let column_key = clamp_value(column_key, &self.column_index, "column key");

        let (r0, r1, rt) = bracket(&self.row_index, row_key);
        let (c0, c1, ct) = bracket(&self.column_index, column_key);

        let lerp = |a: f64, b: f64, t: f64| a + (b - a) * t;
        let top = lerp(self.values[r0][c0], self.values[r0][c1], ct);
        let bottom = lerp(self.values[r1][c0], self.values[r1][c1], ct);
        lerp(top, bottom, rt)
    }
}

fn is_strictly_ascending(axis: &[f64]) -> bool {
    axis.windows(2).all(|w| w[0] < w[1])
}

/// Neighbouring indices around `x` on a sorted, non-empty axis and the
/// interpolation weight of the upper one.  `x` must already be clamped.
fn bracket(axis: &[f64], x: f64) -> (usize, usize, f64) {
    let upper = axis.partition_point(|&v| v < x);
    if upper == 0 {
        return (0, 0, 0.0);
    }
    if upper >= axis.len() {
        let last = axis.len() - 1;
        return (last, last, 0.0);
    }
    let lower = upper - 1;
    let t = (x - axis[lower]) / (axis[upper] - axis[lower]);
    (lower, upper, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load(contents: &str) -> Result<LookupTable, CsvError> {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("map.csv");
        std::fs::File::create(&path)
            .and_then(|mut f| f.write_all(contents.as_bytes()))
            .expect("write");
        LookupTable::load(&path, ',')
    }

    const ACCEL_MAP: &str = "default,0.0,1.0\n0.0,0.0,10.0\n2.0,20.0,30.0\n";

    #[test]
    fn exact_grid_points() {
        let t = load(ACCEL_MAP).unwrap();
        assert_eq!(t.lookup(0.0, 0.0), 0.0);
        assert_eq!(t.lookup(0.0, 1.0), 10.0);
        assert_eq!(t.lookup(2.0, 0.0), 20.0);
        assert_eq!(t.lookup(2.0, 1.0), 30.0);
    }

    #[test]
    fn interpolates_between_cells() {
        let t = load(ACCEL_MAP).unwrap();
        assert!((t.lookup(1.0, 0.5) - 15.0).abs() < 1e-9);
        assert!((t.lookup(0.0, 0.25) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_keys_are_clamped() {
        let t = load(ACCEL_MAP).unwrap();
        assert_eq!(t.lookup(-5.0, 0.0), 0.0);
        assert_eq!(t.lookup(9.0, 7.0), 30.0);
    }

    #[test]
    fn single_value_column_axis() {
        let t = load("default,1.0\n0.0,4.0\n1.0,8.0\n").unwrap();
        assert!((t.lookup(0.5, 3.0) - 6.0).abs() < 1e-9);
        assert_eq!(t.column_index(), [1.0]);
    }

    #[test]
    fn header_only_is_malformed() {
        let err = load("default,0.0,1.0\n").unwrap_err();
        assert!(matches!(err, CsvError::MalformedTable { .. }));
    }

    #[test]
    fn unsorted_axis_is_malformed() {
        let err = load("default,1.0,0.0\n0.0,1,2\n").unwrap_err();
        assert!(err.to_string().contains("ascending"));
    }

    #[test]
    fn ragged_table_is_rejected_before_indexing() {
        let loader = CsvLoader::new("inline.csv");
        let table: Table = vec![
            vec!["d".into(), "0".into(), "1".into()],
            vec!["0".into(), "1".into()],
            vec!["1".into(), "3".into(), "4".into()],
        ];
        let err = LookupTable::from_table(&loader, &table).unwrap_err();
        assert!(matches!(err, CsvError::MalformedTable { .. }));
    }

    #[test]
    fn nan_key_yields_nan() {
        let t = load(ACCEL_MAP).unwrap();
        assert!(t.lookup(f64::NAN, 0.0).is_nan());
        assert!(t.lookup(1.0, f64::NAN).is_nan());
    }

    #[test]
    fn exposes_parsed_parts() {
        let t = load(ACCEL_MAP).unwrap();
        assert_eq!(t.row_index(), [0.0, 2.0]);
        assert_eq!(t.values()[1], [20.0, 30.0]);
    }
}
