//! `wallviz-lookup` – CSV lookup tables for vehicle-command conversion.
//!
//! # Modules
//!
//! - [`csv_loader`] – [`CsvLoader`][csv_loader::CsvLoader]: reads a
//!   delimited file into raw cells, validates its shape and extracts the
//!   value map and both index axes.  [`clamp_value`][csv_loader::clamp_value]
//!   snaps out-of-range queries to the nearest axis end.
//! - [`table`] – [`LookupTable`][table::LookupTable]: the indexed map with
//!   clamped bilinear lookup.

pub mod csv_loader;
pub mod table;

pub use csv_loader::{clamp_value, validate_data, CsvError, CsvLoader, Table};
pub use table::LookupTable;
