//! Export module for comparison results.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use couette_verify::output::export::{export_comparison_csv, CsvConfig};
//!
//! let config = CsvConfig::default().delimiter(';').precision(10);
//! export_comparison_csv(&result, &slice, "couette.csv", Some(&config))?;
//! ```

pub mod csv;

pub use csv::{export_comparison_csv, CsvConfig, CsvMetadata};
