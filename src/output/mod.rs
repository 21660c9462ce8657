//! Output module for comparison results
//!
//! - **Visualization**: PNG/SVG overlay plots using plotters
//! - **Export**: CSV tables for external analysis
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use couette_verify::output::{plot_comparison, export_comparison_csv};
//!
//! plot_comparison(&result, "couette_solutions.png", None)?;
//! export_comparison_csv(&result, &slice, "couette.csv", None)?;
//! ```

pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use visualization::{plot_comparison, PlotConfig, DEFAULT_PLOT_FILE};

pub use export::{export_comparison_csv, CsvConfig, CsvMetadata};
