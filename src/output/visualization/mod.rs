//! Visualization of comparison results
//!
//! This module renders comparison figures using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`)
//! - **profile**: Simulated vs analytical velocity profile
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use couette_verify::output::visualization::{plot_comparison, PlotConfig};
//!
//! // Default config
//! plot_comparison(&result, "couette_solutions.png", None)?;
//!
//! // Custom config
//! let config = PlotConfig::couette("Soleil-X, 32 cells").simulation_label("Soleil-X");
//! plot_comparison(&result, "couette_solutions.svg", Some(&config))?;
//! ```

pub mod config;
pub mod profile;

pub use config::{PlotConfig, NO_TITLE};

pub use profile::{plot_comparison, DEFAULT_PLOT_FILE};
