//! CSV export of a Couette comparison
//!
//! Writes one row per wall-normal cell with the simulated and analytical
//! velocities next to the auxiliary fields of the extracted slice, so the
//! comparison can be re-plotted in pandas, MATLAB or a spreadsheet.
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use couette_verify::output::export::{export_comparison_csv, CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_case(32, 1.0, 2.0, result.l2_error));
//!
//! export_comparison_csv(&result, &slice, "couette.csv", Some(&config))?;
//! ```
//!
//! **Output** (`couette.csv`):
//! ```csv
//! # Couette Flow Verification
//! # Generated: 2026-10-16T09:30:00+00:00
//! # Cells: 32
//! # Wall gap: 1 m
//! # Top-wall velocity: 2 m/s
//! # L2 error: 1.2e-4
//! #
//! y,u_simulated,u_analytical,rho,pressure,temperature
//! 0.015625,0.031249,0.031250,1.000000,101325.000000,300.000000
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::compare::ComparisonResult;
use crate::error::{Result, VerificationError};
use crate::extract::ExtractedSlice;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set column delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only non-None fields are written.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Number of wall-normal cells
    pub cells: Option<usize>,

    /// Wall gap (m)
    pub wall_gap: Option<f64>,

    /// Top-wall velocity (m/s)
    pub wall_velocity: Option<f64>,

    /// L2 error of the comparison
    pub l2_error: Option<f64>,

    /// Source store
    pub store: Option<String>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from the case parameters
    pub fn from_case(cells: usize, wall_gap: f64, wall_velocity: f64, l2_error: f64) -> Self {
        Self {
            cells: Some(cells),
            wall_gap: Some(wall_gap),
            wall_velocity: Some(wall_velocity),
            l2_error: Some(l2_error),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header(file: &mut impl Write, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(file, "# Couette Flow Verification")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(cells) = metadata.cells {
        writeln!(file, "# Cells: {}", cells)?;
    }
    if let Some(gap) = metadata.wall_gap {
        writeln!(file, "# Wall gap: {} m", gap)?;
    }
    if let Some(u) = metadata.wall_velocity {
        writeln!(file, "# Top-wall velocity: {} m/s", u)?;
    }
    if let Some(error) = metadata.l2_error {
        writeln!(file, "# L2 error: {:e}", error)?;
    }
    if let Some(store) = &metadata.store {
        writeln!(file, "# Store: {}", store)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision
fn format_number(value: f64, config: &CsvConfig) -> String {
    format!("{:.prec$}", value, prec = config.precision)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Column headers, in output order
pub const COLUMNS: [&str; 6] = ["y", "u_simulated", "u_analytical", "rho", "pressure", "temperature"];

/// Export a comparison and its slice to CSV
///
/// # Errors
///
/// - `Export` for empty data, mismatched lengths or non-finite coordinates
/// - `Io` for file creation/write errors
pub fn export_comparison_csv(
    result: &ComparisonResult,
    slice: &ExtractedSlice,
    output_path: impl AsRef<Path>,
    configuration: Option<&CsvConfig>,
) -> Result<()> {
    let output_path = output_path.as_ref();

    // ============================= Validation =============================

    if result.is_empty() {
        return Err(VerificationError::Export {
            reason: "empty data: comparison holds no points".to_string(),
        });
    }

    if slice.len() != result.len() {
        return Err(VerificationError::Export {
            reason: format!(
                "data length mismatch: {} slice points versus {} compared points",
                slice.len(),
                result.len()
            ),
        });
    }

    if result.y.iter().any(|y| !y.is_finite()) {
        return Err(VerificationError::Export {
            reason: "invalid data: NaN or Inf detected in coordinates".to_string(),
        });
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Write ==================================

    let file = File::create(output_path).map_err(|e| VerificationError::io(output_path, e))?;
    let mut writer = BufWriter::new(file);

    write_rows(&mut writer, result, slice, configuration)
        .and_then(|_| writer.flush())
        .map_err(|e| VerificationError::io(output_path, e))?;

    log::info!("comparison table written to {}", output_path.display());

    Ok(())
}

fn write_rows(
    writer: &mut impl Write,
    result: &ComparisonResult,
    slice: &ExtractedSlice,
    configuration: &CsvConfig,
) -> std::io::Result<()> {
    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(writer, metadata)?;
        }
    }

    let delimiter = configuration.delimiter.to_string();
    writeln!(writer, "{}", COLUMNS.join(&delimiter))?;

    for i in 0..result.len() {
        let row = [
            result.y[i],
            result.u_simulated[i],
            result.u_analytical[i],
            slice.density[i],
            slice.pressure[i],
            slice.temperature[i],
        ]
        .iter()
        .map(|v| format_number(*v, configuration))
        .collect::<Vec<_>>()
        .join(&delimiter);

        writeln!(writer, "{}", row)?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::DVector;
    use std::fs;

    fn fixture(n: usize) -> (ComparisonResult, ExtractedSlice) {
        let y = DVector::from_fn(n, |i, _| (i as f64 + 0.5) / n as f64);
        let u = y.map(|y| 2.0 * y);
        let result = ComparisonResult {
            l2_error: 0.0,
            y,
            u_simulated: u.clone(),
            u_analytical: u.clone(),
        };
        let slice = ExtractedSlice {
            velocity: u,
            density: DVector::from_element(n, 1.0),
            pressure: DVector::from_element(n, 101_325.0),
            temperature: DVector::from_element(n, 300.0),
            store_fields: vec![],
            ghost_removed: true,
        };
        (result, slice)
    }

    #[test]
    fn test_export_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("couette.csv");
        let (result, slice) = fixture(4);

        export_comparison_csv(&result, &slice, &path, None).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "y,u_simulated,u_analytical,rho,pressure,temperature");
        assert_eq!(lines[1], "0.125000,0.250000,0.250000,1.000000,101325.000000,300.000000");
    }

    #[test]
    fn test_export_with_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("couette.csv");
        let (result, slice) = fixture(2);

        let mut metadata = CsvMetadata::from_case(2, 1.0, 2.0, 0.0);
        metadata.add_custom("Solver".to_string(), "Soleil-X".to_string());
        let config = CsvConfig::default().with_metadata(metadata);

        export_comparison_csv(&result, &slice, &path, Some(&config)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Couette Flow Verification"));
        assert!(content.contains("# Cells: 2"));
        assert!(content.contains("# Solver: Soleil-X"));
        assert_eq!(content.lines().filter(|l| !l.starts_with('#')).count(), 3);
    }

    #[test]
    fn test_export_delimiter_and_precision() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("couette.csv");
        let (result, slice) = fixture(2);

        let config = CsvConfig::default().delimiter(';').precision(2);
        export_comparison_csv(&result, &slice, &path, Some(&config)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().next().unwrap(), "y;u_simulated;u_analytical;rho;pressure;temperature");
        assert_eq!(content.lines().nth(1).unwrap(), "0.25;0.50;0.50;1.00;101325.00;300.00");
    }

    #[test]
    fn test_export_length_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let (result, _) = fixture(4);
        let (_, slice) = fixture(3);

        assert!(matches!(
            export_comparison_csv(&result, &slice, dir.path().join("bad.csv"), None),
            Err(VerificationError::Export { .. })
        ));
    }
}
