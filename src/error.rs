//! Error types for the verification pipeline
//!
//! Every stage reports failures through [`VerificationError`]. Variants are
//! grouped by the stage that raises them so callers (and tests) can tell an
//! unsupported configuration apart from a broken output store or a grid
//! mismatch.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, VerificationError>;

/// Which wall-normal boundary a boundary condition belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    /// Bottom wall (`yBCLeft*`)
    Left,
    /// Top wall (`yBCRight*`)
    Right,
}

impl std::fmt::Display for WallSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WallSide::Left => write!(f, "left (bottom)"),
            WallSide::Right => write!(f, "right (top)"),
        }
    }
}

/// Verification error enum
#[derive(Error, Debug)]
pub enum VerificationError {
    // ====== Configuration ======

    /// The case violates an assumption of the analytical solution
    #[error("configuration unsupported: {reason}")]
    ConfigUnsupported { reason: String },

    /// Boundary condition marker other than a no-slip wall or periodic
    #[error("unsupported boundary condition on the {side} wall: {marker:?}")]
    UnsupportedBoundary { side: WallSide, marker: String },

    /// Configuration document missing a field or holding the wrong type
    #[error("malformed configuration {}: {message}", path.display())]
    MalformedConfig { path: PathBuf, message: String },

    /// Grid parameters outside the domain of the analytical profile
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    /// Required environment variable absent at startup
    #[error("environment variable {variable} is not set (or pass --base-dir)")]
    MissingEnvironment { variable: &'static str },

    // ====== Output store ======

    /// Store extension not handled by any compiled-in backend
    #[error("unsupported store format: {}", path.display())]
    UnsupportedStoreFormat { path: PathBuf },

    /// Backend failure while opening or reading a store
    #[error("cannot read store {}: {source}", path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Required field absent from the store
    #[error("field {name:?} not found in store")]
    MissingField { name: String },

    /// Field present but with an unexpected layout
    #[error("malformed field {field:?}: {reason}")]
    MalformedStore { field: String, reason: String },

    /// Too few wall-normal points to strip one ghost layer per end
    #[error("cannot remove ghost layers: wall-normal extent {ny} < 3")]
    GhostLayerUnderflow { ny: usize },

    /// Requested slice index beyond the field extent
    #[error("{axis} slice index {index} out of range (extent {len})")]
    SliceOutOfRange { axis: char, index: usize, len: usize },

    // ====== Comparison ======

    /// Extracted slice and analytical grid disagree in length
    #[error("shape mismatch: simulated slice has {simulated} points, analytical grid has {analytical}")]
    ShapeMismatch { simulated: usize, analytical: usize },

    /// L2 error above the requested acceptance threshold
    #[error("L2 error {error:e} exceeds tolerance {tolerance:e}")]
    ToleranceExceeded { error: f64, tolerance: f64 },

    // ====== Reporting ======

    /// Plot rendering failure
    #[error("plot rendering failed: {reason}")]
    Plot { reason: String },

    /// Data export failure
    #[error("export failed: {reason}")]
    Export { reason: String },

    /// Plain I/O failure on a known path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl VerificationError {
    /// Wrap a backend error raised while accessing `path`
    pub fn store(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Store {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Wrap an I/O error raised while accessing `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// `true` when the case itself is outside what the analytical solution covers
    pub fn is_unsupported_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigUnsupported { .. } | Self::UnsupportedBoundary { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message() {
        let err = VerificationError::ShapeMismatch { simulated: 34, analytical: 32 };
        assert_eq!(
            err.to_string(),
            "shape mismatch: simulated slice has 34 points, analytical grid has 32"
        );
    }

    #[test]
    fn test_unsupported_configuration_classification() {
        let unsupported = VerificationError::ConfigUnsupported { reason: "origin".to_string() };
        assert!(unsupported.is_unsupported_configuration());

        let boundary = VerificationError::UnsupportedBoundary {
            side: WallSide::Left,
            marker: "Symmetry".to_string(),
        };
        assert!(boundary.is_unsupported_configuration());

        let missing = VerificationError::MissingField { name: "rho".to_string() };
        assert!(!missing.is_unsupported_configuration());
    }

    #[test]
    fn test_boundary_message_names_side() {
        let err = VerificationError::UnsupportedBoundary {
            side: WallSide::Right,
            marker: "Periodic".to_string(),
        };
        assert!(err.to_string().contains("right (top)"));
    }
}
