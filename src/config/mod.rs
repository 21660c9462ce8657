//! Simulation configuration reader
//!
//! Reads the handful of fields the Couette verification needs from the
//! solver's JSON configuration document:
//!
//! ```text
//! {
//!   "Grid": { "yNum": 32, "yWidth": 1.0, "origin": [0.0, 0.0, 0.0], ... },
//!   "BC":   { "yBCLeft": "AdiabaticWall", "yBCLeftVel": [0.0, 0.0, 0.0],
//!             "yBCRight": "AdiabaticWall", "yBCRightVel": [2.0, 0.0, 0.0], ... }
//! }
//! ```
//!
//! Everything else in the document is ignored. The analytical profile only
//! holds for a domain anchored at the origin with a stationary bottom wall;
//! any other case is rejected here with a
//! [`ConfigUnsupported`](crate::error::VerificationError::ConfigUnsupported)
//! error naming the violated assumption. A nonzero `yBCLeftVel` is rejected
//! whatever type `yBCLeft` names.

pub mod boundary;

pub use boundary::{BoundaryCondition, PERIODIC_MARKER};

use nalgebra::Vector3;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, VerificationError, WallSide};
use boundary::{resolve_type, BoundaryType, RawBoundary};

// =================================================================================================
// Raw document layout
// =================================================================================================

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(rename = "Grid")]
    grid: RawGrid,

    #[serde(rename = "BC")]
    bc: RawBoundaries,
}

#[derive(Debug, Deserialize)]
struct RawGrid {
    #[serde(rename = "yNum")]
    y_num: usize,

    #[serde(rename = "yWidth")]
    y_width: f64,

    origin: [f64; 3],
}

#[derive(Debug, Deserialize)]
struct RawBoundaries {
    /// Boundary type, e.g. "Periodic" or a wall type
    #[serde(rename = "yBCLeft", default)]
    y_bc_left: Option<serde_json::Value>,

    #[serde(rename = "yBCLeftVel")]
    y_bc_left_vel: RawBoundary,

    #[serde(rename = "yBCRight", default)]
    y_bc_right: Option<serde_json::Value>,

    #[serde(rename = "yBCRightVel")]
    y_bc_right_vel: RawBoundary,
}

// =================================================================================================
// Simulation configuration
// =================================================================================================

/// Parameters of a Couette verification case
///
/// Constructed once from the configuration document and read-only
/// afterwards. Construction enforces every assumption of the analytical
/// solution, so a `SimulationConfig` in hand is always comparable.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Number of wall-normal cells
    pub y_num: usize,

    /// Wall-normal domain extent [m]
    pub y_width: f64,

    /// Domain origin (always zero once validated)
    pub origin: Vector3<f64>,

    /// Bottom boundary
    pub y_bc_left: BoundaryCondition,

    /// Top boundary
    pub y_bc_right: BoundaryCondition,
}

impl SimulationConfig {
    /// Build and validate a configuration
    pub fn new(
        y_num: usize,
        y_width: f64,
        origin: Vector3<f64>,
        y_bc_left: BoundaryCondition,
        y_bc_right: BoundaryCondition,
    ) -> Result<Self> {
        let config = Self { y_num, y_width, origin, y_bc_left, y_bc_right };
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration document at `path`
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| VerificationError::io(path, e))?;
        Self::parse(&text, path.to_path_buf())
    }

    /// Parse a configuration document held in memory
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse(text, PathBuf::from("<inline>"))
    }

    fn parse(text: &str, path: PathBuf) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(text).map_err(|e| {
            VerificationError::MalformedConfig { path, message: e.to_string() }
        })?;

        let left_velocity = raw.bc.y_bc_left_vel.resolve(WallSide::Left)?;
        if let BoundaryCondition::NoSlip(v) = left_velocity {
            if v != Vector3::zeros() {
                return Err(moving_bottom_wall(&v));
            }
        }

        let y_bc_left = combine(raw.bc.y_bc_left.as_ref(), left_velocity, WallSide::Left)?;
        let y_bc_right = combine(
            raw.bc.y_bc_right.as_ref(),
            raw.bc.y_bc_right_vel.resolve(WallSide::Right)?,
            WallSide::Right,
        )?;

        Self::new(
            raw.grid.y_num,
            raw.grid.y_width,
            Vector3::from(raw.grid.origin),
            y_bc_left,
            y_bc_right,
        )
    }

    /// Check the case against the assumptions of the analytical solution
    pub fn validate(&self) -> Result<()> {
        if self.y_num == 0 {
            return Err(VerificationError::InvalidGrid {
                reason: "yNum must be at least 1".to_string(),
            });
        }

        if !(self.y_width.is_finite() && self.y_width > 0.0) {
            return Err(VerificationError::InvalidGrid {
                reason: format!("yWidth must be positive and finite, got {}", self.y_width),
            });
        }

        if self.origin != Vector3::zeros() {
            return Err(VerificationError::ConfigUnsupported {
                reason: format!(
                    "nonzero domain origin ({}, {}, {}); the analytical profile assumes y_min = 0",
                    self.origin.x, self.origin.y, self.origin.z
                ),
            });
        }

        if let BoundaryCondition::NoSlip(v) = self.y_bc_left {
            if v != Vector3::zeros() {
                return Err(moving_bottom_wall(&v));
            }
        }

        if self.y_bc_right.is_periodic() {
            return Err(VerificationError::UnsupportedBoundary {
                side: WallSide::Right,
                marker: PERIODIC_MARKER.to_string(),
            });
        }

        Ok(())
    }

    /// Tangential velocity of the top wall (`U`)
    pub fn top_wall_velocity(&self) -> f64 {
        self.y_bc_right.wall_velocity().map(|v| v.x).unwrap_or(0.0)
    }

    /// Whether the output store carries a ghost layer at each wall-normal end
    ///
    /// Periodic boundaries are stored without padding.
    pub fn remove_y_ghost(&self) -> bool {
        !self.y_bc_left.is_periodic()
    }

    /// Wall-normal cell size
    pub fn dy(&self) -> f64 {
        self.y_width / self.y_num as f64
    }
}

/// Merge the boundary type with the resolved velocity entry
///
/// A periodic type, or a periodic velocity marker, makes the boundary
/// periodic. Without a type entry the velocity entry decides alone.
fn combine(
    boundary_type: Option<&serde_json::Value>,
    velocity: BoundaryCondition,
    side: WallSide,
) -> Result<BoundaryCondition> {
    match boundary_type.map(|t| resolve_type(t, side)).transpose()? {
        Some(BoundaryType::Periodic) => Ok(BoundaryCondition::Periodic),
        Some(BoundaryType::Wall) | None => Ok(velocity),
    }
}

fn moving_bottom_wall(v: &Vector3<f64>) -> VerificationError {
    VerificationError::ConfigUnsupported {
        reason: format!(
            "nonzero bottom-wall velocity ({}, {}, {}); the analytical profile assumes a stationary bottom wall",
            v.x, v.y, v.z
        ),
    }
}

// =================================================================================================
// Tests
// =================================================================================================
