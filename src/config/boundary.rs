//! Wall-normal boundary conditions
//!
//! The solver's configuration names a boundary type (`yBCLeft`,
//! `yBCRight`) and writes a wall velocity as a 3-vector, or a marker string
//! for periodic boundaries. Both are resolved once, here, into a
//! [`BoundaryCondition`] so that the rest of the pipeline dispatches on a
//! variant instead of comparing strings.
//!
//! Accepted boundary types are no-slip walls (`AdiabaticWall`,
//! `IsothermalWall`, `NonUniformTemperatureWall`, ...: any type ending in
//! `Wall`) and `Periodic`.

use nalgebra::Vector3;
use serde::Deserialize;

use crate::error::{Result, VerificationError, WallSide};

/// Marker the solver uses for periodic boundaries
pub const PERIODIC_MARKER: &str = "Periodic";

/// Boundary condition along the wall-normal axis
///
/// - `NoSlip(velocity)`: solid wall moving with `velocity`; the solver pads
///   the domain with one ghost layer at this boundary
/// - `Periodic`: wrap-around boundary, no ghost layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition {
    NoSlip(Vector3<f64>),
    Periodic,
}

impl BoundaryCondition {
    /// Stationary no-slip wall
    pub fn stationary_wall() -> Self {
        Self::NoSlip(Vector3::zeros())
    }

    /// Check periodic boundary
    pub fn is_periodic(&self) -> bool {
        matches!(self, Self::Periodic)
    }

    /// Wall velocity, `None` for periodic boundaries
    pub fn wall_velocity(&self) -> Option<&Vector3<f64>> {
        match self {
            Self::NoSlip(velocity) => Some(velocity),
            Self::Periodic => None,
        }
    }

    /// Ghost layers the solver stores at this boundary
    pub fn ghost_layers(&self) -> usize {
        match self {
            Self::NoSlip(_) => 1,
            Self::Periodic => 0,
        }
    }
}

/// Boundary value as written in the configuration document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawBoundary {
    Velocity([f64; 3]),
    Marker(String),
}

/// `true` for `"Periodic"`, in any case, with or without a trailing colon
pub(crate) fn is_periodic_marker(marker: &str) -> bool {
    marker
        .trim()
        .trim_end_matches(':')
        .eq_ignore_ascii_case(PERIODIC_MARKER)
}

/// Boundary type named by `yBCLeft` / `yBCRight`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BoundaryType {
    Wall,
    Periodic,
}

/// Resolve a boundary type entry
///
/// Any type other than a wall or `Periodic` fails with `UnsupportedBoundary`.
pub(crate) fn resolve_type(value: &serde_json::Value, side: WallSide) -> Result<BoundaryType> {
    let marker = match value.as_str() {
        Some(marker) => marker,
        None => {
            return Err(VerificationError::UnsupportedBoundary { side, marker: value.to_string() });
        }
    };

    if is_periodic_marker(marker) {
        Ok(BoundaryType::Periodic)
    } else if marker.trim().to_ascii_lowercase().ends_with("wall") {
        Ok(BoundaryType::Wall)
    } else {
        Err(VerificationError::UnsupportedBoundary { side, marker: marker.to_string() })
    }
}

impl RawBoundary {
    /// Resolve the raw value into a typed boundary condition
    pub(crate) fn resolve(&self, side: WallSide) -> Result<BoundaryCondition> {
        match self {
            RawBoundary::Velocity(v) => Ok(BoundaryCondition::NoSlip(Vector3::from(*v))),
            RawBoundary::Marker(marker) if is_periodic_marker(marker) => {
                Ok(BoundaryCondition::Periodic)
            }
            RawBoundary::Marker(marker) => Err(VerificationError::UnsupportedBoundary {
                side,
                marker: marker.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periodic_marker_variants() {
        assert!(is_periodic_marker("Periodic"));
        assert!(is_periodic_marker("periodic"));
        assert!(is_periodic_marker("Periodic:"));
        assert!(!is_periodic_marker("NSCBC_Outflow"));
    }

    #[test]
    fn test_resolve_velocity() {
        let raw = RawBoundary::Velocity([2.0, 0.0, 0.0]);
        let bc = raw.resolve(WallSide::Right).unwrap();
        assert_eq!(bc, BoundaryCondition::NoSlip(Vector3::new(2.0, 0.0, 0.0)));
        assert_eq!(bc.ghost_layers(), 1);
    }

    #[test]
    fn test_resolve_periodic() {
        let raw = RawBoundary::Marker("Periodic".to_string());
        let bc = raw.resolve(WallSide::Left).unwrap();
        assert!(bc.is_periodic());
        assert_eq!(bc.wall_velocity(), None);
        assert_eq!(bc.ghost_layers(), 0);
    }

    #[test]
    fn test_resolve_unknown_marker_fails() {
        let raw = RawBoundary::Marker("SuperSonicInflow".to_string());
        match raw.resolve(WallSide::Left) {
            Err(VerificationError::UnsupportedBoundary { side, marker }) => {
                assert_eq!(side, WallSide::Left);
                assert_eq!(marker, "SuperSonicInflow");
            }
            other => panic!("Expected UnsupportedBoundary, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_boundary_types() {
        let wall = serde_json::json!("IsothermalWall");
        assert_eq!(resolve_type(&wall, WallSide::Left).unwrap(), BoundaryType::Wall);

        let periodic = serde_json::json!("Periodic");
        assert_eq!(resolve_type(&periodic, WallSide::Right).unwrap(), BoundaryType::Periodic);

        let outflow = serde_json::json!("NSCBC_Outflow");
        match resolve_type(&outflow, WallSide::Right) {
            Err(VerificationError::UnsupportedBoundary { side, marker }) => {
                assert_eq!(side, WallSide::Right);
                assert_eq!(marker, "NSCBC_Outflow");
            }
            other => panic!("Expected UnsupportedBoundary, got {:?}", other),
        }

        let not_a_name = serde_json::json!(3);
        assert!(resolve_type(&not_a_name, WallSide::Left).is_err());
    }

    #[test]
    fn test_untagged_deserialization() {
        let v: RawBoundary = serde_json::from_str("[0.0, 0.0, 0.0]").unwrap();
        assert!(matches!(v, RawBoundary::Velocity(_)));

        let m: RawBoundary = serde_json::from_str("\"Periodic\"").unwrap();
        assert!(matches!(m, RawBoundary::Marker(_)));
    }
}
