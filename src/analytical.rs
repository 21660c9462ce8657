//! Analytical plane Couette solution
//!
//! Between a stationary wall at `y = 0` and a wall moving tangentially with
//! velocity `U` at `y = H`, with no pressure gradient, the steady velocity
//! profile is linear:
//!
//! ```text
//! u(y) = (U / H) · y
//! ```
//!
//! The solver stores cell averages, so the profile is sampled at the cell
//! centres of a uniform wall-normal grid:
//!
//! ```text
//! dy  = H / n
//! y_i = dy/2 + i·dy,   i = 0 .. n-1
//! ```
//!
//! # Example
//!
//! ```rust
//! use couette_verify::analytical::{CouetteProfile, UniformGrid1D};
//!
//! let grid = UniformGrid1D::cell_centered(32, 1.0).unwrap();
//! let profile = CouetteProfile::new(2.0, 1.0).unwrap();
//! let u = profile.sample(&grid);
//!
//! assert_eq!(u.len(), 32);
//! assert!((u[0] - 2.0 * 0.015625).abs() < 1e-12);
//! ```

use nalgebra::DVector;

use crate::config::SimulationConfig;
use crate::error::{Result, VerificationError};

// =================================================================================================
// Uniform grid
// =================================================================================================

/// Cell-centred coordinates along the wall-normal axis
#[derive(Debug, Clone, PartialEq)]
pub struct UniformGrid1D {
    width: f64,
    centers: DVector<f64>,
}

impl UniformGrid1D {
    /// Build `n_cells` cell centres spanning `[0, width]`
    ///
    /// # Errors
    ///
    /// `InvalidGrid` if `n_cells == 0` or `width` is not strictly positive.
    pub fn cell_centered(n_cells: usize, width: f64) -> Result<Self> {
        if n_cells == 0 {
            return Err(VerificationError::InvalidGrid {
                reason: "grid needs at least one cell".to_string(),
            });
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(VerificationError::InvalidGrid {
                reason: format!("grid width must be positive and finite, got {}", width),
            });
        }

        let dy = width / n_cells as f64;
        let centers = DVector::from_fn(n_cells, |i, _| dy / 2.0 + i as f64 * dy);

        Ok(Self { width, centers })
    }

    /// Grid matching the wall-normal discretisation of `config`
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Self::cell_centered(config.y_num, config.y_width)
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Always `false` for a constructed grid
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Cell size
    pub fn spacing(&self) -> f64 {
        self.width / self.len() as f64
    }

    /// Domain extent
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Cell-centre coordinates
    pub fn centers(&self) -> &DVector<f64> {
        &self.centers
    }

    /// Index of the cell centre closest to `y`
    pub fn nearest_index(&self, y: f64) -> usize {
        let raw = (y / self.spacing() - 0.5).round();
        raw.clamp(0.0, (self.len() - 1) as f64) as usize
    }
}

// =================================================================================================
// Couette profile
// =================================================================================================

/// Linear shear profile between a fixed bottom wall and a moving top wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CouetteProfile {
    /// Top-wall tangential velocity `U`
    pub wall_velocity: f64,

    /// Gap between the walls `H`
    pub gap: f64,
}

impl CouetteProfile {
    /// Create a profile; `gap` must be strictly positive
    pub fn new(wall_velocity: f64, gap: f64) -> Result<Self> {
        if !(gap.is_finite() && gap > 0.0) {
            return Err(VerificationError::InvalidGrid {
                reason: format!("wall gap must be positive and finite, got {}", gap),
            });
        }
        Ok(Self { wall_velocity, gap })
    }

    /// Profile for the case described by `config`
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Self::new(config.top_wall_velocity(), config.y_width)
    }

    /// Shear rate `U / H`
    pub fn shear_rate(&self) -> f64 {
        self.wall_velocity / self.gap
    }

    /// Velocity at wall distance `y`
    pub fn velocity_at(&self, y: f64) -> f64 {
        self.shear_rate() * y
    }

    /// Velocity at every cell centre of `grid`
    pub fn sample(&self, grid: &UniformGrid1D) -> DVector<f64> {
        grid.centers().map(|y| self.velocity_at(y))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
