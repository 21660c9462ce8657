//! Simulated vs analytical comparison
//!
//! The error metric is the Euclidean norm of the pointwise difference:
//!
//! ```text
//! e = ‖u_sim − u_ana‖₂ = sqrt( Σᵢ (u_sim[i] − u_ana[i])² )
//! ```
//!
//! The norm is not normalised by the number of points, so it grows like
//! `sqrt(n)` for a uniform offset. [`ComparisonResult::rms_error`] gives
//! the resolution-independent variant.

use nalgebra::DVector;

use crate::analytical::UniformGrid1D;
use crate::error::{Result, VerificationError};
use crate::extract::ExtractedSlice;

/// Outcome of a Couette comparison
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    /// `‖u_sim − u_ana‖₂`
    pub l2_error: f64,

    /// Wall-normal cell-centre coordinates
    pub y: DVector<f64>,

    /// Simulated tangential velocity
    pub u_simulated: DVector<f64>,

    /// Analytical tangential velocity
    pub u_analytical: DVector<f64>,
}

impl ComparisonResult {
    /// Number of compared points
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Pointwise difference `u_sim − u_ana`
    pub fn residual(&self) -> DVector<f64> {
        &self.u_simulated - &self.u_analytical
    }

    /// Largest pointwise deviation
    pub fn max_abs_error(&self) -> f64 {
        self.residual().amax()
    }

    /// Root-mean-square deviation, `l2_error / sqrt(n)`
    pub fn rms_error(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.l2_error / (self.len() as f64).sqrt()
        }
    }

    /// Accept the comparison if `l2_error <= tolerance`
    ///
    /// # Errors
    ///
    /// `ToleranceExceeded` otherwise (including a NaN error).
    pub fn check_tolerance(&self, tolerance: f64) -> Result<()> {
        if self.l2_error <= tolerance {
            Ok(())
        } else {
            Err(VerificationError::ToleranceExceeded { error: self.l2_error, tolerance })
        }
    }
}

/// Euclidean norm of `simulated − analytical`
///
/// # Errors
///
/// `ShapeMismatch` if the vectors differ in length; checked before any
/// arithmetic.
pub fn l2_norm_difference(simulated: &DVector<f64>, analytical: &DVector<f64>) -> Result<f64> {
    if simulated.len() != analytical.len() {
        return Err(VerificationError::ShapeMismatch {
            simulated: simulated.len(),
            analytical: analytical.len(),
        });
    }
    Ok((simulated - analytical).norm())
}

/// Compare the extracted slice against the analytical profile on `grid`
///
/// `analytical` must be the profile sampled on `grid`.
pub fn compare(
    grid: &UniformGrid1D,
    analytical: &DVector<f64>,
    slice: &ExtractedSlice,
) -> Result<ComparisonResult> {
    if slice.len() != grid.len() {
        return Err(VerificationError::ShapeMismatch {
            simulated: slice.len(),
            analytical: grid.len(),
        });
    }

    let l2_error = l2_norm_difference(&slice.velocity, analytical)?;
    log::debug!("compared {} points, L2 error {:e}", grid.len(), l2_error);

    Ok(ComparisonResult {
        l2_error,
        y: grid.centers().clone(),
        u_simulated: slice.velocity.clone(),
        u_analytical: analytical.clone(),
    })
}

// =================================================================================================
// Tests
// =================================================================================================
