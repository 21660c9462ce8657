//! Wall-normal slice extraction
//!
//! Pulls 1-D profiles along the wall-normal (`y`) axis out of a solver
//! output store:
//!
//! ```text
//!   field[z, y, x]            velocity[z, y, x, c]
//!        │                          │
//!        ▼ strip ghost layers       ▼ (y = 1 .. Ny-1 when walls are padded)
//!        ▼ fix z = z_index          ▼ fix z, x and c = 0
//!        ▼ fix x = x_index          ▼
//!   profile[y]                u_tangential[y]
//! ```
//!
//! Couette flow is invariant along `x` and `z`, so the slice position is a
//! free choice; the first cell (`z = 0`, `x = 0`) is used by default.

use nalgebra::DVector;
use ndarray::{s, Array3, Array4, ArrayD, Ix3, Ix4};

use crate::error::{Result, VerificationError};
use crate::store::{fields, ArrayStore};

// =================================================================================================
// Slice selection
// =================================================================================================

/// Position of the wall-normal line in the `(z, x)` plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSelection {
    /// Index along z (first axis)
    pub z_index: usize,

    /// Index along x (third axis)
    pub x_index: usize,
}

impl SliceSelection {
    /// Create a selection at `(z_index, x_index)`
    pub fn new(z_index: usize, x_index: usize) -> Self {
        Self { z_index, x_index }
    }
}

// =================================================================================================
// Extracted slice
// =================================================================================================

/// 1-D profiles along the wall-normal axis
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSlice {
    /// Tangential (first) velocity component
    pub velocity: DVector<f64>,

    /// Density `rho`
    pub density: DVector<f64>,

    /// Pressure
    pub pressure: DVector<f64>,

    /// Temperature
    pub temperature: DVector<f64>,

    /// Every field name found in the store
    pub store_fields: Vec<String>,

    /// Whether one ghost layer was removed at each end
    pub ghost_removed: bool,
}

impl ExtractedSlice {
    /// Number of wall-normal points
    pub fn len(&self) -> usize {
        self.velocity.len()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.velocity.is_empty()
    }
}

// =================================================================================================
// Extraction
// =================================================================================================

/// Extract wall-normal profiles from `store`
///
/// # Errors
///
/// - `MissingField` if any of `pressure`, `rho`, `velocity`, `temperature`
///   is absent
/// - `MalformedStore` if a scalar field is not 3-D, the velocity is not 4-D,
///   or the fields disagree on their `[z, y, x]` extent
/// - `GhostLayerUnderflow` if `remove_y_ghost` and `Ny < 3`
/// - `SliceOutOfRange` if `selection` lies outside the volume
pub fn extract_slice<S: ArrayStore + ?Sized>(
    store: &mut S,
    remove_y_ghost: bool,
    selection: SliceSelection,
) -> Result<ExtractedSlice> {
    let store_fields = store.field_names();
    log::info!("data sets: {}", store_fields.join(", "));

    let density = read_scalar(store, fields::DENSITY)?;
    let pressure = read_scalar(store, fields::PRESSURE)?;
    let temperature = read_scalar(store, fields::TEMPERATURE)?;
    let velocity = read_vector(store, fields::VELOCITY)?;

    let (nz, ny, nx) = density.dim();
    for (name, extent) in [
        (fields::PRESSURE, pressure.dim()),
        (fields::TEMPERATURE, temperature.dim()),
        (fields::VELOCITY, {
            let (z, y, x, _) = velocity.dim();
            (z, y, x)
        }),
    ] {
        if extent != (nz, ny, nx) {
            return Err(VerificationError::MalformedStore {
                field: name.to_string(),
                reason: format!(
                    "extent {:?} differs from {} extent {:?}",
                    extent,
                    fields::DENSITY,
                    (nz, ny, nx)
                ),
            });
        }
    }

    let (y_start, y_end) = if remove_y_ghost {
        if ny < 3 {
            return Err(VerificationError::GhostLayerUnderflow { ny });
        }
        (1, ny - 1)
    } else {
        (0, ny)
    };
    log::debug!(
        "volume [z, y, x] = [{}, {}, {}], keeping y = {}..{}",
        nz, ny, nx, y_start, y_end
    );

    let SliceSelection { z_index: z, x_index: x } = selection;
    if z >= nz {
        return Err(VerificationError::SliceOutOfRange { axis: 'z', index: z, len: nz });
    }
    if x >= nx {
        return Err(VerificationError::SliceOutOfRange { axis: 'x', index: x, len: nx });
    }

    let line = |field: &Array3<f64>| -> DVector<f64> {
        DVector::from_iterator(y_end - y_start, field.slice(s![z, y_start..y_end, x]).iter().copied())
    };

    Ok(ExtractedSlice {
        velocity: DVector::from_iterator(
            y_end - y_start,
            velocity.slice(s![z, y_start..y_end, x, 0]).iter().copied(),
        ),
        density: line(&density),
        pressure: line(&pressure),
        temperature: line(&temperature),
        store_fields,
        ghost_removed: remove_y_ghost,
    })
}

fn read_scalar<S: ArrayStore + ?Sized>(store: &mut S, name: &str) -> Result<Array3<f64>> {
    let data = store.read_field(name)?;
    let shape = data.shape().to_vec();

    data.into_dimensionality::<Ix3>()
        .map_err(|_| VerificationError::MalformedStore {
            field: name.to_string(),
            reason: format!("expected 3 axes [z, y, x], found shape {:?}", shape),
        })
}

fn read_vector<S: ArrayStore + ?Sized>(store: &mut S, name: &str) -> Result<Array4<f64>> {
    let data: ArrayD<f64> = store.read_field(name)?;
    let shape = data.shape().to_vec();

    let data = data
        .into_dimensionality::<Ix4>()
        .map_err(|_| VerificationError::MalformedStore {
            field: name.to_string(),
            reason: format!("expected 4 axes [z, y, x, component], found shape {:?}", shape),
        })?;

    if data.dim().3 == 0 {
        return Err(VerificationError::MalformedStore {
            field: name.to_string(),
            reason: "vector field has no components".to_string(),
        });
    }

    Ok(data)
}

// =================================================================================================
// Tests
// =================================================================================================
