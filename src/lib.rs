//! couette-verify: Couette Flow Verification for a Compressible Flow Solver
//!
//! Compares the wall-normal velocity profile written by a compressible flow
//! solver against the analytical solution of plane Couette flow, reports the
//! discrete L2 error and draws both profiles on one figure.
//!
//! # Architecture
//!
//! couette-verify is built on two core principles:
//!
//! 1. **Separation of Reading and Comparing**
//!    - Configuration and stores describe the simulation (what was computed)
//!    - Analytical profiles and comparisons judge it (how good it is)
//!
//! 2. **Pluggable Storage**
//!    - Every output format sits behind the [`store::ArrayStore`] trait
//!    - NumPy archives are read natively, HDF5 behind the `hdf5` feature
//!
//! # Quick Start
//!
//! ```rust
//! use couette_verify::prelude::*;
//! use nalgebra::Vector3;
//!
//! # fn main() -> couette_verify::error::Result<()> {
//! // 1. Describe the case: 4 cells over a unit gap, top wall at 1 m/s
//! let config = SimulationConfig::new(
//!     4,
//!     1.0,
//!     Vector3::zeros(),
//!     BoundaryCondition::Periodic,
//!     BoundaryCondition::NoSlip(Vector3::new(1.0, 0.0, 0.0)),
//! )?;
//!
//! // 2. Simulation output (here: an exact profile held in memory)
//! let mut store = MemoryStore::from_profile(&[0.125, 0.375, 0.625, 0.875], 1, 1);
//!
//! // 3. Compare
//! let verification = verify_store(&config, &mut store, SliceSelection::default())?;
//! assert!(verification.result.l2_error < 1e-12);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`config`]: Case configuration and boundary conditions
//! - [`analytical`]: Cell-centred grid and analytical Couette profile
//! - [`store`]: Simulation output stores
//! - [`extract`]: Ghost-layer removal and wall-normal slicing
//! - [`compare`]: L2 error and comparison result
//! - [`pipeline`]: End-to-end verification run
//! - [`output`]: Plot and CSV export
//! - [`logging`]: Logger setup for the binary

// Core modules
pub mod config;
pub mod error;

pub mod analytical;
pub mod compare;
pub mod extract;
pub mod store;

pub mod pipeline;

pub mod logging;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use couette_verify::prelude::*;
    //! ```
    pub use crate::analytical::{CouetteProfile,
                                UniformGrid1D};
    pub use crate::compare::{compare,
                             ComparisonResult};
    pub use crate::config::{BoundaryCondition,
                            SimulationConfig};
    pub use crate::error::{Result,
                           VerificationError};
    pub use crate::extract::{ExtractedSlice,
                             SliceSelection};
    pub use crate::pipeline::{run,
                              verify_store,
                              Verification,
                              VerificationCase};
    pub use crate::store::{open_store,
                           ArrayStore,
                           MemoryStore};
}
