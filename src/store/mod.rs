//! Simulation output stores
//!
//! The solver writes one multi-array container per tile and iteration,
//! keyed by field name:
//!
//! | Field         | Layout           |
//! |---------------|------------------|
//! | `pressure`    | `[z, y, x]`      |
//! | `rho`         | `[z, y, x]`      |
//! | `temperature` | `[z, y, x]`      |
//! | `velocity`    | `[z, y, x, c]`   |
//!
//! This module defines the [`ArrayStore`] trait that abstracts the
//! container format. Each format lives in its own sub-module:
//!
//! | Format | Module        | Availability           |
//! |--------|---------------|------------------------|
//! | NPZ    | [`npz`]       | always                 |
//! | HDF5   | `hdf5`        | cargo feature `hdf5`   |
//! | Memory | [`memory`]    | always (tests, embedding) |
//!
//! Stores are read-only. A store owns its file handle; dropping the store
//! releases it.

pub mod memory;
pub mod npz;

#[cfg(feature = "hdf5")]
pub mod hdf5;

pub use memory::MemoryStore;
pub use npz::NpzStore;

#[cfg(feature = "hdf5")]
pub use self::hdf5::Hdf5Store;

use ndarray::ArrayD;
use std::path::Path;

use crate::error::{Result, VerificationError};

/// Field names written by the solver
pub mod fields {
    pub const PRESSURE: &str = "pressure";
    pub const DENSITY: &str = "rho";
    pub const VELOCITY: &str = "velocity";
    pub const TEMPERATURE: &str = "temperature";

    /// Fields the Couette comparison reads
    pub const REQUIRED: [&str; 4] = [PRESSURE, DENSITY, VELOCITY, TEMPERATURE];
}

/// Read access to a keyed multi-array container
pub trait ArrayStore {
    /// Names of every array in the store
    ///
    /// The order is fixed for a given store, so repeated runs report the
    /// same list.
    fn field_names(&self) -> Vec<String>;

    /// Load a whole field as an `f64` array
    ///
    /// # Errors
    ///
    /// - `MissingField` if no array is stored under `name`
    /// - `Store` / `MalformedStore` if the array cannot be decoded
    fn read_field(&mut self, name: &str) -> Result<ArrayD<f64>>;

    /// Check field presence
    fn contains(&self, name: &str) -> bool {
        self.field_names().iter().any(|n| n == name)
    }
}

impl<S: ArrayStore + ?Sized> ArrayStore for Box<S> {
    fn field_names(&self) -> Vec<String> {
        (**self).field_names()
    }

    fn read_field(&mut self, name: &str) -> Result<ArrayD<f64>> {
        (**self).read_field(name)
    }
}

/// Open a store, choosing the backend from the file extension
///
/// - `.npz` → [`NpzStore`]
/// - `.hdf`, `.h5`, `.hdf5` → `Hdf5Store` (requires the `hdf5` feature)
///
/// # Errors
///
/// `UnsupportedStoreFormat` for any other extension, or for HDF5 files when
/// the crate was built without HDF5 support.
pub fn open_store(path: impl AsRef<Path>) -> Result<Box<dyn ArrayStore>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "npz" => Ok(Box::new(NpzStore::open(path)?)),

        #[cfg(feature = "hdf5")]
        "hdf" | "h5" | "hdf5" => Ok(Box::new(Hdf5Store::open(path)?)),

        _ => Err(VerificationError::UnsupportedStoreFormat { path: path.to_path_buf() }),
    }
}
