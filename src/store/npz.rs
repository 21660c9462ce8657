//! NPZ archive backend
//!
//! A `.npz` file is a zip archive of `.npy` arrays, one entry per field.
//! Both C and Fortran ordered arrays are accepted. Arrays must hold
//! `float64` elements.
//!
//! # Writing a compatible archive
//!
//! ```python
//! import h5py, numpy as np
//! f = h5py.File("0,0,0-31,33,31.hdf", "r")
//! np.savez("fluid.npz", **{k: f[k][...] for k in ("pressure", "rho", "velocity", "temperature")})
//! ```

use ndarray::{ArrayD, IxDyn, ShapeBuilder};
use npyz::npz::NpzArchive;
use npyz::Order;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::ArrayStore;
use crate::error::{Result, VerificationError};

/// Read-only store backed by an NPZ archive
pub struct NpzStore {
    path: PathBuf,
    archive: NpzArchive<BufReader<File>>,
    names: Vec<String>,
}

impl NpzStore {
    /// Open the archive at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let archive = NpzArchive::open(&path).map_err(|e| VerificationError::store(&path, e))?;
        // zip entries come back in hash order
        let mut names: Vec<String> = archive.array_names().map(|n| n.to_owned()).collect();
        names.sort();

        log::debug!("opened npz store {}", path.display());

        Ok(Self { path, archive, names })
    }

    /// Archive location
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ArrayStore for NpzStore {
    fn field_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn read_field(&mut self, name: &str) -> Result<ArrayD<f64>> {
        let npy = self
            .archive
            .by_name(name)
            .map_err(|e| VerificationError::store(&self.path, e))?
            .ok_or_else(|| VerificationError::MissingField { name: name.to_string() })?;

        let shape: Vec<usize> = npy.shape().iter().map(|&d| d as usize).collect();
        let order = npy.order();

        let data: Vec<f64> = npy.into_vec().map_err(|e| VerificationError::MalformedStore {
            field: name.to_string(),
            reason: format!("cannot decode as f64: {}", e),
        })?;

        let dims = IxDyn(&shape).set_f(matches!(order, Order::Fortran));

        ArrayD::from_shape_vec(dims, data).map_err(|e| VerificationError::MalformedStore {
            field: name.to_string(),
            reason: e.to_string(),
        })
    }
}
