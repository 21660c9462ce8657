//! HDF5 backend (cargo feature `hdf5`)
//!
//! Reads the solver's native output tiles. Scalar fields are plain `f64`
//! datasets; vector fields are stored either with a trailing component axis
//! or as `double[3]` elements, in which case the components are unpacked
//! into a trailing axis of length 3.

use ndarray::{ArrayD, IxDyn};
use std::path::{Path, PathBuf};

use super::ArrayStore;
use crate::error::{Result, VerificationError};

/// Read-only store backed by an HDF5 file
pub struct Hdf5Store {
    path: PathBuf,
    file: ::hdf5::File,
    names: Vec<String>,
}

impl Hdf5Store {
    /// Open the file at `path` for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = ::hdf5::File::open(&path).map_err(|e| VerificationError::store(&path, e))?;
        let mut names = file.member_names().map_err(|e| VerificationError::store(&path, e))?;
        names.sort();

        log::debug!("opened hdf5 store {}", path.display());

        Ok(Self { path, file, names })
    }
}

impl ArrayStore for Hdf5Store {
    fn field_names(&self) -> Vec<String> {
        self.names.clone()
    }

    fn read_field(&mut self, name: &str) -> Result<ArrayD<f64>> {
        if !self.contains(name) {
            return Err(VerificationError::MissingField { name: name.to_string() });
        }

        let dataset = self
            .file
            .dataset(name)
            .map_err(|e| VerificationError::store(&self.path, e))?;

        if let Ok(scalar) = dataset.read_dyn::<f64>() {
            return Ok(scalar);
        }

        let packed = dataset
            .read_dyn::<[f64; 3]>()
            .map_err(|e| VerificationError::MalformedStore {
                field: name.to_string(),
                reason: e.to_string(),
            })?;

        let mut shape = packed.shape().to_vec();
        shape.push(3);
        let data: Vec<f64> = packed.iter().flat_map(|v| v.iter().copied()).collect();

        ArrayD::from_shape_vec(IxDyn(&shape), data).map_err(|e| VerificationError::MalformedStore {
            field: name.to_string(),
            reason: e.to_string(),
        })
    }
}
