//! In-memory array store
//!
//! Holds fields directly as `ndarray` arrays. Used to feed synthetic volumes
//! through the extractor without touching the filesystem.

use ndarray::{Array3, Array4, ArrayD};

use super::{fields, ArrayStore};
use crate::error::{Result, VerificationError};

/// Store keeping fields in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    fields: Vec<(String, ArrayD<f64>)>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field
    pub fn insert(&mut self, name: impl Into<String>, data: ArrayD<f64>) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = data,
            None => self.fields.push((name, data)),
        }
    }

    /// Builder pattern: add a field
    pub fn with_field(mut self, name: impl Into<String>, data: ArrayD<f64>) -> Self {
        self.insert(name, data);
        self
    }

    /// Store laid out like solver output, built from a velocity profile
    ///
    /// Every `(z, x)` column carries `u_profile` as the first velocity
    /// component; the other fields are uniform (`rho = 1`, `p = 101325`,
    /// `T = 300`). Shape is `[nz, u_profile.len(), nx]`.
    pub fn from_profile(u_profile: &[f64], nz: usize, nx: usize) -> Self {
        let ny = u_profile.len();

        let velocity = Array4::from_shape_fn((nz, ny, nx, 3), |(_, j, _, c)| {
            if c == 0 { u_profile[j] } else { 0.0 }
        });

        Self::new()
            .with_field(fields::PRESSURE, Array3::from_elem((nz, ny, nx), 101_325.0).into_dyn())
            .with_field(fields::DENSITY, Array3::from_elem((nz, ny, nx), 1.0).into_dyn())
            .with_field(fields::VELOCITY, velocity.into_dyn())
            .with_field(fields::TEMPERATURE, Array3::from_elem((nz, ny, nx), 300.0).into_dyn())
    }
}

impl ArrayStore for MemoryStore {
    fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|(n, _)| n.clone()).collect()
    }

    fn read_field(&mut self, name: &str) -> Result<ArrayD<f64>> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data.clone())
            .ok_or_else(|| VerificationError::MissingField { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_profile_layout() {
        let mut store = MemoryStore::from_profile(&[0.0, 1.0, 2.0, 3.0], 2, 5);

        assert_eq!(store.field_names(), vec!["pressure", "rho", "velocity", "temperature"]);

        let velocity = store.read_field(fields::VELOCITY).unwrap();
        assert_eq!(velocity.shape(), &[2, 4, 5, 3]);
        assert_eq!(velocity[[1, 2, 4, 0]], 2.0);
        assert_eq!(velocity[[1, 2, 4, 1]], 0.0);

        let rho = store.read_field(fields::DENSITY).unwrap();
        assert_eq!(rho.shape(), &[2, 4, 5]);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut store = MemoryStore::new()
            .with_field("rho", Array3::zeros((1, 1, 1)).into_dyn())
            .with_field("rho", Array3::from_elem((1, 1, 1), 4.0).into_dyn());

        assert_eq!(store.field_names().len(), 1);
        assert_eq!(store.read_field("rho").unwrap()[[0, 0, 0]], 4.0);
    }

    #[test]
    fn test_missing_field() {
        let mut store = MemoryStore::new();
        match store.read_field("velocity") {
            Err(VerificationError::MissingField { name }) => assert_eq!(name, "velocity"),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }
}
