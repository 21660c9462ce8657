//! On-disk fixtures: configuration documents and NPZ stores
//!
//! Layout mirrors a solver checkout:
//!
//! ```text
//! <tempdir>/verification/couette/couette.json
//! <tempdir>/verification/couette/fluid.npz
//! ```

use std::fs;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use couette_verify::pipeline::{VerificationCase, CASE_DIR, CONFIG_FILE};
use couette_verify::store::fields;
use npyz::npz::NpzWriter;
use npyz::WriterBuilder;
use serde_json::json;
use tempfile::TempDir;

/// A temporary solver checkout holding one Couette case
pub struct CaseFixture {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub store_path: PathBuf,
}

impl CaseFixture {
    /// Case with stationary bottom wall (ghost layers present in the store)
    pub fn walls(y_num: usize, y_width: f64, wall_velocity: f64) -> Self {
        let profile = padded_profile(&linear_profile(y_num, y_width, wall_velocity), wall_velocity);
        Self::with_profile(y_num, y_width, wall_velocity, json!([0.0, 0.0, 0.0]), &profile)
    }

    /// Case with a periodic bottom boundary (no ghost layers)
    pub fn periodic(y_num: usize, y_width: f64, wall_velocity: f64) -> Self {
        let profile = linear_profile(y_num, y_width, wall_velocity);
        Self::with_profile(y_num, y_width, wall_velocity, json!("Periodic"), &profile)
    }

    /// Case with an arbitrary store profile
    pub fn with_profile(
        y_num: usize,
        y_width: f64,
        wall_velocity: f64,
        bottom: serde_json::Value,
        profile: &[f64],
    ) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let case_dir = dir.path().join(CASE_DIR);
        fs::create_dir_all(&case_dir).unwrap();

        let config_path = case_dir.join(CONFIG_FILE);
        write_config(&config_path, y_num, y_width, [0.0, 0.0, 0.0], bottom, wall_velocity);

        let store_path = case_dir.join("fluid.npz");
        write_npz_store(&store_path, profile, 2, 3);

        Self { dir, config_path, store_path }
    }

    /// Base directory of the temporary checkout
    pub fn base_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Verification case pointing at the fixture files
    pub fn case(&self) -> VerificationCase {
        VerificationCase::from_base_dir(self.base_dir()).with_store(&self.store_path)
    }
}

/// Analytical values `U y / H` at the `y_num` cell centres
pub fn linear_profile(y_num: usize, y_width: f64, wall_velocity: f64) -> Vec<f64> {
    let dy = y_width / y_num as f64;
    (0..y_num)
        .map(|i| wall_velocity * (dy / 2.0 + i as f64 * dy) / y_width)
        .collect()
}

/// `interior` with one ghost cell at each end holding the wall velocities
pub fn padded_profile(interior: &[f64], wall_velocity: f64) -> Vec<f64> {
    let mut profile = Vec::with_capacity(interior.len() + 2);
    profile.push(0.0);
    profile.extend_from_slice(interior);
    profile.push(wall_velocity);
    profile
}

/// Write a `couette.json` document
pub fn write_config(
    path: &Path,
    y_num: usize,
    y_width: f64,
    origin: [f64; 3],
    bottom: serde_json::Value,
    wall_velocity: f64,
) {
    let document = json!({
        "Grid": {
            "xNum": 3, "yNum": y_num, "zNum": 2,
            "xWidth": 1.0, "yWidth": y_width, "zWidth": 1.0,
            "origin": origin,
        },
        "BC": {
            "yBCLeft": "NonUniformTemperatureWall",
            "yBCLeftVel": bottom,
            "yBCRight": "NonUniformTemperatureWall",
            "yBCRightVel": [wall_velocity, 0.0, 0.0],
        },
    });

    fs::write(path, serde_json::to_string_pretty(&document).unwrap()).unwrap();
}

/// Write an NPZ store with `u_profile` along y in every `(z, x)` column
///
/// Shapes: scalars `[nz, ny, nx]`, velocity `[nz, ny, nx, 3]`.
pub fn write_npz_store(path: &Path, u_profile: &[f64], nz: usize, nx: usize) {
    let ny = u_profile.len();
    let cells = nz * ny * nx;
    let scalar_shape = [nz as u64, ny as u64, nx as u64];

    let mut velocity = Vec::with_capacity(cells * 3);
    for _ in 0..nz {
        for &u in u_profile {
            for _ in 0..nx {
                velocity.extend_from_slice(&[u, 0.0, 0.0]);
            }
        }
    }

    let mut npz = NpzWriter::create(path).unwrap();
    write_array(&mut npz, fields::PRESSURE, &scalar_shape, &vec![101_325.0; cells]);
    write_array(&mut npz, fields::DENSITY, &scalar_shape, &vec![1.0; cells]);
    write_array(&mut npz, fields::VELOCITY, &[nz as u64, ny as u64, nx as u64, 3], &velocity);
    write_array(&mut npz, fields::TEMPERATURE, &scalar_shape, &vec![300.0; cells]);
}

/// Write an NPZ store missing `skip`
pub fn write_npz_store_without(path: &Path, u_profile: &[f64], skip: &str) {
    let ny = u_profile.len() as u64;
    let velocity: Vec<f64> = u_profile.iter().flat_map(|&u| [u, 0.0, 0.0]).collect();

    let mut npz = NpzWriter::create(path).unwrap();
    for name in fields::REQUIRED {
        if name == skip {
            continue;
        }
        if name == fields::VELOCITY {
            write_array(&mut npz, name, &[1, ny, 1, 3], &velocity);
        } else {
            write_array(&mut npz, name, &[1, ny, 1], &vec![1.0; ny as usize]);
        }
    }
}

fn write_array<W: Write + Seek>(npz: &mut NpzWriter<W>, name: &str, shape: &[u64], data: &[f64]) {
    let mut writer = npz
        .array(name, Default::default())
        .unwrap()
        .default_dtype()
        .shape(shape)
        .begin_nd()
        .unwrap();
    writer.extend(data.iter().copied()).unwrap();
    writer.finish().unwrap();
}
