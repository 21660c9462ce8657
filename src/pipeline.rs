//! End-to-end verification pipeline
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────────┐
//! │ couette.json     │────▶│ SimulationConfig     │
//! └──────────────────┘     └──────────┬───────────┘
//!                                     │
//!                    ┌────────────────┴───────────────┐
//!                    ▼                                ▼
//!          ┌───────────────────┐           ┌────────────────────┐
//!          │ UniformGrid1D +   │           │ ArrayStore         │
//!          │ CouetteProfile    │           │ (ghost removal,    │
//!          │                   │           │  y-slice)          │
//!          └─────────┬─────────┘           └─────────┬──────────┘
//!                    │                               │
//!                    └──────────────┬────────────────┘
//!                                   ▼
//!                         ┌───────────────────┐
//!                         │ ComparisonResult  │ → plot, CSV, L2 error
//!                         └───────────────────┘
//! ```
//!
//! Paths are passed in explicitly. The base directory of a solver checkout
//! is resolved by the caller (the CLI reads `SOLEIL_DIR`); nothing in here
//! consults the environment.

use std::path::{Path, PathBuf};

use crate::analytical::{CouetteProfile, UniformGrid1D};
use crate::compare::{compare, ComparisonResult};
use crate::config::SimulationConfig;
use crate::error::Result;
use crate::extract::{extract_slice, ExtractedSlice, SliceSelection};
use crate::store::{open_store, ArrayStore};

/// Environment variable naming the solver checkout
pub const BASE_DIR_ENV: &str = "SOLEIL_DIR";

/// Case directory, relative to the base directory
pub const CASE_DIR: &str = "verification/couette";

/// Configuration document, relative to the case directory
pub const CONFIG_FILE: &str = "couette.json";

/// Output tile compared by default, relative to the case directory
pub const STORE_FILE: &str = "sample0/fluid_iter0000001000/0,0,0-31,33,31.hdf";

// =================================================================================================
// Verification case
// =================================================================================================

/// Inputs of one verification run
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationCase {
    /// Configuration document
    pub config_path: PathBuf,

    /// Simulation output store
    pub store_path: PathBuf,

    /// Position of the compared wall-normal line
    pub selection: SliceSelection,
}

impl VerificationCase {
    /// Case with explicit paths
    pub fn new(config_path: impl Into<PathBuf>, store_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            store_path: store_path.into(),
            selection: SliceSelection::default(),
        }
    }

    /// Standard layout below a solver checkout
    ///
    /// `<base>/verification/couette/couette.json` and
    /// `<base>/verification/couette/sample0/fluid_iter0000001000/0,0,0-31,33,31.hdf`
    pub fn from_base_dir(base_dir: impl AsRef<Path>) -> Self {
        let case_dir = base_dir.as_ref().join(CASE_DIR);
        Self::new(case_dir.join(CONFIG_FILE), case_dir.join(STORE_FILE))
    }

    /// Builder pattern: compare another store
    pub fn with_store(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.store_path = store_path.into();
        self
    }

    /// Builder pattern: use another configuration document
    pub fn with_config(mut self, config_path: impl Into<PathBuf>) -> Self {
        self.config_path = config_path.into();
        self
    }

    /// Builder pattern: compare another wall-normal line
    pub fn with_selection(mut self, selection: SliceSelection) -> Self {
        self.selection = selection;
        self
    }
}

// =================================================================================================
// Verification outcome
// =================================================================================================

/// Everything produced by one run
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    /// Parsed configuration
    pub config: SimulationConfig,

    /// Analytical grid
    pub grid: UniformGrid1D,

    /// Profiles extracted from the store
    pub slice: ExtractedSlice,

    /// Comparison against the analytical profile
    pub result: ComparisonResult,
}

/// Run the full pipeline for `case`
///
/// The store is opened only for the extraction and released before the
/// comparison, on success and on failure alike.
pub fn run(case: &VerificationCase) -> Result<Verification> {
    run_with_report(case, |_| {})
}

/// Run the full pipeline, handing the store's field names to `report`
///
/// `report` is called once the store is open and before any field is read,
/// so the names are available even when extraction fails.
pub fn run_with_report<F>(case: &VerificationCase, report: F) -> Result<Verification>
where
    F: FnOnce(&[String]),
{
    log::info!("reading configuration {}", case.config_path.display());
    let config = SimulationConfig::from_file(&case.config_path)?;

    let (grid, analytical) = analytical_profile(&config)?;

    log::info!("reading simulation output {}", case.store_path.display());
    let slice = {
        let mut store = open_store(&case.store_path)?;
        report(&store.field_names());
        extract_slice(&mut store, config.remove_y_ghost(), case.selection)?
    };

    let result = compare(&grid, &analytical, &slice)?;
    log::info!("L2 error = {:e}", result.l2_error);

    Ok(Verification { config, grid, slice, result })
}

/// Compare an already opened store against `config`
pub fn verify_store<S: ArrayStore + ?Sized>(
    config: &SimulationConfig,
    store: &mut S,
    selection: SliceSelection,
) -> Result<Verification> {
    let (grid, analytical) = analytical_profile(config)?;
    let slice = extract_slice(store, config.remove_y_ghost(), selection)?;
    let result = compare(&grid, &analytical, &slice)?;

    Ok(Verification { config: config.clone(), grid, slice, result })
}

fn analytical_profile(config: &SimulationConfig) -> Result<(UniformGrid1D, nalgebra::DVector<f64>)> {
    let grid = UniformGrid1D::from_config(config)?;
    let profile = CouetteProfile::from_config(config)?;
    log::debug!(
        "analytical profile: {} cells, dy = {}, U = {}",
        grid.len(),
        grid.spacing(),
        profile.wall_velocity
    );

    let analytical = profile.sample(&grid);
    Ok((grid, analytical))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoundaryCondition;
    use crate::error::VerificationError;
    use crate::store::MemoryStore;
    use nalgebra::Vector3;

    fn couette_config(y_num: usize, left: BoundaryCondition) -> SimulationConfig {
        SimulationConfig::new(
            y_num,
            1.0,
            Vector3::zeros(),
            left,
            BoundaryCondition::NoSlip(Vector3::new(2.0, 0.0, 0.0)),
        )
        .unwrap()
    }

    #[test]
    fn test_standard_layout() {
        let case = VerificationCase::from_base_dir("/opt/soleil");

        assert_eq!(case.config_path, Path::new("/opt/soleil/verification/couette/couette.json"));
        assert_eq!(
            case.store_path,
            Path::new("/opt/soleil/verification/couette/sample0/fluid_iter0000001000/0,0,0-31,33,31.hdf")
        );
        assert_eq!(case.selection, SliceSelection::default());
    }

    #[test]
    fn test_builders_override_paths() {
        let case = VerificationCase::from_base_dir("/opt/soleil")
            .with_store("/tmp/fluid.npz")
            .with_config("/tmp/couette.json")
            .with_selection(SliceSelection::new(2, 3));

        assert_eq!(case.store_path, Path::new("/tmp/fluid.npz"));
        assert_eq!(case.config_path, Path::new("/tmp/couette.json"));
        assert_eq!(case.selection, SliceSelection::new(2, 3));
    }

    #[test]
    fn test_verify_padded_store() {
        let config = couette_config(8, BoundaryCondition::stationary_wall());

        // analytical values at the 8 interior centres, wall values in the ghosts
        let dy = 1.0 / 8.0;
        let mut profile = vec![0.0];
        profile.extend((0..8).map(|i| 2.0 * (dy / 2.0 + i as f64 * dy)));
        profile.push(2.0);

        let mut store = MemoryStore::from_profile(&profile, 2, 2);
        let verification = verify_store(&config, &mut store, SliceSelection::default()).unwrap();

        assert_eq!(verification.slice.len(), 8);
        assert!(verification.result.l2_error < 1e-14);
    }

    #[test]
    fn test_verify_periodic_store_keeps_all_points() {
        let config = couette_config(4, BoundaryCondition::Periodic);
        let mut store = MemoryStore::from_profile(&[0.25, 0.75, 1.25, 1.75], 1, 1);

        let verification = verify_store(&config, &mut store, SliceSelection::default()).unwrap();
        assert!(!verification.slice.ghost_removed);
        assert!(verification.result.l2_error < 1e-14);
    }

    #[test]
    fn test_verify_unpadded_store_with_wall_boundaries_mismatches() {
        let config = couette_config(8, BoundaryCondition::stationary_wall());
        let mut store = MemoryStore::from_profile(&[0.0; 8], 1, 1);

        assert!(matches!(
            verify_store(&config, &mut store, SliceSelection::default()),
            Err(VerificationError::ShapeMismatch { simulated: 6, analytical: 8 })
        ));
    }

    #[test]
    fn test_run_missing_config() {
        let case = VerificationCase::new("/nonexistent/couette.json", "/nonexistent/fluid.npz");
        assert!(matches!(run(&case), Err(VerificationError::Io { .. })));
    }
}
