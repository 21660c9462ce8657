//! couette-verify command line
//!
//! ```text
//! couette-verify [--base-dir DIR] [--config FILE] [--store FILE]
//!                [--output IMAGE] [--csv FILE] [--csv-delimiter C]
//!                [--csv-precision N] [--tolerance TOL] [--show]
//! ```
//!
//! Without `--config`/`--store` the standard case layout below `--base-dir`
//! (or `SOLEIL_DIR`) is used. Prints the data sets found in the store and
//! the L2 error, then writes the comparison plot.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use clap::Parser;

use couette_verify::error::{Result, VerificationError};
use couette_verify::extract::SliceSelection;
use couette_verify::logging::init_logging;
use couette_verify::output::export::CsvMetadata;
use couette_verify::output::{export_comparison_csv, plot_comparison, CsvConfig, PlotConfig, DEFAULT_PLOT_FILE};
use couette_verify::pipeline::{self, VerificationCase, BASE_DIR_ENV};

#[derive(Parser, Debug)]
#[command(name = "couette-verify", version, about = "Compare a Couette flow simulation against the analytical solution")]
struct Cli {
    /// Solver checkout containing verification/couette
    #[arg(long, env = BASE_DIR_ENV)]
    base_dir: Option<PathBuf>,

    /// Configuration document (default: <base-dir>/verification/couette/couette.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Simulation output store (.npz, or .hdf/.h5 with the hdf5 feature)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Comparison plot (.svg for vector output)
    #[arg(short, long, default_value = DEFAULT_PLOT_FILE)]
    output: PathBuf,

    /// Also write the profiles to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// CSV column delimiter
    #[arg(long, default_value_t = ',')]
    csv_delimiter: char,

    /// Decimal places written to the CSV file
    #[arg(long, default_value_t = 6)]
    csv_precision: usize,

    /// Fail when the L2 error exceeds this value
    #[arg(long)]
    tolerance: Option<f64>,

    /// Plot title
    #[arg(long)]
    title: Option<String>,

    /// Index along z of the compared line
    #[arg(long, default_value_t = 0)]
    z_index: usize,

    /// Index along x of the compared line
    #[arg(long, default_value_t = 0)]
    x_index: usize,

    /// Open the plot in the platform image viewer
    #[arg(long)]
    show: bool,

    /// Log level (error, warn, info, debug, trace); falls back to RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let case = resolve_case(cli)?;
    let verification = pipeline::run_with_report(&case, |fields| {
        println!("Data Sets: {}", fields.join(", "));
    })?;
    let result = &verification.result;

    println!("L2 Error = {}", result.l2_error);

    let plot_config = PlotConfig::couette(cli.title.clone());
    plot_comparison(result, &cli.output, Some(&plot_config))?;

    if let Some(csv_path) = &cli.csv {
        let mut metadata = CsvMetadata::from_case(
            verification.config.y_num,
            verification.config.y_width,
            verification.config.top_wall_velocity(),
            result.l2_error,
        );
        metadata.store = Some(case.store_path.display().to_string());
        let csv_config = CsvConfig::default()
            .delimiter(cli.csv_delimiter)
            .precision(cli.csv_precision)
            .with_metadata(metadata);
        export_comparison_csv(result, &verification.slice, csv_path, Some(&csv_config))?;
    }

    if cli.show {
        show_image(&cli.output);
    }

    if let Some(tolerance) = cli.tolerance {
        result.check_tolerance(tolerance)?;
    }

    Ok(())
}

/// Explicit paths win; missing ones come from the base directory layout
fn resolve_case(cli: &Cli) -> Result<VerificationCase> {
    let selection = SliceSelection::new(cli.z_index, cli.x_index);

    let case = match (&cli.base_dir, &cli.config, &cli.store) {
        (_, Some(config), Some(store)) => VerificationCase::new(config, store),
        (Some(base), config, store) => {
            let mut case = VerificationCase::from_base_dir(base);
            if let Some(config) = config {
                case = case.with_config(config);
            }
            if let Some(store) = store {
                case = case.with_store(store);
            }
            case
        }
        (None, _, _) => {
            return Err(VerificationError::MissingEnvironment { variable: BASE_DIR_ENV });
        }
    };

    Ok(case.with_selection(selection))
}

fn show_image(path: &Path) {
    let launched = if cfg!(target_os = "macos") {
        Command::new("open").arg(path).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").arg("/C").arg("start").arg("").arg(path).spawn()
    } else {
        Command::new("xdg-open").arg(path).spawn()
    };

    if let Err(e) = launched {
        log::warn!("could not open {} in a viewer: {}", path.display(), e);
    }
}
