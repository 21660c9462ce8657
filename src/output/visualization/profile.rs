//! Velocity profile comparison plot
//!
//! Draws the simulated velocity as markers and the analytical profile as a
//! line, velocity on the horizontal axis and wall distance on the vertical
//! axis, so the figure reads like the physical channel.
//!
//! # Usage
//!
//! ```rust,ignore
//! use couette_verify::output::visualization::plot_comparison;
//!
//! let result = compare(&grid, &analytical, &slice)?;
//! plot_comparison(&result, "couette_solutions.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;
use std::path::Path;

use super::config::{PlotConfig, NO_TITLE};
use crate::compare::ComparisonResult;
use crate::error::{Result, VerificationError};

/// Default image name, written to the working directory
pub const DEFAULT_PLOT_FILE: &str = "couette_solutions.png";

/// Plot simulated and analytical profiles on shared axes
///
/// The backend is chosen from the extension: `.svg` renders vector
/// graphics, anything else a bitmap (PNG).
///
/// # Errors
///
/// `Plot` if the result is empty or the backend fails.
pub fn plot_comparison(
    result: &ComparisonResult,
    output_path: impl AsRef<Path>,
    config: Option<&PlotConfig>,
) -> Result<()> {
    if result.is_empty() {
        return Err(VerificationError::Plot { reason: "empty comparison".to_string() });
    }

    let default_config = PlotConfig::couette(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let output_path = output_path.as_ref();
    let u_range = padded_range(result.u_simulated.iter().chain(result.u_analytical.iter()));
    let y_range = padded_range(result.y.iter());

    let ext = output_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    let drawn = match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, result, config, u_range, y_range)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, result, config, u_range, y_range)
        }
    };

    drawn.map_err(|e| VerificationError::Plot { reason: e.to_string() })?;
    log::info!("comparison plot written to {}", output_path.display());

    Ok(())
}

/// Axis range covering `values` with a 5 % margin
fn padded_range<'a>(values: impl Iterator<Item = &'a f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if lo > hi {
        return 0.0..1.0;
    }

    let span = (hi - lo).max(1e-10);
    (lo - 0.05 * span)..(hi + 0.05 * span)
}

fn axis_label(value: &f64) -> String {
    format!("{:.3}", value)
}

/// Implementation for comparison plotting with concrete backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    result: &ComparisonResult,
    config: &PlotConfig,
    u_range: Range<f64>,
    y_range: Range<f64>,
) -> std::result::Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(u_range, y_range)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.xlabel.as_str())
        .y_desc(config.ylabel.as_str())
        .x_label_formatter(&axis_label)
        .y_label_formatter(&axis_label);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let analytical_color = config.analytical_color;
    chart
        .draw_series(LineSeries::new(
            result.u_analytical.iter().zip(result.y.iter()).map(|(u, y)| (*u, *y)),
            ShapeStyle::from(&analytical_color).stroke_width(config.line_width),
        ))?
        .label(config.analytical_label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], analytical_color));

    let simulation_color = config.simulation_color;
    let marker_size = config.marker_size;
    chart
        .draw_series(
            result
                .u_simulated
                .iter()
                .zip(result.y.iter())
                .map(|(u, y)| Circle::new((*u, *y), marker_size, simulation_color.filled())),
        )?
        .label(config.simulation_label.as_str())
        .legend(move |(x, y)| Circle::new((x + 10, y), marker_size, simulation_color.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
