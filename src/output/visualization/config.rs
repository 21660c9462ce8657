//! Plot configuration for profile comparison figures

use plotters::prelude::*;

/// Configuration for customizing comparison plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels (velocity horizontal, wall distance vertical)
/// - `simulation_color`, `analytical_color`: Series colors
/// - `simulation_label`, `analytical_label`: Legend entries
/// - `marker_size`: Radius of the simulation markers in pixels
/// - `line_width`: Analytical curve thickness in pixels
/// - `show_grid`: Whether to draw the mesh
///
/// # Example
///
/// ```rust,ignore
/// use couette_verify::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::couette("Couette, 64 cells");
/// config.simulation_color = RED;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Couette Flow")
    pub title: String,

    /// X-axis label (default: "u [m/s]")
    pub xlabel: String,

    /// Y-axis label (default: "y [m]")
    pub ylabel: String,

    /// Marker color for simulated values (default: BLACK)
    pub simulation_color: RGBColor,

    /// Line color for the analytical profile (default: BLUE)
    pub analytical_color: RGBColor,

    /// Legend entry for simulated values (default: "simulation")
    pub simulation_label: String,

    /// Legend entry for the analytical profile (default: "analytical")
    pub analytical_label: String,

    /// Marker radius in pixels (default: 4)
    pub marker_size: u32,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Couette Flow".to_string(),
            xlabel: "u [m/s]".to_string(),
            ylabel: "y [m]".to_string(),
            simulation_color: BLACK,
            analytical_color: BLUE,
            simulation_label: "simulation".to_string(),
            analytical_label: "analytical".to_string(),
            marker_size: 4,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for a Couette comparison with optional custom title
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::couette("Soleil-X vs analytical");
    /// let config = PlotConfig::couette(format!("Couette, {} cells", n));
    /// let config = PlotConfig::couette(NO_TITLE);
    /// ```
    pub fn couette(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }

    /// Builder pattern: set the simulation legend entry
    pub fn simulation_label(mut self, label: impl Into<String>) -> Self {
        self.simulation_label = label.into();
        self
    }

    /// Builder pattern: set image size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

// =================================================================================================
// Tests
// =================================================================================================
