//! Configuration constants for sampling, plotting and layout.

/// Configuration for the sample data set.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleConfig {
    /// PRNG seed; constant so every render sees the same samples.
    pub seed: u64,
    /// Number of samples drawn.
    pub count: usize,
    /// Mean of the normal distribution.
    pub mean: f64,
    /// Standard deviation of the normal distribution.
    pub std_dev: f64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            seed: 19_680_801,
            count: 437,
            mean: 100.0,
            std_dev: 15.0,
        }
    }
}

/// Configuration for the histogram plot.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Headroom above the tallest bar (0.1 = 10% margin).
    pub y_headroom_factor: f64,
    /// Bar sample points per terminal cell (braille is 2 dots wide).
    pub points_per_cell: usize,
    /// Number of gridline ticks per axis, edges included.
    pub grid_ticks: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            y_headroom_factor: 0.1,
            points_per_cell: 2,
            grid_ticks: 5,
        }
    }
}

/// Configuration for the page layout.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Width of the sidebar in characters.
    pub sidebar_width: u16,
    /// Height of each control block in the sidebar.
    pub control_height: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_width: 30,
            control_height: 3,
        }
    }
}

/// Combined configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Sample data configuration.
    pub sample: SampleConfig,
    /// Plot configuration.
    pub plot: PlotConfig,
    /// Layout configuration.
    pub layout: LayoutConfig,
}
