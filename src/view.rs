//! Reactive view: three input controls and one derived histogram.
//!
//! Setters record a change only when the value actually differs. The
//! histogram is recomputed lazily on the next [`ReactiveView::rendered`]
//! call, from scratch, so the output never depends on earlier renders.

use ratatui::style::Color;

use crate::config::{PlotConfig, SampleConfig};
use crate::controls::{BarColor, BinCount, Controls};
use crate::data::{Histogram, SampleData};

/// Plot title.
pub const PLOT_TITLE: &str = "Data Distribution with Selected Number of Bins";
/// X axis label.
pub const X_LABEL: &str = "Value";
/// Y axis label.
pub const Y_LABEL: &str = "Density";
/// Accessibility text for the plot area.
pub const ALT_TEXT: &str = "A histogram.";

/// Gridline positions in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Vertical gridlines.
    pub x_ticks: Vec<f64>,
    /// Horizontal gridlines.
    pub y_ticks: Vec<f64>,
}

/// The derived output of the view.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedHistogram {
    /// Controls this artifact was rendered from.
    pub controls: Controls,
    /// Binned data.
    pub histogram: Histogram,
    /// Number of samples the histogram was built from.
    pub sample_count: usize,
    /// X axis bounds.
    pub x_bounds: [f64; 2],
    /// Y axis bounds.
    pub y_bounds: [f64; 2],
    /// Gridlines, present only when the checkbox is ticked.
    pub grid: Option<Grid>,
    /// Plot title.
    pub title: &'static str,
    /// X axis label.
    pub x_label: &'static str,
    /// Y axis label.
    pub y_label: &'static str,
    /// Accessibility text.
    pub alt_text: &'static str,
}

impl RenderedHistogram {
    /// Render from control values. Pure: equal inputs give equal outputs.
    pub fn render(controls: Controls, sample: &SampleConfig, plot: &PlotConfig) -> Self {
        let data = SampleData::generate(sample);
        let histogram = Histogram::compute(data.values(), controls.bins.get());

        let x_bounds = histogram
            .range()
            .or_else(|| data.min_max())
            .map(|(lo, hi)| if lo < hi { [lo, hi] } else { [lo - 0.5, hi + 0.5] })
            .unwrap_or([0.0, 1.0]);

        let max_density = histogram.max_density();
        let y_max = if max_density > 0.0 {
            max_density * (1.0 + plot.y_headroom_factor)
        } else {
            1.0
        };
        let y_bounds = [0.0, y_max];

        let grid = controls.show_grid.then(|| Grid {
            x_ticks: ticks(x_bounds, plot.grid_ticks),
            y_ticks: ticks(y_bounds, plot.grid_ticks),
        });

        Self {
            controls,
            histogram,
            sample_count: data.len(),
            x_bounds,
            y_bounds,
            grid,
            title: PLOT_TITLE,
            x_label: X_LABEL,
            y_label: Y_LABEL,
            alt_text: ALT_TEXT,
        }
    }

    /// Number of bars drawn.
    pub fn bar_count(&self) -> usize {
        self.histogram.len()
    }

    /// Color every bar is drawn in.
    pub fn bar_color(&self) -> Color {
        self.controls.color.color()
    }

    /// Whether gridlines are drawn.
    pub fn has_grid(&self) -> bool {
        self.grid.is_some()
    }
}

/// Evenly spaced positions across `bounds`, both edges included.
fn ticks(bounds: [f64; 2], count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![(bounds[0] + bounds[1]) / 2.0],
        n => {
            let step = (bounds[1] - bounds[0]) / (n - 1) as f64;
            (0..n).map(|i| bounds[0] + i as f64 * step).collect()
        }
    }
}

/// Holds control values and the cached rendering derived from them.
#[derive(Debug)]
pub struct ReactiveView {
    controls: Controls,
    sample: SampleConfig,
    plot: PlotConfig,
    cached: Option<RenderedHistogram>,
    revision: u64,
}

impl ReactiveView {
    /// Create a view with default controls.
    pub fn new(sample: SampleConfig, plot: PlotConfig) -> Self {
        Self {
            controls: Controls::default(),
            sample,
            plot,
            cached: None,
            revision: 0,
        }
    }

    /// Current control values.
    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Plot configuration used for rendering.
    pub fn plot_config(&self) -> &PlotConfig {
        &self.plot
    }

    /// Number of recomputations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the next read will recompute.
    pub fn is_stale(&self) -> bool {
        self.cached.is_none()
    }

    /// Set the bin count.
    pub fn set_bins(&mut self, bins: BinCount) {
        if self.controls.bins != bins {
            tracing::debug!(from = %self.controls.bins, to = %bins, "bin count changed");
            self.controls.bins = bins;
            self.invalidate();
        }
    }

    /// Set the bar color.
    pub fn set_color(&mut self, color: BarColor) {
        if self.controls.color != color {
            tracing::debug!(from = %self.controls.color, to = %color, "bar color changed");
            self.controls.color = color;
            self.invalidate();
        }
    }

    /// Set gridline visibility.
    pub fn set_show_grid(&mut self, show_grid: bool) {
        if self.controls.show_grid != show_grid {
            tracing::debug!(show_grid, "grid toggled");
            self.controls.show_grid = show_grid;
            self.invalidate();
        }
    }

    /// Replace all controls at once.
    pub fn set_controls(&mut self, controls: Controls) {
        self.set_bins(controls.bins);
        self.set_color(controls.color);
        self.set_show_grid(controls.show_grid);
    }

    /// Get the current rendering, recomputing it if a control changed.
    pub fn rendered(&mut self) -> &RenderedHistogram {
        let controls = self.controls;
        let sample = &self.sample;
        let plot = &self.plot;
        let revision = &mut self.revision;
        self.cached.get_or_insert_with(|| {
            *revision += 1;
            tracing::debug!(
                bins = controls.bins.get(),
                color = controls.color.name(),
                grid = controls.show_grid,
                revision = *revision,
                "recomputing histogram"
            );
            RenderedHistogram::render(controls, sample, plot)
        })
    }

    fn invalidate(&mut self) {
        self.cached = None;
    }
}

impl Default for ReactiveView {
    fn default() -> Self {
        Self::new(SampleConfig::default(), PlotConfig::default())
    }
}
