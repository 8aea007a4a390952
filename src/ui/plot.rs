//! Histogram plot rendering.

use crate::config::PlotConfig;
use crate::data::Histogram;
use crate::ui::formatters::axis_labels;
use crate::ui::ThemeColors;
use crate::view::{Grid, RenderedHistogram};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw the rendered histogram as a bar chart.
pub(super) fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    rendered: &RenderedHistogram,
    config: &PlotConfig,
    colors: &ThemeColors,
) {
    let [x_min, x_max] = rendered.x_bounds;

    // One column of braille dots per sample point keeps the bars solid.
    let columns = (area.width as usize).max(1) * config.points_per_cell.max(1);
    let step = (x_max - x_min) / columns as f64;
    let bars = bar_points(&rendered.histogram, step);

    let grid_lines = rendered
        .grid
        .as_ref()
        .map(|grid| grid_segments(grid, rendered.x_bounds, rendered.y_bounds))
        .unwrap_or_default();

    // Gridlines first so bars paint over them.
    let mut datasets: Vec<Dataset<'_>> = grid_lines
        .iter()
        .map(|segment| {
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.grid))
                .data(segment)
        })
        .collect();

    datasets.push(
        Dataset::default()
            .marker(Marker::Braille)
            .graph_type(GraphType::Bar)
            .style(Style::default().fg(rendered.bar_color()))
            .data(&bars),
    );

    let x_axis = Axis::default()
        .title(rendered.x_label)
        .style(Style::default().fg(colors.text))
        .bounds(rendered.x_bounds)
        .labels(axis_labels(rendered.x_bounds));

    let y_axis = Axis::default()
        .title(rendered.y_label)
        .style(Style::default().fg(colors.text))
        .bounds(rendered.y_bounds)
        .labels(axis_labels(rendered.y_bounds));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg))
        .title(format!(" {} ", rendered.title))
        .title_style(Style::default().fg(colors.heading).add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(format!(" {} ", rendered.alt_text)).right_aligned());
    let inner = block.inner(area);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);

    if rendered.histogram.is_empty() {
        let message = Paragraph::new("0 bins selected: nothing to draw")
            .style(Style::default().fg(colors.label))
            .alignment(Alignment::Center);
        let mid = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1.min(inner.height));
        f.render_widget(message, mid);
    }
}

/// Sample each bar across its width so the braille bars render filled.
///
/// Every non-empty bin contributes its midpoint even when it is narrower than
/// `step`, so no bar disappears at low resolution.
fn bar_points(histogram: &Histogram, step: f64) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for bin in histogram.bins().iter().filter(|b| b.density > 0.0) {
        points.push(((bin.start + bin.end) / 2.0, bin.density));
        if step.is_finite() && step > 0.0 {
            let mut x = bin.start;
            while x < bin.end {
                points.push((x, bin.density));
                x += step;
            }
        }
    }
    points
}

/// Two-point line segments for every gridline.
fn grid_segments(grid: &Grid, x_bounds: [f64; 2], y_bounds: [f64; 2]) -> Vec<Vec<(f64, f64)>> {
    let vertical = grid
        .x_ticks
        .iter()
        .map(|&x| vec![(x, y_bounds[0]), (x, y_bounds[1])]);
    let horizontal = grid
        .y_ticks
        .iter()
        .map(|&y| vec![(x_bounds[0], y), (x_bounds[1], y)]);
    vertical.chain(horizontal).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_non_empty_bin_gets_points() {
        let hist = Histogram::compute(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        let points = bar_points(&hist, 0.25);
        for bin in hist.bins() {
            assert!(points
                .iter()
                .any(|&(x, y)| x >= bin.start && x <= bin.end && y == bin.density));
        }
        assert!(points.len() >= 16);
    }

    #[test]
    fn coarse_step_still_marks_midpoints() {
        let hist = Histogram::compute(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        let points = bar_points(&hist, 100.0);
        assert_eq!(points.len(), 8);
        assert!(points.contains(&(0.5, hist.bins()[0].density)));
    }

    #[test]
    fn empty_bins_are_skipped() {
        let hist = Histogram::compute(&[0.0, 10.0], 3);
        let points = bar_points(&hist, f64::NAN);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn grid_segments_span_the_plot() {
        let grid = Grid {
            x_ticks: vec![0.0, 5.0],
            y_ticks: vec![0.0, 0.5, 1.0],
        };
        let segments = grid_segments(&grid, [0.0, 5.0], [0.0, 1.0]);
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[1], vec![(5.0, 0.0), (5.0, 1.0)]);
        assert_eq!(segments[3], vec![(0.0, 0.5), (5.0, 0.5)]);
    }
}
