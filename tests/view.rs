//! End-to-end checks of the reactive view through the public API.

use histoview::config::{PlotConfig, SampleConfig};
use histoview::controls::{BarColor, BinCount, Controls};
use histoview::data::SampleData;
use histoview::view::{ReactiveView, RenderedHistogram};

#[test]
fn every_control_combination_is_a_pure_function() {
    let sample = SampleConfig::default();
    let plot = PlotConfig::default();

    for bins in [0, 1, 20, 99, 100] {
        for color in BarColor::ALL {
            for show_grid in [true, false] {
                let controls = Controls {
                    bins: BinCount::new(bins).unwrap(),
                    color,
                    show_grid,
                };
                let first = RenderedHistogram::render(controls, &sample, &plot);
                let second = RenderedHistogram::render(controls, &sample, &plot);
                assert_eq!(first, second);
                assert_eq!(first.bar_count(), bins as usize);
                assert_eq!(first.bar_color(), color.color());
                assert_eq!(first.has_grid(), show_grid);
            }
        }
    }
}

#[test]
fn view_matches_direct_render_with_defaults() {
    let mut view = ReactiveView::default();
    let expected = RenderedHistogram::render(
        Controls::default(),
        &SampleConfig::default(),
        &PlotConfig::default(),
    );
    assert_eq!(view.rendered(), &expected);
    assert_eq!(expected.sample_count, 437);
}

#[test]
fn sample_data_is_reproducible() {
    let config = SampleConfig::default();
    assert_eq!(config.seed, 19_680_801);
    assert_eq!(SampleData::generate(&config), SampleData::generate(&config));
}
