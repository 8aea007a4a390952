//! Histoview - An interactive, terminal-based histogram viewer.
//!
//! Histoview draws a density-normalized histogram of a fixed, seeded sample
//! set next to a sidebar of controls. Changing the bin count, bar color or
//! gridline checkbox re-renders the plot.
//!
//! # Features
//!
//! - Bin-count slider (0-100)
//! - Bar-color dropdown with eight colors
//! - Gridline checkbox
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use histoview::controls::{BarColor, BinCount};
//! use histoview::view::ReactiveView;
//!
//! let mut view = ReactiveView::default();
//! view.set_bins(BinCount::new(30)?);
//! view.set_color(BarColor::Orange);
//!
//! let rendered = view.rendered();
//! assert_eq!(rendered.bar_count(), 30);
//! # Ok::<(), histoview::HistoviewError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod controls;
pub mod data;
pub mod error;
pub mod logging;
pub mod ui;
pub mod view;

pub use error::{HistoviewError, Result};
