//! Sample data and histogram binning.
//!
//! This module generates the fixed sample set and partitions it into
//! equal-width, density-normalized bins.

mod histogram;
mod sample;

pub use histogram::{Bin, Histogram};
pub use sample::SampleData;
