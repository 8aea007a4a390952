//! Equal-width histogram binning with density normalization.

/// One histogram bin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    /// Lower edge (inclusive).
    pub start: f64,
    /// Upper edge (exclusive, except for the last bin).
    pub end: f64,
    /// Number of samples falling in the bin.
    pub count: usize,
    /// Count scaled so the histogram area integrates to 1.
    pub density: f64,
}

impl Bin {
    /// Bin width.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Density-normalized histogram.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Histogram {
    bins: Vec<Bin>,
}

impl Histogram {
    /// Partition `values` into `bin_count` equal-width bins over their range.
    ///
    /// Non-finite values are ignored. A value equal to the maximum lands in the
    /// last bin. When every value is equal, the range is widened to
    /// `[v - 0.5, v + 0.5]`. Zero bins or no finite values give an empty
    /// histogram.
    pub fn compute(values: &[f64], bin_count: usize) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if bin_count == 0 || finite.is_empty() {
            return Self::default();
        }

        let (mut lo, mut hi) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bin_count as f64;
        let mut counts = vec![0usize; bin_count];
        for &v in &finite {
            let idx = (((v - lo) / width) as usize).min(bin_count - 1);
            counts[idx] += 1;
        }

        let total = finite.len() as f64;
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let start = lo + i as f64 * width;
                let end = if i + 1 == bin_count {
                    hi
                } else {
                    lo + (i + 1) as f64 * width
                };
                Bin {
                    start,
                    end,
                    count,
                    density: count as f64 / (total * width),
                }
            })
            .collect();

        Self { bins }
    }

    /// Get the bins in ascending order.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Get the number of bins.
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check whether the histogram has no bins.
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Data range covered by the bins.
    pub fn range(&self) -> Option<(f64, f64)> {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => Some((first.start, last.end)),
            _ => None,
        }
    }

    /// Tallest bar.
    pub fn max_density(&self) -> f64 {
        self.bins.iter().map(|b| b.density).fold(0.0, f64::max)
    }

    /// Total number of binned samples.
    pub fn total_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Total bar area; 1 for any non-empty histogram.
    pub fn area(&self) -> f64 {
        self.bins.iter().map(|b| b.density * b.width()).sum()
    }
}
