//! Deterministic sample generation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use crate::config::SampleConfig;

/// Normally distributed samples drawn from a seeded generator.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    values: Vec<f64>,
}

impl SampleData {
    /// Generate samples as `mean + std_dev * z` with `z ~ N(0, 1)`.
    ///
    /// The generator is reseeded on every call, so the same config always
    /// yields the same values.
    pub fn generate(config: &SampleConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let values = (0..config.count)
            .map(|_| {
                let z: f64 = StandardNormal.sample(&mut rng);
                config.mean + config.std_dev * z
            })
            .collect();
        Self { values }
    }

    /// Get the sample values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Get the number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Minimum and maximum of the finite samples.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Arithmetic mean of the samples.
    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_bit_identical_across_calls() {
        let config = SampleConfig::default();
        let a = SampleData::generate(&config);
        let b = SampleData::generate(&config);

        assert_eq!(a.len(), 437);
        let a_bits: Vec<u64> = a.values().iter().map(|v| v.to_bits()).collect();
        let b_bits: Vec<u64> = b.values().iter().map(|v| v.to_bits()).collect();
        assert_eq!(a_bits, b_bits);
    }

    #[test]
    fn different_seed_gives_different_samples() {
        let a = SampleData::generate(&SampleConfig::default());
        let b = SampleData::generate(&SampleConfig {
            seed: 42,
            ..SampleConfig::default()
        });
        assert_ne!(a, b);
    }

    #[test]
    fn samples_follow_configured_distribution() {
        let data = SampleData::generate(&SampleConfig::default());
        let mean = data.mean().unwrap();
        // Standard error of the mean is 15 / sqrt(437) ~ 0.72.
        assert!((mean - 100.0).abs() < 5.0, "mean was {mean}");

        let (lo, hi) = data.min_max().unwrap();
        assert!(lo < 100.0 && hi > 100.0);
        assert!(lo > 0.0 && hi < 200.0);
    }

    #[test]
    fn zero_count_is_empty() {
        let data = SampleData::generate(&SampleConfig {
            count: 0,
            ..SampleConfig::default()
        });
        assert!(data.is_empty());
        assert_eq!(data.min_max(), None);
        assert_eq!(data.mean(), None);
    }
}
