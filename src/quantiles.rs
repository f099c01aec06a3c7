//! Cumulative distribution, quantile lookup and mode of a normalized sample.

use crate::error::{AnalyzeError, Result};
use crate::sample::NormalizedSample;

/// Probabilities reported as the first, second (median) and third quartile.
pub const QUARTILES: [f64; 3] = [0.25, 0.50, 0.75];

/// Running sum of the normalized weights, aligned with the sample's x values.
#[derive(Debug, Clone, PartialEq)]
pub struct Cdf<'a> {
    x: &'a [f64],
    cdf: Vec<f64>,
}

impl<'a> Cdf<'a> {
    pub fn new(sample: &'a NormalizedSample) -> Self {
        let mut acc = 0.0;
        let cdf = sample
            .weight()
            .iter()
            .map(|w| {
                acc += w;
                acc
            })
            .collect();

        Cdf { x: sample.x(), cdf }
    }

    pub fn values(&self) -> &[f64] {
        &self.cdf
    }

    /// x at the first index whose cumulative mass strictly exceeds `p`.
    ///
    /// The CDF is non-decreasing, so the binary search lands on the same index
    /// a front-to-back scan would.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        let idx = self.cdf.partition_point(|&c| c <= p);
        self.x
            .get(idx)
            .copied()
            .ok_or(AnalyzeError::QuantileNotFound { p })
    }

    /// (Q1, median, Q3)
    pub fn quartiles(&self) -> Result<(f64, f64, f64)> {
        let [q1, q2, q3] = QUARTILES;
        Ok((self.quantile(q1)?, self.quantile(q2)?, self.quantile(q3)?))
    }
}

/// x of the largest weight; the first one wins a tie.
pub fn mode(sample: &NormalizedSample) -> f64 {
    let mut best = 0;
    for (i, &w) in sample.weight().iter().enumerate() {
        if w > sample.weight()[best] {
            best = i;
        }
    }
    sample.x()[best]
}
