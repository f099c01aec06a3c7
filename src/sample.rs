use tracing::debug;

use crate::error::{AnalyzeError, Result};

/// Discretized PDF as read from input.
/// x is non-decreasing, densities are non-negative and there is at least one point.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    x: Vec<f64>,
    density: Vec<f64>,
}

impl Sample {
    /// Builds a sample from parallel columns, validating them as if they were
    /// input lines numbered from 1.
    pub fn new(x: Vec<f64>, density: Vec<f64>) -> Result<Self> {
        if x.len() != density.len() {
            // The first row that lacks a partner column is the malformed one.
            return Err(AnalyzeError::Columns {
                line: x.len().min(density.len()) + 1,
                found: 1,
            });
        }
        let mut builder = SampleBuilder::with_capacity(x.len());
        for (i, (&xi, &di)) in x.iter().zip(&density).enumerate() {
            builder.push(i + 1, xi, di)?;
        }
        builder.finish()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn density(&self) -> &[f64] {
        &self.density
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false for a constructed sample; kept for the `len` convention.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Rescales densities to sum to 1, keeping the original sum as the normalization.
    pub fn normalize(self) -> Result<NormalizedSample> {
        let total: f64 = self.density.iter().sum();
        if !(total > 0.0 && total.is_finite()) {
            return Err(AnalyzeError::NonPositiveMass { total });
        }
        debug!(total, n = self.len(), "normalizing sample");

        let Sample { x, mut density } = self;
        for w in &mut density {
            *w /= total;
        }

        Ok(NormalizedSample {
            x,
            weight: density,
            normalization: total,
        })
    }
}

/// Accumulates validated rows one at a time.
#[derive(Debug, Default)]
pub struct SampleBuilder {
    x: Vec<f64>,
    density: Vec<f64>,
}

impl SampleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        SampleBuilder {
            x: Vec::with_capacity(n),
            density: Vec::with_capacity(n),
        }
    }

    /// Appends a row; `line` is only used for diagnostics.
    pub fn push(&mut self, line: usize, x: f64, density: f64) -> Result<()> {
        if !x.is_finite() {
            return Err(AnalyzeError::Conversion {
                line,
                token: x.to_string(),
            });
        }
        if !density.is_finite() {
            return Err(AnalyzeError::Conversion {
                line,
                token: density.to_string(),
            });
        }
        if density < 0.0 {
            return Err(AnalyzeError::NegativeDensity {
                line,
                value: density,
            });
        }
        if let Some(&previous) = self.x.last() {
            if previous > x {
                return Err(AnalyzeError::Order {
                    line,
                    previous,
                    current: x,
                });
            }
        }

        self.x.push(x);
        self.density.push(density);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn finish(self) -> Result<Sample> {
        if self.x.is_empty() {
            return Err(AnalyzeError::EmptyInput);
        }
        Ok(Sample {
            x: self.x,
            density: self.density,
        })
    }
}

/// Sample whose weights sum to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSample {
    x: Vec<f64>,
    weight: Vec<f64>,
    normalization: f64,
}

impl NormalizedSample {
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn weight(&self) -> &[f64] {
        &self.weight
    }

    /// Sum of the densities before normalization.
    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// (x, weight) pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.weight.iter().copied())
    }
}
