use std::io::BufRead;

use crate::error::Result;
use crate::moments::Moments;
use crate::parsing;
use crate::quantiles::{self, Cdf};
use crate::sample::Sample;

/// Summary statistics of a discretized PDF.
/// Built once from a validated sample and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticsReport {
    mean: f64,
    std_dev: f64,
    variance: f64,
    skewness: f64,
    kurtosis: f64,
    q1: f64,
    median: f64,
    q3: f64,
    mode: f64,
    normalization: f64,
}

impl StatisticsReport {
    pub fn new(sample: Sample) -> Result<Self> {
        let normalized = sample.normalize()?;
        let moments = Moments::new(&normalized);
        let (q1, median, q3) = Cdf::new(&normalized).quartiles()?;

        Ok(StatisticsReport {
            mean: moments.mean,
            std_dev: moments.std_dev,
            variance: moments.variance,
            skewness: moments.skewness,
            kurtosis: moments.kurtosis,
            q1,
            median,
            q3,
            mode: quantiles::mode(&normalized),
            normalization: normalized.normalization(),
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn variance(&self) -> f64 {
        self.variance
    }

    pub fn skewness(&self) -> f64 {
        self.skewness
    }

    /// Excess kurtosis
    pub fn kurtosis(&self) -> f64 {
        self.kurtosis
    }

    pub fn q1(&self) -> f64 {
        self.q1
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    pub fn q3(&self) -> f64 {
        self.q3
    }

    pub fn mode(&self) -> f64 {
        self.mode
    }

    /// Sum of the input densities before normalization.
    pub fn normalization(&self) -> f64 {
        self.normalization
    }
}

/// Reads, validates and summarizes a whole `<x> <density>` stream.
pub fn analyze<R: BufRead>(reader: R) -> Result<StatisticsReport> {
    StatisticsReport::new(parsing::read_sample(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Cursor;

    #[test]
    fn test_uniform_four_points() {
        let report = analyze(Cursor::new("0 1\n1 1\n2 1\n3 1\n")).unwrap();

        assert_eq!(report.mean(), 1.5);
        assert_eq!(report.median(), 2.0);
        assert_eq!(report.mode(), 0.0);
        assert_eq!(report.q1(), 1.0);
        assert_eq!(report.q3(), 3.0);
        assert_eq!(report.normalization(), 4.0);
    }

    #[test]
    fn test_single_point_mass() {
        let report = analyze(Cursor::new("5 3\n")).unwrap();

        assert_eq!(report.mean(), 5.0);
        assert_eq!(report.variance(), 0.0);
        assert_eq!(report.std_dev(), 0.0);
        assert_eq!(report.mode(), 5.0);
        assert_eq!((report.q1(), report.median(), report.q3()), (5.0, 5.0, 5.0));
        assert_eq!(report.normalization(), 3.0);
        assert!(report.skewness().is_nan());
        assert!(report.kurtosis().is_nan());
    }

    #[test]
    fn test_repeated_row_is_a_point_mass() {
        let report = analyze(Cursor::new("3 1\n".repeat(7))).unwrap();

        assert_eq!(report.mean(), 3.0);
        assert_eq!(report.variance(), 0.0);
        assert_eq!(report.std_dev(), 0.0);
        assert!(report.skewness().is_nan());
        assert!(report.kurtosis().is_nan());
        assert_eq!(report.normalization(), 7.0);
    }

    #[test]
    fn test_symmetric_skew_is_zero() {
        let report = analyze(Cursor::new("-1 1\n0 2\n1 1\n")).unwrap();

        assert!(report.skewness().abs() < 1e-12);
        assert_eq!(report.mode(), 0.0);
        assert_eq!(report.median(), 0.0);
    }

    #[test]
    fn test_discretized_gaussian() {
        // Unnormalized Gaussian on a fine grid: moments approach the continuous ones.
        let mut input = String::new();
        for i in -600..=600 {
            let x = i as f64 * 0.01;
            input.push_str(&format!("{} {}\n", x, (-0.5 * x * x).exp()));
        }
        let report = analyze(Cursor::new(input)).unwrap();

        assert!(report.mean().abs() < 1e-9);
        assert!((report.std_dev() - 1.0).abs() < 1e-4);
        assert!(report.skewness().abs() < 1e-9);
        assert!(report.kurtosis().abs() < 1e-3);
        assert!(report.median().abs() <= 0.01);
        assert!((report.q1() + 0.6745).abs() < 0.02);
        assert!((report.q3() - 0.6745).abs() < 0.02);
        // Riemann sum of exp(-x²/2) with step 0.01 is sqrt(2π) / 0.01
        assert!((report.normalization() * 0.01 - (2.0 * std::f64::consts::PI).sqrt()).abs() < 1e-6);
    }

    #[test]
    fn test_zero_mass_is_rejected() {
        let err = analyze(Cursor::new("0 0\n1 0\n")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_invalid_input_propagates() {
        let err = analyze(Cursor::new("1 0.5\n0 0.5\n")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Order);
    }
}
