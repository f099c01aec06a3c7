use tracing::{debug, warn};

use crate::sample::NormalizedSample;

/// Central moments of a normalized distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub skewness: f64,
    /// Excess kurtosis (0 for a normal distribution)
    pub kurtosis: f64,
}

impl Moments {
    /// Computes the moments with plain left-to-right sums in index order.
    ///
    /// When all positive weight sits on one x value the distribution is a point
    /// mass: the mean is that x, the variance is exactly zero, skewness and
    /// kurtosis are NaN and a warning is logged. Summing tied rows would
    /// otherwise leave rounding residue in the variance.
    pub fn new(sample: &NormalizedSample) -> Self {
        if let Some(x) = point_mass(sample) {
            warn!(mean = x, "zero variance: skewness and kurtosis are undefined");
            return Moments {
                mean: x,
                variance: 0.0,
                std_dev: 0.0,
                skewness: f64::NAN,
                kurtosis: f64::NAN,
            };
        }

        let mean = weighted_sum(sample, |x| x);

        let central = |power: i32| weighted_sum(sample, |x| (x - mean).powi(power));
        let variance = central(2);
        let std_dev = variance.sqrt();

        let skewness = central(3) / std_dev.powi(3);
        let kurtosis = central(4) / variance.powi(2) - 3.0;

        debug!(mean, variance, skewness, kurtosis, "computed moments");

        Moments {
            mean,
            variance,
            std_dev,
            skewness,
            kurtosis,
        }
    }

    /// True when the variance is zero, which is always the case for a point mass.
    pub fn is_degenerate(&self) -> bool {
        self.std_dev == 0.0
    }
}

/// The single x carrying positive weight, if there is only one.
/// x is sorted, so comparing the first and last supported x is enough.
fn point_mass(sample: &NormalizedSample) -> Option<f64> {
    let mut support = sample.iter().filter(|&(_, w)| w > 0.0).map(|(x, _)| x);
    let first = support.next()?;
    let last = support.last().unwrap_or(first);
    (first == last).then_some(first)
}

fn weighted_sum(sample: &NormalizedSample, f: impl Fn(f64) -> f64) -> f64 {
    let mut sum = 0.0;
    for (x, w) in sample.iter() {
        sum += w * f(x);
    }
    sum
}
