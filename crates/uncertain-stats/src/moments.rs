//! Weighted moments of a discretized distribution

use serde::{Deserialize, Serialize};
use std::fmt;
use uncertain_core::{Distribution, Result, Side};

/// First four standardized moments
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Zero when the variance vanishes
    pub skewness: f64,
    /// Kurtosis minus three, zero when the variance vanishes
    pub excess_kurtosis: f64,
}

impl fmt::Display for Moments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mean={:.6}, std_dev={:.6}, skewness={:.4}, excess_kurtosis={:.4}",
            self.mean, self.std_dev, self.skewness, self.excess_kurtosis
        )
    }
}

/// `Σ c·w`
pub fn mean(dist: &Distribution) -> Result<f64> {
    dist.ensure_sampled(Side::Only)?;
    Ok(dist.iter().map(|(c, w)| c * w).sum())
}

/// Weighted mean and population standard deviation
///
/// # Examples
///
/// ```rust
/// use uncertain_core::Distribution;
/// use uncertain_stats::mean_and_std_dev;
///
/// let dist = Distribution::from_parts(vec![-1.0, 1.0], vec![1.0, 1.0]).unwrap();
/// let (mean, std_dev) = mean_and_std_dev(&dist).unwrap();
/// assert_eq!(mean, 0.0);
/// assert_eq!(std_dev, 1.0);
/// ```
pub fn mean_and_std_dev(dist: &Distribution) -> Result<(f64, f64)> {
    let m = mean(dist)?;
    let variance: f64 = dist.iter().map(|(c, w)| (c - m).powi(2) * w).sum();
    Ok((m, variance.sqrt()))
}

/// Mean, variance, skewness and excess kurtosis in two passes
pub fn moments(dist: &Distribution) -> Result<Moments> {
    let m = mean(dist)?;
    let (m2, m3, m4) = dist.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), (c, w)| {
        let d = c - m;
        let d2 = d * d;
        (m2 + d2 * w, m3 + d2 * d * w, m4 + d2 * d2 * w)
    });
    let std_dev = m2.sqrt();
    let (skewness, excess_kurtosis) = if m2 > 0.0 {
        (m3 / (m2 * std_dev), m4 / (m2 * m2) - 3.0)
    } else {
        (0.0, 0.0)
    };
    Ok(Moments {
        mean: m,
        variance: m2,
        std_dev,
        skewness,
        excess_kurtosis,
    })
}
