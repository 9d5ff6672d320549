//! Central coverage intervals for uncertainty reports

use crate::quantile::{quantiles_with, QuantileMethod};
use serde::{Deserialize, Serialize};
use std::fmt;
use uncertain_core::{Distribution, Error, Result};

/// Central interval holding probability `level`, with the median
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageInterval {
    pub lower: f64,
    pub median: f64,
    pub upper: f64,
    /// Coverage probability, e.g. 0.95
    pub level: f64,
}

impl CoverageInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// `1 - lower/median`, `None` for a zero median
    pub fn relative_lower(&self) -> Option<f64> {
        (self.median != 0.0).then(|| 1.0 - self.lower / self.median)
    }

    /// `upper/median - 1`, `None` for a zero median
    pub fn relative_upper(&self) -> Option<f64> {
        (self.median != 0.0).then(|| self.upper / self.median - 1.0)
    }
}

impl fmt::Display for CoverageInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3} coverage: [{:.6}, {:.6}] around {:.6}",
            self.level, self.lower, self.upper, self.median
        )?;
        if let (Some(lo), Some(hi)) = (self.relative_lower(), self.relative_upper()) {
            write!(f, " (-{:.4}% / +{:.4}%)", 100.0 * lo, 100.0 * hi)?;
        }
        Ok(())
    }
}

/// Central interval `[q((1-level)/2), q((1+level)/2)]` with step quantiles
pub fn coverage_interval(dist: &Distribution, level: f64) -> Result<CoverageInterval> {
    coverage_interval_with(dist, level, QuantileMethod::Step)
}

/// Central coverage interval using `method` for the quantiles
///
/// ```rust
/// use uncertain_families::uniform;
/// use uncertain_stats::coverage_interval;
///
/// let dist = uniform(0.0, 1.0, 1000).unwrap();
/// let ci = coverage_interval(&dist, 0.9).unwrap();
/// assert!((ci.lower - 0.05).abs() < 2e-3);
/// assert!((ci.upper - 0.95).abs() < 2e-3);
/// ```
pub fn coverage_interval_with(
    dist: &Distribution,
    level: f64,
    method: QuantileMethod,
) -> Result<CoverageInterval> {
    if !(level > 0.0 && level < 1.0) {
        return Err(Error::InvalidParameter(format!(
            "coverage level {level} must be in (0, 1)"
        )));
    }
    let tail = 0.5 * (1.0 - level);
    let qs = quantiles_with(dist, &[tail, 0.5, 1.0 - tail], method)?;
    Ok(CoverageInterval {
        lower: qs[0],
        median: qs[1],
        upper: qs[2],
        level,
    })
}
