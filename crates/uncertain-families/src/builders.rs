//! Discretization of the analytic families
//!
//! Every builder partitions its effective support into equal-width bins,
//! places a center at each bin midpoint and assigns each bin a weight
//! proportional to the density at that center times the bin width. Weights
//! are renormalized to sum to one, so mass outside a truncated support is
//! discarded rather than approximated.

use crate::family::Family;
use crate::traits::DistributionBuilder;
use statrs::distribution::{Continuous, ContinuousCDF, Normal, Triangular as StatrsTriangular};
use tracing::trace;
use uncertain_core::utils::equal_width_centers;
use uncertain_core::{Distribution, Error, Result};

/// Read a required parameter: NaN means "not provided"
pub(crate) fn require(family: Family, parameter: &'static str, value: f64) -> Result<f64> {
    if value.is_nan() {
        return Err(Error::MissingParameter {
            family: family.name(),
            parameter,
        });
    }
    if !value.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "{} distribution parameter {parameter} must be finite, got {value}",
            family.name()
        )));
    }
    Ok(value)
}

fn check_samples(samples: usize) -> Result<()> {
    if samples == 0 {
        return Err(Error::InvalidParameter(
            "sample count must be positive".to_string(),
        ));
    }
    Ok(())
}

fn stats_error(family: Family, e: statrs::StatsError) -> Error {
    Error::InvalidParameter(format!("{} distribution: {e}", family.name()))
}

/// Uniform ("rect") distribution on `[left, right]`
///
/// Every bin carries mass `1/n`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uniform {
    left: f64,
    right: f64,
}

impl Uniform {
    /// Create a uniform distribution, requiring `left < right`
    pub fn new(left: f64, right: f64) -> Result<Self> {
        let left = require(Family::Rect, "left", left)?;
        let right = require(Family::Rect, "right", right)?;
        if right <= left {
            return Err(Error::InvalidParameter(format!(
                "rect distribution needs left < right, got [{left}, {right}]"
            )));
        }
        Ok(Self { left, right })
    }

    /// Uniform distribution of total width `width` centered on `center`
    pub fn centered(center: f64, width: f64) -> Result<Self> {
        Self::new(center - 0.5 * width, center + 0.5 * width)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.right
    }
}

impl DistributionBuilder for Uniform {
    fn family(&self) -> Family {
        Family::Rect
    }

    fn build(&self, samples: usize) -> Result<Distribution> {
        check_samples(samples)?;
        trace!(left = self.left, right = self.right, samples, "sampling rect distribution");
        let (centers, _) = equal_width_centers(self.left, self.right, samples);
        let weights = vec![1.0 / samples as f64; samples];
        Distribution::from_parts(centers, weights)
    }

    fn support(&self) -> (f64, f64) {
        (self.left, self.right)
    }

    fn analytic_mean(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    fn analytic_std_dev(&self) -> f64 {
        (self.right - self.left) / 12.0_f64.sqrt()
    }
}

/// Gaussian ("normal") distribution truncated at `mean ± max_sigma * std_dev`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TruncatedNormal {
    mean: f64,
    std_dev: f64,
    max_sigma: f64,
}

impl TruncatedNormal {
    /// Create a truncated normal, requiring positive `std_dev` and `max_sigma`
    pub fn new(mean: f64, std_dev: f64, max_sigma: f64) -> Result<Self> {
        let mean = require(Family::Normal, "mean", mean)?;
        let std_dev = require(Family::Normal, "std_dev", std_dev)?;
        let max_sigma = require(Family::Normal, "max_sigma", max_sigma)?;
        if std_dev <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "normal distribution needs std_dev > 0, got {std_dev}"
            )));
        }
        if max_sigma <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "normal distribution needs max_sigma > 0, got {max_sigma}"
            )));
        }
        Ok(Self {
            mean,
            std_dev,
            max_sigma,
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    pub fn max_sigma(&self) -> f64 {
        self.max_sigma
    }
}

impl DistributionBuilder for TruncatedNormal {
    fn family(&self) -> Family {
        Family::Normal
    }

    fn build(&self, samples: usize) -> Result<Distribution> {
        check_samples(samples)?;
        trace!(
            mean = self.mean,
            std_dev = self.std_dev,
            max_sigma = self.max_sigma,
            samples,
            "sampling normal distribution"
        );
        let normal =
            Normal::new(self.mean, self.std_dev).map_err(|e| stats_error(Family::Normal, e))?;
        let (left, right) = self.support();
        let (centers, width) = equal_width_centers(left, right, samples);
        let weights = centers.iter().map(|&c| normal.pdf(c) * width).collect();
        Distribution::from_parts(centers, weights)
    }

    fn support(&self) -> (f64, f64) {
        let half = self.max_sigma * self.std_dev;
        (self.mean - half, self.mean + half)
    }

    fn analytic_mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation of the symmetrically truncated normal
    ///
    /// `σ² (1 - 2βφ(β) / (2Φ(β) - 1))` with `β = max_sigma`.
    fn analytic_std_dev(&self) -> f64 {
        let standard = match Normal::new(0.0, 1.0) {
            Ok(n) => n,
            Err(_) => return self.std_dev,
        };
        let beta = self.max_sigma;
        let kept = 2.0 * standard.cdf(beta) - 1.0;
        if kept <= 0.0 {
            return self.std_dev;
        }
        let factor = 1.0 - 2.0 * beta * standard.pdf(beta) / kept;
        self.std_dev * factor.max(0.0).sqrt()
    }
}

/// Triangular ("tri") distribution with peak at `mode`, possibly asymmetric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    left: f64,
    mode: f64,
    right: f64,
}

impl Triangular {
    /// Create a triangular distribution, requiring `left <= mode <= right` and `left < right`
    pub fn new(left: f64, mode: f64, right: f64) -> Result<Self> {
        let left = require(Family::Tri, "left", left)?;
        let mode = require(Family::Tri, "mode", mode)?;
        let right = require(Family::Tri, "right", right)?;
        if left > mode || mode > right {
            return Err(Error::InvalidParameter(format!(
                "tri distribution needs left <= mode <= right, got ({left}, {mode}, {right})"
            )));
        }
        if left == right {
            return Err(Error::InvalidParameter(format!(
                "tri distribution needs a non-empty support, got left == right == {left}"
            )));
        }
        Ok(Self { left, mode, right })
    }

    /// Symmetric triangular distribution of half-width `half_width` around `center`
    pub fn symmetric(center: f64, half_width: f64) -> Result<Self> {
        Self::new(center - half_width, center, center + half_width)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn mode(&self) -> f64 {
        self.mode
    }

    pub fn right(&self) -> f64 {
        self.right
    }
}

impl DistributionBuilder for Triangular {
    fn family(&self) -> Family {
        Family::Tri
    }

    fn build(&self, samples: usize) -> Result<Distribution> {
        check_samples(samples)?;
        trace!(
            left = self.left,
            mode = self.mode,
            right = self.right,
            samples,
            "sampling tri distribution"
        );
        let tri = StatrsTriangular::new(self.left, self.right, self.mode)
            .map_err(|e| stats_error(Family::Tri, e))?;
        let (centers, width) = equal_width_centers(self.left, self.right, samples);
        let weights = centers.iter().map(|&c| tri.pdf(c) * width).collect();
        Distribution::from_parts(centers, weights)
    }

    fn support(&self) -> (f64, f64) {
        (self.left, self.right)
    }

    fn analytic_mean(&self) -> f64 {
        (self.left + self.mode + self.right) / 3.0
    }

    fn analytic_std_dev(&self) -> f64 {
        let (a, c, b) = (self.left, self.mode, self.right);
        ((a * a + b * b + c * c - a * b - a * c - b * c) / 18.0).sqrt()
    }
}
