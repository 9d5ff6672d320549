//! The discretized distribution representation
//!
//! A [`Distribution`] is a finite set of bins, each a representative value
//! (the center) tagged with the probability mass of its interval (the
//! weight). Weights always sum to one. A distribution without bins is
//! "unsampled" and is rejected by every arithmetic operation and query.

use crate::utils::{is_ascending, min_max, normalize_weights};
use crate::{Error, Result, Side};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discretized probability distribution: index-aligned centers and weights
///
/// Values are immutable once built; every transformation returns a new
/// distribution that owns its own buffers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawDistribution", into = "RawDistribution")]
pub struct Distribution {
    centers: Vec<f64>,
    weights: Vec<f64>,
}

/// Serialized form of a distribution, validated on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDistribution {
    /// Representative value of each bin
    pub centers: Vec<f64>,
    /// Probability mass of each bin
    pub weights: Vec<f64>,
}

impl Distribution {
    /// Placeholder with no samples
    ///
    /// Any arithmetic or statistic on it fails with
    /// [`Error::UnsampledDistribution`].
    pub fn unsampled() -> Self {
        Self::default()
    }

    /// Build a distribution from raw centers and weights
    ///
    /// Both slices must have the same non-zero length, centers must be
    /// finite and weights finite and non-negative with positive total. The
    /// weights are renormalized to sum to one.
    pub fn from_parts(centers: Vec<f64>, mut weights: Vec<f64>) -> Result<Self> {
        if centers.len() != weights.len() {
            return Err(Error::size_mismatch(
                centers.len(),
                weights.len(),
                "distribution weights",
            ));
        }
        if centers.is_empty() {
            return Err(Error::InvalidInput(
                "a distribution needs at least one bin".to_string(),
            ));
        }
        if centers.iter().any(|c| !c.is_finite()) {
            return Err(Error::non_finite("distribution centers"));
        }
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(Error::non_finite("distribution weights"));
        }
        if weights.iter().any(|&w| w < 0.0) {
            return Err(Error::InvalidInput(
                "distribution weights must be non-negative".to_string(),
            ));
        }
        normalize_weights(&mut weights)?;
        Ok(Self { centers, weights })
    }

    /// Representative values of the bins
    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    /// Probability masses of the bins
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Check if the distribution has no bins
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Check if the distribution carries samples
    pub fn is_sampled(&self) -> bool {
        !self.centers.is_empty()
    }

    /// Fail with [`Error::UnsampledDistribution`] unless sampled
    pub fn ensure_sampled(&self, operand: Side) -> Result<()> {
        if self.is_sampled() {
            Ok(())
        } else {
            Err(Error::UnsampledDistribution { operand })
        }
    }

    /// Iterate over `(center, weight)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.centers
            .iter()
            .copied()
            .zip(self.weights.iter().copied())
    }

    /// Sum of all weights (one up to rounding for sampled distributions)
    pub fn total_mass(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Smallest and largest center, `None` when unsampled
    pub fn support(&self) -> Option<(f64, f64)> {
        min_max(&self.centers)
    }

    /// Check if the centers are in non-decreasing order
    pub fn is_ascending(&self) -> bool {
        is_ascending(&self.centers)
    }

    /// Copy with the bins reordered by ascending center
    ///
    /// Each weight travels with its center. Already ascending input is
    /// returned as a plain clone.
    pub fn to_ascending(&self) -> Self {
        if self.is_ascending() {
            return self.clone();
        }
        let mut pairs: Vec<(f64, f64)> = self.iter().collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (centers, weights) = pairs.into_iter().unzip();
        Self { centers, weights }
    }

    /// New distribution with every center mapped through `f`, weights unchanged
    ///
    /// Fails if `self` is unsampled or if `f` produces a non-finite center.
    pub fn map_centers<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        self.ensure_sampled(Side::Only)?;
        let centers: Vec<f64> = self.centers.iter().map(|&c| f(c)).collect();
        if centers.iter().any(|c| !c.is_finite()) {
            return Err(Error::non_finite("transformed centers"));
        }
        Ok(Self {
            centers,
            weights: self.weights.clone(),
        })
    }

    /// Consume the distribution and return its buffers
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.centers, self.weights)
    }
}

impl TryFrom<RawDistribution> for Distribution {
    type Error = Error;

    fn try_from(raw: RawDistribution) -> Result<Self> {
        if raw.centers.is_empty() && raw.weights.is_empty() {
            return Ok(Self::unsampled());
        }
        Self::from_parts(raw.centers, raw.weights)
    }
}

impl From<Distribution> for RawDistribution {
    fn from(dist: Distribution) -> Self {
        let (centers, weights) = dist.into_parts();
        Self { centers, weights }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.support() {
            Some((lo, hi)) => write!(
                f,
                "Distribution({} bins, support=[{:.6}, {:.6}])",
                self.len(),
                lo,
                hi
            ),
            None => write!(f, "Distribution(unsampled)"),
        }
    }
}
