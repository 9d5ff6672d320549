//! Projection of raw `(value, mass)` contributions onto equal-width bins

use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use uncertain_core::utils::{equal_width_centers, min_max, normalize_weights};
use uncertain_core::{Distribution, Error, Result, Side};

/// How a contribution's mass is assigned to output bins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rebinning {
    /// All mass goes to the bin containing the value
    #[default]
    Histogram,
    /// Mass is split between the two nearest bin centers in proportion to
    /// distance, which keeps the mean of the contributions exact
    Linear,
}

/// Equal-width output axis spanning `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputAxis {
    left: f64,
    width: f64,
    bins: usize,
}

impl OutputAxis {
    /// Axis of `bins` bins over `[min, max]`
    ///
    /// A zero-width range (every contribution has the same value) is widened
    /// by a relative `1e-12` on each side so the bins stay distinct.
    pub fn new(min: f64, max: f64, bins: usize) -> Result<Self> {
        if bins == 0 {
            return Err(Error::InvalidParameter(
                "output size must be positive".to_string(),
            ));
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("output range"));
        }
        let (left, right) = if max > min {
            (min, max)
        } else {
            let pad = min.abs().max(1.0) * 1e-12;
            (min - pad, max + pad)
        };
        Ok(Self {
            left,
            width: (right - left) / bins as f64,
            bins,
        })
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn right(&self) -> f64 {
        self.left + self.width * self.bins as f64
    }

    /// Bin midpoints
    pub fn centers(&self) -> Vec<f64> {
        equal_width_centers(self.left, self.right(), self.bins).0
    }

    /// Index of the bin containing `value`, the right edge belonging to the last bin
    #[inline]
    pub fn locate(&self, value: f64) -> usize {
        let pos = ((value - self.left) / self.width).floor();
        pos.max(0.0)
            .to_usize()
            .unwrap_or(self.bins - 1)
            .min(self.bins - 1)
    }

    /// Add `mass` at `value` into `weights` using `method`
    #[inline]
    pub fn deposit(&self, weights: &mut [f64], value: f64, mass: f64, method: Rebinning) {
        match method {
            Rebinning::Histogram => weights[self.locate(value)] += mass,
            Rebinning::Linear => {
                let last = self.bins - 1;
                let t = (value - self.left) / self.width - 0.5;
                if t <= 0.0 {
                    weights[0] += mass;
                } else if t >= last as f64 {
                    weights[last] += mass;
                } else {
                    let lo = t.floor();
                    let frac = t - lo;
                    let i = lo.to_usize().unwrap_or(0).min(last);
                    weights[i] += mass * (1.0 - frac);
                    if i < last {
                        weights[i + 1] += mass * frac;
                    }
                }
            }
        }
    }
}

/// Rebin a distribution onto `bins` equal-width bins over its own support
///
/// Used to coarsen an oversized distribution before further arithmetic.
pub fn resample(dist: &Distribution, bins: usize, method: Rebinning) -> Result<Distribution> {
    dist.ensure_sampled(Side::Only)?;
    let (min, max) = min_max(dist.centers()).ok_or_else(|| Error::UnsampledDistribution {
        operand: Side::Only,
    })?;
    let axis = OutputAxis::new(min, max, bins)?;
    let mut weights = vec![0.0; bins];
    for (c, w) in dist.iter() {
        axis.deposit(&mut weights, c, w, method);
    }
    normalize_weights(&mut weights)?;
    Distribution::from_parts(axis.centers(), weights)
}
