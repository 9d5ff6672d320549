//! Family tags and parameter records at the configuration boundary
//!
//! Collaborators describe input uncertainties either as a typed
//! [`FamilySpec`] or as a tag plus a loose [`FamilyParams`] record in which
//! any field may be absent. Both routes end in the same builders.

use crate::builders::{Triangular, TruncatedNormal, Uniform};
use crate::traits::DistributionBuilder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uncertain_core::{Distribution, Error, Result};

/// Analytic distribution family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Truncated Gaussian
    Normal,
    /// Uniform
    Rect,
    /// Triangular, possibly asymmetric
    Tri,
}

impl Family {
    /// Canonical tag of this family
    pub fn name(&self) -> &'static str {
        match self {
            Family::Normal => "normal",
            Family::Rect => "rect",
            Family::Tri => "tri",
        }
    }

    /// Divisor turning a half-width into a standard uncertainty
    ///
    /// Type-B evaluation: a rectangular half-width `a` has standard
    /// uncertainty `a/√3`, a symmetric triangular one `a/√6`, and a normal
    /// half-width quoted at three sigma `a/3`.
    pub fn half_width_divisor(&self) -> f64 {
        match self {
            Family::Normal => 3.0,
            Family::Rect => 3.0_f64.sqrt(),
            Family::Tri => 6.0_f64.sqrt(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "gaussian" => Ok(Family::Normal),
            "rect" | "rectangular" | "uniform" => Ok(Family::Rect),
            "tri" | "triangular" => Ok(Family::Tri),
            _ => Err(Error::UnimplementedFamily(s.to_string())),
        }
    }
}

/// Loosely specified family parameters
///
/// Every field is optional; `None` and NaN both mean "not provided" and
/// surface as [`Error::MissingParameter`] when the family needs the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyParams {
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub max_sigma: Option<f64>,
    pub left: Option<f64>,
    pub mode: Option<f64>,
    pub right: Option<f64>,
}

impl FamilyParams {
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    pub fn with_std_dev(mut self, std_dev: f64) -> Self {
        self.std_dev = Some(std_dev);
        self
    }

    pub fn with_max_sigma(mut self, max_sigma: f64) -> Self {
        self.max_sigma = Some(max_sigma);
        self
    }

    pub fn with_left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }

    pub fn with_mode(mut self, mode: f64) -> Self {
        self.mode = Some(mode);
        self
    }

    pub fn with_right(mut self, right: f64) -> Self {
        self.right = Some(right);
        self
    }
}

/// Fully specified analytic family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
pub enum FamilySpec {
    /// Gaussian truncated at `mean ± max_sigma * std_dev`
    #[serde(alias = "gaussian")]
    Normal {
        mean: f64,
        std_dev: f64,
        max_sigma: f64,
    },
    /// Uniform on `[left, right]`
    #[serde(alias = "uniform", alias = "rectangular")]
    Rect { left: f64, right: f64 },
    /// Triangular on `[left, right]` peaking at `mode`
    #[serde(alias = "triangular")]
    Tri { left: f64, mode: f64, right: f64 },
}

impl FamilySpec {
    /// Assemble a spec from a family and a loose parameter record
    pub fn from_params(family: Family, params: &FamilyParams) -> Result<Self> {
        let get = |parameter: &'static str, value: Option<f64>| -> Result<f64> {
            match value {
                Some(v) if !v.is_nan() => Ok(v),
                _ => Err(Error::MissingParameter {
                    family: family.name(),
                    parameter,
                }),
            }
        };
        Ok(match family {
            Family::Normal => FamilySpec::Normal {
                mean: get("mean", params.mean)?,
                std_dev: get("std_dev", params.std_dev)?,
                max_sigma: get("max_sigma", params.max_sigma)?,
            },
            Family::Rect => FamilySpec::Rect {
                left: get("left", params.left)?,
                right: get("right", params.right)?,
            },
            Family::Tri => FamilySpec::Tri {
                left: get("left", params.left)?,
                mode: get("mode", params.mode)?,
                right: get("right", params.right)?,
            },
        })
    }

    /// Family of this spec
    pub fn family(&self) -> Family {
        match self {
            FamilySpec::Normal { .. } => Family::Normal,
            FamilySpec::Rect { .. } => Family::Rect,
            FamilySpec::Tri { .. } => Family::Tri,
        }
    }

    /// Validated builder for this spec
    pub fn builder(&self) -> Result<Box<dyn DistributionBuilder>> {
        let builder: Box<dyn DistributionBuilder> = match *self {
            FamilySpec::Normal {
                mean,
                std_dev,
                max_sigma,
            } => Box::new(TruncatedNormal::new(mean, std_dev, max_sigma)?),
            FamilySpec::Rect { left, right } => Box::new(Uniform::new(left, right)?),
            FamilySpec::Tri { left, mode, right } => {
                Box::new(Triangular::new(left, mode, right)?)
            }
        };
        Ok(builder)
    }

    /// Discretize into `samples` bins
    pub fn build(&self, samples: usize) -> Result<Distribution> {
        self.builder()?.build(samples)
    }

    /// Mean of the continuous family
    pub fn analytic_mean(&self) -> Result<f64> {
        Ok(self.builder()?.analytic_mean())
    }

    /// Standard deviation of the continuous family over its effective support
    pub fn analytic_std_dev(&self) -> Result<f64> {
        Ok(self.builder()?.analytic_std_dev())
    }
}

/// Construct a distribution from a family, loose parameters and a sample count
pub fn construct(family: Family, params: &FamilyParams, samples: usize) -> Result<Distribution> {
    FamilySpec::from_params(family, params)?.build(samples)
}

/// Construct a distribution from a textual family tag
///
/// Unknown tags fail with [`Error::UnimplementedFamily`].
pub fn construct_tagged(tag: &str, params: &FamilyParams, samples: usize) -> Result<Distribution> {
    construct(tag.parse()?, params, samples)
}
