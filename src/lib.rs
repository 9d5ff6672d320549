//! Deterministic propagation of measurement uncertainty
//!
//! Input uncertainties (tolerances, calibration errors, drifts) are modeled
//! as discretized distributions: finite sets of bin centers with
//! probability weights. Arithmetic on the physical quantities maps to
//! arithmetic on their distributions, giving the distribution of a derived
//! quantity without Monte-Carlo sampling.
//!
//! This crate re-exports the workspace members:
//!
//! - [`core`]: the [`Distribution`] type, errors and execution engines
//! - [`families`]: uniform, truncated normal and triangular constructors
//! - [`arith`]: pairwise combination, rebinning and scalar transforms
//! - [`stats`]: quantiles, moments and coverage intervals
//!
//! # Example
//!
//! ```rust
//! use uncertain_dist::prelude::*;
//!
//! // I = U / R with a noisy voltage and a 0.5% resistor
//! let voltage = shift(&normal(0.0, 0.01, 5.0, 1001)?, 10.0)?;
//! let resistance = uniform(0.995, 1.005, 1001)?;
//! let current = divide(&voltage, &resistance)?;
//!
//! let ci = coverage_interval(&current, 0.95)?;
//! assert!(ci.contains(10.0));
//! # Ok::<(), uncertain_dist::Error>(())
//! ```

pub use uncertain_arith as arith;
pub use uncertain_core as core;
pub use uncertain_families as families;
pub use uncertain_stats as stats;

pub use uncertain_arith::{
    add, combine, combine_with, divide, multiply, product_all, scale, shift, subtract, sum_all,
    BinaryOp, CombineConfig, Combiner, Operand, OutputSize, Rebinning,
};
pub use uncertain_core::{Distribution, Error, Result, Side, DEFAULT_SAMPLES};
pub use uncertain_families::{
    construct, construct_tagged, normal, triangular, uniform, Family, FamilyParams, FamilySpec,
};
pub use uncertain_stats::{
    coverage_interval, mean_and_std_dev, moments, quantile, quantiles, CoverageInterval, Moments,
    QuantileMethod,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use uncertain_arith::prelude::*;
    pub use uncertain_arith::{product_all, reciprocal, sum_all};
    pub use uncertain_core::prelude::*;
    pub use uncertain_families::{
        construct, construct_tagged, normal, triangular, uniform, DistributionBuilder, Family,
        FamilyParams, FamilySpec,
    };
    pub use uncertain_stats::{
        cdf, coverage_interval, mean, mean_and_std_dev, median, mode, moments, quantile,
        quantile_with, quantiles, CoverageInterval, Moments, QuantileMethod,
    };
}
