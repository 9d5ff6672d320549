//! Deterministic analytic constructors for discretized distributions
//!
//! Three families are supported, each partitioning its effective support
//! into equal-width bins with midpoint centers:
//!
//! - **Uniform** ("rect"): constant mass `1/n` per bin
//! - **Truncated normal** ("normal"): Gaussian density at each center,
//!   renormalized over `mean ± max_sigma·std_dev`
//! - **Triangular** ("tri"): linear ramps to a possibly off-center mode
//!
//! Builders are pure: identical parameters and sample counts always give
//! identical arrays.
//!
//! # Examples
//!
//! ```rust
//! use uncertain_families::{triangular, uniform, DEFAULT_SAMPLES};
//!
//! let rect = uniform(6.0, 7.0, DEFAULT_SAMPLES).unwrap();
//! assert_eq!(rect.len(), 1001);
//!
//! let tri = triangular(10.0, 11.0, 13.0, 501).unwrap();
//! assert!((tri.total_mass() - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Configuration-driven construction
//!
//! ```rust
//! use uncertain_families::{construct_tagged, FamilyParams};
//!
//! let params = FamilyParams::default()
//!     .with_mean(1.0)
//!     .with_std_dev(0.01)
//!     .with_max_sigma(5.0);
//! let dist = construct_tagged("gaussian", &params, 2001).unwrap();
//! assert_eq!(dist.len(), 2001);
//! ```

pub mod builders;
pub mod family;
pub mod traits;

pub use builders::{Triangular, TruncatedNormal, Uniform};
pub use family::{construct, construct_tagged, Family, FamilyParams, FamilySpec};
pub use traits::DistributionBuilder;
pub use uncertain_core::{Distribution, Error, Result, DEFAULT_SAMPLES};

/// Uniform distribution on `[left, right]` with `samples` bins
pub fn uniform(left: f64, right: f64, samples: usize) -> Result<Distribution> {
    Uniform::new(left, right)?.build(samples)
}

/// Gaussian truncated at `mean ± max_sigma·std_dev` with `samples` bins
pub fn normal(mean: f64, std_dev: f64, max_sigma: f64, samples: usize) -> Result<Distribution> {
    TruncatedNormal::new(mean, std_dev, max_sigma)?.build(samples)
}

/// Triangular distribution on `[left, right]` peaking at `mode`
pub fn triangular(left: f64, mode: f64, right: f64, samples: usize) -> Result<Distribution> {
    Triangular::new(left, mode, right)?.build(samples)
}
