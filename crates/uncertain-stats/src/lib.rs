//! Statistics of discretized distributions
//!
//! - [`quantile`] / [`quantiles`]: step inverse-CDF, optionally linear
//! - [`mean_and_std_dev`] and [`moments`]: weighted moments
//! - [`coverage_interval`]: central interval with relative deviations
//! - [`cdf`] and [`mode`]
//!
//! # Example
//!
//! ```rust
//! use uncertain_families::normal;
//! use uncertain_stats::{coverage_interval, mean_and_std_dev};
//!
//! let dist = normal(10.0, 0.1, 5.0, 2001).unwrap();
//! let (mean, std_dev) = mean_and_std_dev(&dist).unwrap();
//! assert!((mean - 10.0).abs() < 1e-9);
//! assert!((std_dev - 0.1).abs() < 1e-3);
//!
//! let ci = coverage_interval(&dist, 0.95).unwrap();
//! println!("{ci}");
//! ```

pub mod interval;
pub mod moments;
pub mod quantile;

pub use interval::{coverage_interval, coverage_interval_with, CoverageInterval};
pub use moments::{mean, mean_and_std_dev, moments, Moments};
pub use quantile::{
    cdf, median, mode, quantile, quantile_with, quantiles, quantiles_with, QuantileMethod,
};
pub use uncertain_core::{Distribution, Error, Result};
