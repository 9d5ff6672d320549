//! Core traits for analytic distribution construction

use crate::family::Family;
use uncertain_core::{Distribution, Result};

/// Trait for analytic families that can be discretized onto equal-width bins
///
/// Implementations are pure: the same parameters and sample count always
/// produce the same centers and weights.
pub trait DistributionBuilder {
    /// The family this builder belongs to
    fn family(&self) -> Family;

    /// Discretize into exactly `samples` bins
    fn build(&self, samples: usize) -> Result<Distribution>;

    /// Effective support `(left, right)` partitioned by [`build`](Self::build)
    fn support(&self) -> (f64, f64);

    /// Mean of the continuous distribution over its effective support
    fn analytic_mean(&self) -> f64;

    /// Standard deviation of the continuous distribution over its effective support
    fn analytic_std_dev(&self) -> f64;
}
