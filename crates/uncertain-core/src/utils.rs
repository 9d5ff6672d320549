//! Utility functions for working with center and weight slices

use crate::{Error, Result};

/// Scale weights in place so that they sum to one
///
/// Negative weights are not possible in a distribution and are clamped to
/// zero before the sum is taken.
///
/// # Examples
///
/// ```rust
/// use uncertain_core::utils::normalize_weights;
///
/// let mut w = vec![1.0, 3.0, -0.5];
/// normalize_weights(&mut w).unwrap();
/// assert_eq!(w, vec![0.25, 0.75, 0.0]);
/// ```
pub fn normalize_weights(weights: &mut [f64]) -> Result<()> {
    for w in weights.iter_mut() {
        if *w < 0.0 {
            *w = 0.0;
        }
    }
    let total: f64 = weights.iter().sum();
    if !total.is_finite() {
        return Err(Error::non_finite("weights"));
    }
    if total <= 0.0 {
        return Err(Error::InvalidInput(
            "weights must carry positive total mass".to_string(),
        ));
    }
    let scale = 1.0 / total;
    for w in weights.iter_mut() {
        *w *= scale;
    }
    Ok(())
}

/// Minimum and maximum of a slice, `None` when empty
///
/// # Examples
///
/// ```rust
/// use uncertain_core::utils::min_max;
///
/// assert_eq!(min_max(&[3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
/// assert_eq!(min_max(&[]), None);
/// ```
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Check whether a slice is sorted in non-decreasing order
pub fn is_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Midpoints of `n` equal-width bins partitioning `[left, right]`
///
/// Returns the centers together with the bin width. Centers are computed
/// from the bin index rather than accumulated, so the last center sits
/// exactly half a width below `right` up to rounding.
pub fn equal_width_centers(left: f64, right: f64, n: usize) -> (Vec<f64>, f64) {
    let width = (right - left) / n as f64;
    let centers = (0..n)
        .map(|i| left + (i as f64 + 0.5) * width)
        .collect();
    (centers, width)
}
