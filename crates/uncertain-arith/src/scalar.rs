//! Arithmetic between a distribution and a constant
//!
//! Only the value axis changes; weights and bin count are kept as they are.
//! Negative factors and reciprocals reverse the order of the centers, which
//! is left as is.

use crate::combine::check_divisor;
use uncertain_core::{Distribution, Error, Result, Side};

fn finite_scalar(k: f64, context: &str) -> Result<f64> {
    if k.is_finite() {
        Ok(k)
    } else {
        Err(Error::InvalidParameter(format!(
            "{context} needs a finite scalar, got {k}"
        )))
    }
}

/// `A + k`
pub fn shift(dist: &Distribution, k: f64) -> Result<Distribution> {
    let k = finite_scalar(k, "shift")?;
    dist.map_centers(|c| c + k)
}

/// `A * k`
pub fn scale(dist: &Distribution, k: f64) -> Result<Distribution> {
    let k = finite_scalar(k, "scale")?;
    dist.map_centers(|c| c * k)
}

/// `-A`
pub fn negate(dist: &Distribution) -> Result<Distribution> {
    dist.map_centers(|c| -c)
}

/// `A / k`, failing for `k == 0`
pub fn divide_by(dist: &Distribution, k: f64) -> Result<Distribution> {
    let k = finite_scalar(k, "division")?;
    if k == 0.0 {
        return Err(Error::InvalidParameter(
            "division of a distribution by scalar zero".to_string(),
        ));
    }
    dist.map_centers(|c| c / k)
}

/// `k - A`
pub fn subtract_from(k: f64, dist: &Distribution) -> Result<Distribution> {
    let k = finite_scalar(k, "subtraction")?;
    dist.map_centers(|c| k - c)
}

/// `k / A`, center by center
///
/// Not an affine map of the centers, so it cannot be expressed through
/// [`scale`]. Fails when the centers of `dist` touch or straddle zero.
pub fn reciprocal(k: f64, dist: &Distribution) -> Result<Distribution> {
    let k = finite_scalar(k, "reciprocal")?;
    dist.ensure_sampled(Side::Only)?;
    check_divisor(dist, Side::Only)?;
    dist.map_centers(|c| k / c)
}
