//! Operator dispatch over distributions and scalars
//!
//! Each operand is either a distribution or a plain number. Distribution
//! pairs go through the pairwise engine; a distribution paired with a
//! scalar goes through the exact scalar transforms.

use crate::combine::Combiner;
use crate::ops::BinaryOp;
use crate::scalar;
use uncertain_core::{Distribution, Error, ExecutionEngine, Result, Side};

/// One side of an arithmetic expression
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Dist(&'a Distribution),
    Scalar(f64),
}

impl<'a> From<&'a Distribution> for Operand<'a> {
    fn from(dist: &'a Distribution) -> Self {
        Operand::Dist(dist)
    }
}

impl From<f64> for Operand<'_> {
    fn from(k: f64) -> Self {
        Operand::Scalar(k)
    }
}

impl<E: ExecutionEngine> Combiner<E> {
    /// Evaluate `lhs op rhs`
    ///
    /// Two scalars are rejected with [`Error::UnsupportedOperandType`]: the
    /// result would not be a distribution.
    pub fn apply(&self, lhs: Operand<'_>, op: BinaryOp, rhs: Operand<'_>) -> Result<Distribution> {
        match (lhs, rhs) {
            (Operand::Dist(a), Operand::Dist(b)) => self.combine(a, b, op),
            (Operand::Dist(a), Operand::Scalar(k)) => {
                a.ensure_sampled(Side::Left)?;
                match op {
                    BinaryOp::Add => scalar::shift(a, k),
                    BinaryOp::Subtract => scalar::shift(a, -k),
                    BinaryOp::Multiply => scalar::scale(a, k),
                    BinaryOp::Divide => scalar::divide_by(a, k),
                }
            }
            (Operand::Scalar(k), Operand::Dist(b)) => {
                b.ensure_sampled(Side::Right)?;
                match op {
                    BinaryOp::Add => scalar::shift(b, k),
                    BinaryOp::Subtract => scalar::subtract_from(k, b),
                    BinaryOp::Multiply => scalar::scale(b, k),
                    BinaryOp::Divide if self.config().guard_zero_divisor => scalar::reciprocal(k, b),
                    BinaryOp::Divide => b.map_centers(|c| k / c),
                }
            }
            (Operand::Scalar(x), Operand::Scalar(y)) => Err(Error::UnsupportedOperandType(format!(
                "{x} {op} {y} has two scalar operands, at least one distribution is required"
            ))),
        }
    }

    /// Fold `op` over `dists` from the left
    ///
    /// An empty slice is rejected; a single distribution is returned as is.
    pub fn fold(&self, dists: &[Distribution], op: BinaryOp) -> Result<Distribution> {
        let (first, rest) = dists.split_first().ok_or_else(|| {
            Error::InvalidInput(format!("cannot fold {op} over an empty list"))
        })?;
        first.ensure_sampled(Side::Left)?;
        rest.iter()
            .try_fold(first.clone(), |acc, next| self.combine(&acc, next, op))
    }
}

/// `lhs + rhs`
pub fn add<'a>(lhs: impl Into<Operand<'a>>, rhs: impl Into<Operand<'a>>) -> Result<Distribution> {
    Combiner::new().apply(lhs.into(), BinaryOp::Add, rhs.into())
}

/// `lhs - rhs`
pub fn subtract<'a>(
    lhs: impl Into<Operand<'a>>,
    rhs: impl Into<Operand<'a>>,
) -> Result<Distribution> {
    Combiner::new().apply(lhs.into(), BinaryOp::Subtract, rhs.into())
}

/// `lhs * rhs`
pub fn multiply<'a>(
    lhs: impl Into<Operand<'a>>,
    rhs: impl Into<Operand<'a>>,
) -> Result<Distribution> {
    Combiner::new().apply(lhs.into(), BinaryOp::Multiply, rhs.into())
}

/// `lhs / rhs`
pub fn divide<'a>(
    lhs: impl Into<Operand<'a>>,
    rhs: impl Into<Operand<'a>>,
) -> Result<Distribution> {
    Combiner::new().apply(lhs.into(), BinaryOp::Divide, rhs.into())
}

/// Sum of all distributions, combined left to right
pub fn sum_all(dists: &[Distribution]) -> Result<Distribution> {
    Combiner::new().fold(dists, BinaryOp::Add)
}

/// Product of all distributions, combined left to right
pub fn product_all(dists: &[Distribution]) -> Result<Distribution> {
    Combiner::new().fold(dists, BinaryOp::Multiply)
}
