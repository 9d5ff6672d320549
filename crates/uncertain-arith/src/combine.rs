//! Pairwise combination of two independent distributions
//!
//! Every pair of bins `(i, j)` contributes the value `op(a_i, b_j)` with
//! mass `w_i * w_j`. The contributions are projected onto an equal-width
//! axis spanning their observed range, giving a result of fixed size.
//!
//! The outer index range over the left operand is split into chunks by an
//! [`ExecutionEngine`]. Each chunk first reports its value range, then its
//! own partial histogram; partials are merged by summation.

use crate::ops::BinaryOp;
use crate::rebin::{OutputAxis, Rebinning};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use uncertain_core::utils::normalize_weights;
use uncertain_core::{Distribution, Error, ExecutionEngine, Result, SequentialEngine, Side};

/// Number of output bins of a combination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// `min(|A|, |B|) + 1`
    #[default]
    Auto,
    /// Exactly this many bins
    Fixed(usize),
}

impl OutputSize {
    /// Resolve to a concrete bin count for operands of the given sizes
    pub fn resolve(self, left: usize, right: usize) -> Result<usize> {
        match self {
            OutputSize::Auto => Ok(left.min(right) + 1),
            OutputSize::Fixed(0) => Err(Error::InvalidParameter(
                "output size must be positive".to_string(),
            )),
            OutputSize::Fixed(n) => Ok(n),
        }
    }
}

impl From<usize> for OutputSize {
    fn from(n: usize) -> Self {
        OutputSize::Fixed(n)
    }
}

/// Settings shared by every combination a [`Combiner`] performs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombineConfig {
    pub output_size: OutputSize,
    pub rebinning: Rebinning,
    /// Reject divisors whose centers touch or straddle zero
    pub guard_zero_divisor: bool,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            output_size: OutputSize::Auto,
            rebinning: Rebinning::Histogram,
            guard_zero_divisor: true,
        }
    }
}

impl CombineConfig {
    pub fn with_output_size(mut self, output_size: impl Into<OutputSize>) -> Self {
        self.output_size = output_size.into();
        self
    }

    pub fn with_rebinning(mut self, rebinning: Rebinning) -> Self {
        self.rebinning = rebinning;
        self
    }

    pub fn with_zero_divisor_guard(mut self, enabled: bool) -> Self {
        self.guard_zero_divisor = enabled;
        self
    }
}

/// Fail with [`Error::InvalidParameter`] when `divisor` reaches zero
pub fn check_divisor(divisor: &Distribution, operand: Side) -> Result<()> {
    let (min, max) = divisor
        .support()
        .ok_or(Error::UnsampledDistribution { operand })?;
    if min <= 0.0 && max >= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "divisor support [{min}, {max}] touches or crosses zero"
        )));
    }
    Ok(())
}

/// Binary operator engine
///
/// # Example
///
/// ```rust
/// use uncertain_arith::{BinaryOp, CombineConfig, Combiner};
/// use uncertain_families::uniform;
///
/// let a = uniform(0.0, 1.0, 200).unwrap();
/// let b = uniform(0.0, 1.0, 200).unwrap();
///
/// let combiner = Combiner::new().with_config(CombineConfig::default().with_output_size(101));
/// let sum = combiner.combine(&a, &b, BinaryOp::Add).unwrap();
/// assert_eq!(sum.len(), 101);
/// ```
#[derive(Debug, Clone)]
pub struct Combiner<E: ExecutionEngine = SequentialEngine> {
    engine: E,
    config: CombineConfig,
}

impl Default for Combiner<SequentialEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl Combiner<SequentialEngine> {
    /// Sequential combiner with default settings
    pub fn new() -> Self {
        Self::with_engine(SequentialEngine::new())
    }
}

impl<E: ExecutionEngine> Combiner<E> {
    /// Combiner running on `engine` with default settings
    pub fn with_engine(engine: E) -> Self {
        Self {
            engine,
            config: CombineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CombineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &CombineConfig {
        &self.config
    }

    /// Combine `a` and `b` under `op`, assuming independence
    ///
    /// Fails with [`Error::UnsampledDistribution`] if either operand has no
    /// samples, and with [`Error::Computation`] if a pair produces a
    /// non-finite value. No partial result is ever returned.
    #[instrument(
        skip(self, a, b),
        fields(left = a.len(), right = b.len(), op = %op, strategy = ?self.engine.strategy())
    )]
    pub fn combine(&self, a: &Distribution, b: &Distribution, op: BinaryOp) -> Result<Distribution> {
        a.ensure_sampled(Side::Left)?;
        b.ensure_sampled(Side::Right)?;
        let bins = self.config.output_size.resolve(a.len(), b.len())?;
        if op == BinaryOp::Divide && self.config.guard_zero_divisor {
            check_divisor(b, Side::Right)?;
        }

        let chunk_size = self.engine.chunk_size(a.len());
        let (min, max) = self.value_range(a, b, op, chunk_size)?;
        let axis = OutputAxis::new(min, max, bins)?;
        debug!(min, max, bins, width = axis.width(), "output axis");

        let method = self.config.rebinning;
        let partials = self.engine.map_ranges(a.len(), chunk_size, |rows| {
            let mut partial = vec![0.0; bins];
            for i in rows {
                let (ca, wa) = (a.centers()[i], a.weights()[i]);
                for (cb, wb) in b.iter() {
                    axis.deposit(&mut partial, op.apply(ca, cb), wa * wb, method);
                }
            }
            partial
        });

        let mut weights = vec![0.0; bins];
        for partial in partials {
            for (acc, w) in weights.iter_mut().zip(partial) {
                *acc += w;
            }
        }
        normalize_weights(&mut weights)?;
        Distribution::from_parts(axis.centers(), weights)
    }

    /// Smallest and largest pairwise value
    fn value_range(
        &self,
        a: &Distribution,
        b: &Distribution,
        op: BinaryOp,
        chunk_size: usize,
    ) -> Result<(f64, f64)> {
        let ranges = self.engine.map_ranges(a.len(), chunk_size, |rows| {
            let mut lo = f64::INFINITY;
            let mut hi = f64::NEG_INFINITY;
            let mut finite = true;
            for i in rows {
                let ca = a.centers()[i];
                for &cb in b.centers() {
                    let v = op.apply(ca, cb);
                    finite &= v.is_finite();
                    lo = lo.min(v);
                    hi = hi.max(v);
                }
            }
            (lo, hi, finite)
        });

        let (lo, hi, finite) = ranges.into_iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, true),
            |(lo, hi, finite), (l, h, f)| (lo.min(l), hi.max(h), finite && f),
        );
        if !finite {
            return Err(Error::non_finite(&format!("{op} combination")));
        }
        Ok((lo, hi))
    }
}

/// Combine two distributions into exactly `output_size` bins
pub fn combine(
    a: &Distribution,
    b: &Distribution,
    op: BinaryOp,
    output_size: usize,
) -> Result<Distribution> {
    combine_with(a, b, op, &CombineConfig::default().with_output_size(output_size))
}

/// Combine two distributions with explicit settings on the calling thread
pub fn combine_with(
    a: &Distribution,
    b: &Distribution,
    op: BinaryOp,
    config: &CombineConfig,
) -> Result<Distribution> {
    Combiner::new().with_config(*config).combine(a, b, op)
}
