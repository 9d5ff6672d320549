//! Arithmetic on discretized distributions
//!
//! Two independent distributions are combined by evaluating the operator on
//! every pair of bins and projecting the `|A|·|B|` weighted results back
//! onto a fixed number of equal-width bins. Arithmetic with a constant only
//! moves the centers and is exact.
//!
//! # Key Features
//!
//! - **Pairwise engine**: [`Combiner`] with add, subtract, multiply and divide
//! - **Rebinning**: histogram (floor) or linear split between neighbouring bins
//! - **Scalar transforms**: [`shift`], [`scale`], [`reciprocal`] and friends
//! - **Operand dispatch**: [`add`], [`subtract`], [`multiply`], [`divide`]
//!   accept any mix of distributions and scalars
//! - **Parallel execution**: enable the `parallel` feature and pass a
//!   `ParallelEngine` to [`Combiner::with_engine`]
//!
//! # Example
//!
//! ```rust
//! use uncertain_arith::{add, multiply};
//! use uncertain_families::{normal, uniform};
//!
//! let current = normal(1.0, 0.005, 5.0, 501).unwrap();
//! let resistance = uniform(9.95, 10.05, 501).unwrap();
//!
//! let voltage = multiply(&current, &resistance).unwrap();
//! let with_offset = add(&voltage, 0.01).unwrap();
//! assert_eq!(with_offset.len(), 502);
//! ```

pub mod combine;
pub mod operand;
pub mod ops;
pub mod rebin;
pub mod scalar;

pub use combine::{check_divisor, combine, combine_with, CombineConfig, Combiner, OutputSize};
pub use operand::{add, divide, multiply, product_all, subtract, sum_all, Operand};
pub use ops::BinaryOp;
pub use rebin::{resample, OutputAxis, Rebinning};
pub use scalar::{divide_by, negate, reciprocal, scale, shift, subtract_from};
pub use uncertain_core::{Distribution, Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        add, combine, divide, multiply, shift, scale, subtract, BinaryOp, CombineConfig,
        Combiner, Operand, OutputSize, Rebinning,
    };
}
