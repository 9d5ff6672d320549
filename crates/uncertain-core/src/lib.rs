//! Core types for discretized uncertainty distributions
//!
//! This crate provides the foundation shared by the uncertain-* crates:
//!
//! - [`Distribution`]: an immutable set of `(center, weight)` bins whose
//!   weights sum to one
//! - [`Error`] / [`Result`]: the unified error type
//! - [`execution`]: sequential and (feature `parallel`) Rayon engines used
//!   by the arithmetic kernels
//!
//! # Example
//!
//! ```rust
//! use uncertain_core::Distribution;
//!
//! let dist = Distribution::from_parts(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 1.0]).unwrap();
//! assert_eq!(dist.len(), 3);
//! assert!((dist.total_mass() - 1.0).abs() < 1e-12);
//! ```

pub mod distribution;
pub mod error;
pub mod execution;
pub mod utils;

// Re-export core types
pub use distribution::{Distribution, RawDistribution};
pub use error::{Error, Result, Side};

pub use execution::{sequential, ExecutionEngine, ExecutionStrategy, SequentialEngine};
#[cfg(feature = "parallel")]
pub use execution::{parallel, ParallelEngine};

/// Default number of bins for analytically constructed distributions
pub const DEFAULT_SAMPLES: usize = 1001;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Distribution, Error, ExecutionEngine, ExecutionStrategy, Result, SequentialEngine, Side,
        DEFAULT_SAMPLES,
    };

    #[cfg(feature = "parallel")]
    pub use crate::ParallelEngine;
}
