//! Error types for uncertainty propagation
//!
//! Provides a unified error type for all uncertain-* crates.

use std::fmt;
use thiserror::Error;

/// Which operand of an operation was at fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left-hand operand of a binary operation
    Left,
    /// Right-hand operand of a binary operation
    Right,
    /// Sole operand of a unary operation or query
    Only,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
            Side::Only => f.write_str("input"),
        }
    }
}

/// Core error type for distribution construction, arithmetic and queries
#[derive(Error, Debug)]
pub enum Error {
    /// A required family parameter is absent or NaN
    #[error("Missing parameter: {family} distribution needs {parameter}")]
    MissingParameter {
        family: &'static str,
        parameter: &'static str,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// An operation received a distribution without samples
    #[error("Cannot operate on unsampled distribution ({operand} operand)")]
    UnsampledDistribution { operand: Side },

    /// Arithmetic attempted with operands that do not form a distribution operation
    #[error("Unsupported operand type: {0}")]
    UnsupportedOperandType(String),

    /// Unknown distribution family tag
    #[error("Unimplemented distribution family: {0}")]
    UnimplementedFamily(String),

    /// Invalid raw input arrays
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Threading or parallelization error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a probability outside [0, 1]
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidParameter(format!("Probability {p} must be in [0, 1]"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Check if probability is valid
    pub fn check_probability(p: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_probability(p));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingParameter {
            family: "normal",
            parameter: "stdDev",
        };
        assert_eq!(
            err.to_string(),
            "Missing parameter: normal distribution needs stdDev"
        );

        let err = Error::InvalidParameter("right must exceed left".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: right must exceed left");

        let err = Error::UnsampledDistribution {
            operand: Side::Right,
        };
        assert_eq!(
            err.to_string(),
            "Cannot operate on unsampled distribution (right operand)"
        );

        let err = Error::UnimplementedFamily("uShaped".to_string());
        assert_eq!(
            err.to_string(),
            "Unimplemented distribution family: uShaped"
        );

        let err = Error::UnsupportedOperandType("scalar with scalar".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported operand type: scalar with scalar"
        );
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::invalid_probability(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid parameter: Probability 1.5 must be in [0, 1]"
        );

        let err = Error::size_mismatch(100, 50, "weights");
        assert_eq!(
            err.to_string(),
            "Invalid input: Size mismatch in weights: expected 100, got 50"
        );

        let err = Error::non_finite("centers");
        assert_eq!(
            err.to_string(),
            "Computation error: centers contains NaN or infinite values"
        );

        assert!(Error::check_probability(0.0).is_ok());
        assert!(Error::check_probability(1.0).is_ok());
        assert!(Error::check_probability(-0.1).is_err());
        assert!(Error::check_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("custom error message").into();
        match err {
            Error::Other(_) => assert!(err.to_string().contains("custom error message")),
            _ => panic!("Wrong error type"),
        }
    }
}
