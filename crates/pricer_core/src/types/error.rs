//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and simulation

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidParameter`: A model, payoff or engine parameter outside its
///   mathematically valid domain. Raised before any simulation work starts.
/// - `EmptyPath`: A path evaluator received a path with no points. This is a
///   contract violation between generator and evaluator, not a recoverable
///   runtime condition.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_parameter("num_paths", "number of paths must be greater than zero");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'num_paths': number of paths must be greater than zero"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the constraint that was violated.
        reason: String,
    },

    /// Path evaluator received a path with zero points.
    #[error("Empty path: evaluator received a path with no points")]
    EmptyPath,
}

impl PricingError {
    /// Creates an `InvalidParameter` error.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Returns `true` for errors that indicate a programming-logic fault
    /// rather than bad user input.
    #[inline]
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::EmptyPath)
    }
}
