//! European payoff evaluation.
//!
//! The payoff depends on the terminal point of the path only:
//! `max(sign * (terminal - strike), 0)`.

use pricer_core::traits::PathEvaluator;
use pricer_core::types::{Path, PricingError};
use pricer_models::instruments::{OptionType, PayoffParams};

/// Path evaluator for a European call or put.
///
/// # Examples
///
/// ```rust
/// use pricer_core::traits::PathEvaluator;
/// use pricer_core::types::{Path, Point};
/// use pricer_pricing::payoff::EuropeanPathEvaluator;
///
/// let call = EuropeanPathEvaluator::call(100.0).unwrap();
/// let path = Path::new(vec![Point::new(0.5, 98.0), Point::new(1.0, 112.5)]);
/// assert_eq!(call.evaluate(&path).unwrap(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EuropeanPathEvaluator {
    params: PayoffParams,
}

impl EuropeanPathEvaluator {
    /// Creates an evaluator from validated payoff parameters.
    pub fn new(params: PayoffParams) -> Self {
        Self { params }
    }

    /// Call evaluator with the given strike.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` for a negative or non-finite strike.
    pub fn call(strike: f64) -> Result<Self, PricingError> {
        PayoffParams::call(strike).map(Self::new)
    }

    /// Put evaluator with the given strike.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` for a negative or non-finite strike.
    pub fn put(strike: f64) -> Result<Self, PricingError> {
        PayoffParams::put(strike).map(Self::new)
    }

    /// Payoff parameters.
    #[inline]
    pub fn params(&self) -> &PayoffParams {
        &self.params
    }

    /// Option side.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.params.option_type()
    }
}

impl PathEvaluator for EuropeanPathEvaluator {
    fn evaluate(&self, path: &Path) -> Result<f64, PricingError> {
        path.terminal()
            .map(|point| self.params.intrinsic(point.spot()))
            .ok_or(PricingError::EmptyPath)
    }
}
