//! European payoff definitions.
//!
//! This module provides the option side ([`OptionType`]) and the immutable
//! parameter bundle ([`PayoffParams`]) shared by the Monte Carlo path
//! evaluator and the analytical reference pricer.

use std::fmt;
use std::str::FromStr;

use pricer_core::types::PricingError;

/// Side of a European option.
///
/// # Variants
/// - `Call`: pays when the terminal price exceeds the strike, sign `+1`
/// - `Put`: pays when the terminal price falls below the strike, sign `-1`
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert_eq!(OptionType::Call.sign(), 1.0);
/// assert_eq!(OptionType::Put.sign(), -1.0);
/// assert_eq!("put".parse::<OptionType>().unwrap(), OptionType::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Both sides, in reporting order (put first).
    pub const ALL: [OptionType; 2] = [OptionType::Put, OptionType::Call];

    /// Payoff sign: `+1` for calls, `-1` for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Recovers the option side from a `+1`/`-1` sign.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` for any other value.
    pub fn from_sign(sign: f64) -> Result<Self, PricingError> {
        if sign == 1.0 {
            Ok(OptionType::Call)
        } else if sign == -1.0 {
            Ok(OptionType::Put)
        } else {
            Err(PricingError::invalid_parameter(
                "sign",
                format!("must be +1 (call) or -1 (put), got {}", sign),
            ))
        }
    }

    /// Lowercase name of the side.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::invalid_parameter(
                "option_type",
                format!("unknown option type '{}', expected call or put", other),
            )),
        }
    }
}

/// European payoff parameters.
///
/// Immutable once constructed; the payoff is
/// `max(sign * (terminal - strike), 0)`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{OptionType, PayoffParams};
///
/// let call = PayoffParams::call(110.0).unwrap();
/// assert_eq!(call.option_type(), OptionType::Call);
/// assert_eq!(call.intrinsic(120.0), 10.0);
/// assert_eq!(call.intrinsic(100.0), 0.0);
///
/// assert!(PayoffParams::put(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayoffParams {
    option_type: OptionType,
    strike: f64,
}

impl PayoffParams {
    /// Creates validated payoff parameters.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` if the strike is negative
    /// or not finite.
    pub fn new(option_type: OptionType, strike: f64) -> Result<Self, PricingError> {
        if !strike.is_finite() || strike < 0.0 {
            return Err(PricingError::invalid_parameter(
                "strike",
                format!("must be finite and non-negative, got {}", strike),
            ));
        }
        Ok(Self {
            option_type,
            strike,
        })
    }

    /// Call payoff with the given strike.
    pub fn call(strike: f64) -> Result<Self, PricingError> {
        Self::new(OptionType::Call, strike)
    }

    /// Put payoff with the given strike.
    pub fn put(strike: f64) -> Result<Self, PricingError> {
        Self::new(OptionType::Put, strike)
    }

    /// Option side.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Payoff realised at terminal price `spot`.
    #[inline]
    pub fn intrinsic(&self, spot: f64) -> f64 {
        (self.option_type.sign() * (spot - self.strike)).max(0.0)
    }
}
