//! Black-Scholes closed-form prices for European options.
//!
//! Used as the reference oracle for Monte Carlo estimates.
//!
//! ## Mathematical Formulas
//!
//! With `s = +1` for a call and `s = -1` for a put:
//!
//! **Price**: V = s·S·N(s·d₁) - s·e^(-rT)·K·N(s·d₂)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::traits::Float;
use pricer_core::types::PricingError;

use super::distributions::norm_cdf;
use crate::instruments::OptionType;

/// Closed-form Black-Scholes price of one European option.
///
/// A pure function of (option type, spot, volatility, strike, rate, term),
/// validated once at construction.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholesAnalytical;
/// use pricer_models::instruments::OptionType;
///
/// let call = BlackScholesAnalytical::new(OptionType::Call, 100.0_f64, 0.2, 100.0, 0.05, 1.0).unwrap();
/// let put = BlackScholesAnalytical::new(OptionType::Put, 100.0_f64, 0.2, 100.0, 0.05, 1.0).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call.calculate() - put.calculate() - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholesAnalytical<T: Float> {
    option_type: OptionType,
    /// Spot price (S)
    spot: T,
    /// Volatility (σ)
    volatility: T,
    /// Strike price (K)
    strike: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Time to expiry in years (T)
    term: T,
}

impl<T: Float> BlackScholesAnalytical<T> {
    /// Creates a validated reference pricer.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` if spot, volatility, strike or
    /// term is not strictly positive and finite, or if the rate is not finite.
    /// Zero volatility or term would divide by zero in d₁.
    pub fn new(
        option_type: OptionType,
        spot: T,
        volatility: T,
        strike: T,
        rate: T,
        term: T,
    ) -> Result<Self, PricingError> {
        ensure_positive("spot", spot)?;
        ensure_positive("volatility", volatility)?;
        ensure_positive("strike", strike)?;
        ensure_positive("term", term)?;
        if !rate.is_finite() {
            return Err(PricingError::invalid_parameter(
                "rate",
                format!("must be finite, got {}", rate.to_f64().unwrap_or(f64::NAN)),
            ));
        }

        Ok(Self {
            option_type,
            spot,
            volatility,
            strike,
            rate,
            term,
        })
    }

    /// Option side.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Computes the d1 term.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
    #[inline]
    pub fn d1(&self) -> T {
        let half = T::from(0.5).unwrap();
        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.rate + half * self.volatility * self.volatility) * self.term;
        (log_moneyness + drift) / (self.volatility * self.term.sqrt())
    }

    /// Computes the d2 term.
    ///
    /// d₂ = d₁ - σ√T
    #[inline]
    pub fn d2(&self) -> T {
        self.d1() - self.volatility * self.term.sqrt()
    }

    /// Present value of the option.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholesAnalytical;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let call = BlackScholesAnalytical::new(OptionType::Call, 100.0_f64, 0.2, 110.0, 0.01, 0.5).unwrap();
    /// assert!((call.calculate() - 2.3394).abs() < 1e-3);
    /// ```
    pub fn calculate(&self) -> T {
        let sign = T::from(self.option_type.sign()).unwrap();
        let discount = (-self.rate * self.term).exp();
        sign * self.spot * norm_cdf(sign * self.d1())
            - sign * discount * self.strike * norm_cdf(sign * self.d2())
    }
}

fn ensure_positive<T: Float>(name: &'static str, value: T) -> Result<(), PricingError> {
    if value.is_finite() && value > T::zero() {
        Ok(())
    } else {
        Err(PricingError::invalid_parameter(
            name,
            format!(
                "must be positive and finite, got {}",
                value.to_f64().unwrap_or(f64::NAN)
            ),
        ))
    }
}
