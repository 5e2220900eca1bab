//! Geometric Brownian Motion (GBM) path generation.
//!
//! GBM is the fundamental model for asset price dynamics, described by:
//! ```text
//! dS = r * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - r = risk-free rate (risk-neutral drift)
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Euler-Maruyama discretisation
//!
//! Paths are stepped with the explicit scheme:
//! ```text
//! S(t+dt) = S(t) + r*S(t)*dt + sigma*S(t)*sqrt(dt)*Z,   Z ~ N(0, 1)
//! ```
//! The drift uses the risk-free rate, so the mean payoff over many paths
//! approximates the risk-neutral expectation.

use pricer_core::traits::PathGenerator;
use pricer_core::types::{Path, Point, PricingError};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// GBM model parameters.
///
/// Defaults describe a six-month contract on a spot of 100 with 20%
/// volatility, a 1% rate and 100 steps.
///
/// # Examples
/// ```
/// use pricer_models::models::GbmParams;
///
/// let params = GbmParams {
///     num_steps: 1,
///     ..GbmParams::default()
/// };
/// assert!(params.validate().is_ok());
/// assert_eq!(params.dt(), 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price
    pub spot: f64,
    /// Volatility (annualised)
    pub volatility: f64,
    /// Risk-free rate (annualised)
    pub rate: f64,
    /// Time horizon in years
    pub horizon: f64,
    /// Number of discretisation steps
    pub num_steps: usize,
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            volatility: 0.2,
            rate: 0.01,
            horizon: 0.5,
            num_steps: 100,
        }
    }
}

impl GbmParams {
    /// Create new GBM parameters with validation.
    ///
    /// # Errors
    /// See [`validate`](Self::validate).
    pub fn new(
        spot: f64,
        volatility: f64,
        rate: f64,
        horizon: f64,
        num_steps: usize,
    ) -> Result<Self, PricingError> {
        let params = Self {
            spot,
            volatility,
            rate,
            horizon,
            num_steps,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks the parameters describe a well-defined simulation.
    ///
    /// Zero volatility is accepted: the path is then deterministic.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if:
    /// - `num_steps` is 0
    /// - `horizon` is not positive and finite
    /// - `spot` is not positive and finite
    /// - `volatility` is negative or not finite
    /// - `rate` is not finite
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.num_steps == 0 {
            return Err(PricingError::invalid_parameter(
                "num_steps",
                "number of steps must be greater than zero",
            ));
        }
        if !(self.horizon.is_finite() && self.horizon > 0.0) {
            return Err(PricingError::invalid_parameter(
                "horizon",
                format!("must be positive and finite, got {}", self.horizon),
            ));
        }
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(PricingError::invalid_parameter(
                "spot",
                format!("must be positive and finite, got {}", self.spot),
            ));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(PricingError::invalid_parameter(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }
        if !self.rate.is_finite() {
            return Err(PricingError::invalid_parameter(
                "rate",
                format!("must be finite, got {}", self.rate),
            ));
        }
        Ok(())
    }

    /// Step size `horizon / num_steps`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.horizon / self.num_steps as f64
    }
}

/// Euler-Maruyama GBM path generator.
///
/// Holds validated, read-only parameters. Every call to
/// [`generate`](PathGenerator::generate) draws fresh normals from the
/// supplied random source, so one generator can be shared freely across
/// threads.
///
/// # Examples
/// ```
/// use pricer_core::traits::PathGenerator;
/// use pricer_models::models::{GbmParams, GbmPathGenerator};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let generator = GbmPathGenerator::new(GbmParams::default()).unwrap();
/// let path = generator.generate(&mut StdRng::seed_from_u64(42));
///
/// assert_eq!(path.len(), 100);
/// assert!((path.terminal().unwrap().time() - 0.5).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct GbmPathGenerator {
    params: GbmParams,
    dt: f64,
    sqrt_dt: f64,
}

impl GbmPathGenerator {
    /// Creates a generator from validated parameters.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidParameter` if `params` fails
    /// [`GbmParams::validate`].
    pub fn new(params: GbmParams) -> Result<Self, PricingError> {
        params.validate()?;
        let dt = params.dt();
        Ok(Self {
            params,
            dt,
            sqrt_dt: dt.sqrt(),
        })
    }

    /// Model parameters.
    #[inline]
    pub fn params(&self) -> &GbmParams {
        &self.params
    }

    /// Step size in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }
}

impl PathGenerator for GbmPathGenerator {
    #[inline]
    fn num_steps(&self) -> usize {
        self.params.num_steps
    }

    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Path {
        let GbmParams {
            spot,
            volatility,
            rate,
            num_steps,
            ..
        } = self.params;

        let mut points = Vec::with_capacity(num_steps);
        let mut s = spot;
        let mut t = 0.0;

        for _ in 0..num_steps {
            let z: f64 = StandardNormal.sample(rng);
            t += self.dt;
            s += rate * s * self.dt + volatility * s * self.sqrt_dt * z;
            points.push(Point::new(t, s));
        }

        Path::new(points)
    }
}
