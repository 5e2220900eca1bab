//! Standard normal distribution functions.
//!
//! Generic over `T: Float` so the reference pricer can run in `f32` or `f64`.

use pricer_core::traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// Complementary error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26) which provides
/// maximum error of 1.5e-7 for all x.
///
/// # Mathematical Definition
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    // Abramowitz and Stegun constants (7.1.26)
    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        T::from(2.0).unwrap() - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// Absolute error below 1e-7 for all finite x.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}
