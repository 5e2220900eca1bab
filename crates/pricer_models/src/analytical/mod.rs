//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions used to validate Monte Carlo
//! estimates:
//! - Black-Scholes model for lognormal dynamics
//! - Standard normal CDF
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Numerical Stability**: Uses erfc-based CDF for accuracy

pub mod black_scholes;
pub mod distributions;

// Re-export main types at module level
pub use black_scholes::BlackScholesAnalytical;
pub use distributions::norm_cdf;
