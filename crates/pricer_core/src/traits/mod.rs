//! Core traits for generic numerics and Monte Carlo simulation.
//!
//! This module defines fundamental abstractions for:
//! - Generic floating-point operations (`Float` trait)
//! - Path generation and evaluation (`simulation` module)
//!
//! The simulation traits use generic methods and are meant for static
//! dispatch: the engine is generic over the concrete strategies.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

pub mod simulation;

pub use simulation::{PathEvaluator, PathGenerator};
