//! Stochastic process models used for path generation.
//!
//! This module provides:
//! - `GbmParams`: Validated geometric Brownian motion parameters
//! - `GbmPathGenerator`: Euler-Maruyama implementation of
//!   [`PathGenerator`](pricer_core::traits::PathGenerator)
//!
//! ## Example
//!
//! ```
//! use pricer_core::traits::PathGenerator;
//! use pricer_models::models::{GbmParams, GbmPathGenerator};
//!
//! let generator = GbmPathGenerator::new(GbmParams::default()).unwrap();
//! let path = generator.generate(&mut rand::thread_rng());
//! assert_eq!(path.len(), generator.num_steps());
//! ```

pub mod gbm;

pub use gbm::{GbmParams, GbmPathGenerator};
