//! # Pricer Engine (Layer 3: Monte Carlo)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing turns the Layer 1 simulation traits and the Layer 2 models
//! into price estimates:
//! - Monte Carlo reduction engine generic over generator, evaluator and
//!   execution policy (`mc`)
//! - Sequential and rayon-parallel execution policies over trial blocks
//! - European path evaluator (`payoff`)
//! - Seeded per-block random streams (`rng`)
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::analytical::BlackScholesAnalytical;
//! use pricer_models::instruments::OptionType;
//! use pricer_models::models::{GbmParams, GbmPathGenerator};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine, Parallel};
//! use pricer_pricing::payoff::EuropeanPathEvaluator;
//!
//! let params = GbmParams::new(100.0, 0.2, 0.01, 0.5, 20).unwrap();
//! let generator = GbmPathGenerator::new(params).unwrap();
//! let evaluator = EuropeanPathEvaluator::call(110.0).unwrap();
//! let config = MonteCarloConfig::builder().seed(42).build().unwrap();
//!
//! let engine = MonteCarloEngine::with_config(generator, evaluator, Parallel, config);
//! let estimate = engine.calculate_with_stats(50_000).unwrap();
//!
//! // The estimate is undiscounted: compare against the forward value.
//! let analytical = BlackScholesAnalytical::new(OptionType::Call, 100.0, 0.2, 110.0, 0.01, 0.5)
//!     .unwrap()
//!     .calculate();
//! let forward = analytical * (0.01_f64 * 0.5).exp();
//! assert!((estimate.mean - forward).abs() < 5.0 * estimate.std_error + 0.05);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Seeded per-block random streams
pub mod rng;

// Monte Carlo engine, configuration and execution policies
pub mod mc;

// Path evaluators
pub mod payoff;

// Re-export commonly used items for convenience
pub use mc::{ExecutionMode, ExecutionPolicy, McEstimate, MonteCarloConfig, MonteCarloEngine};
pub use payoff::EuropeanPathEvaluator;
