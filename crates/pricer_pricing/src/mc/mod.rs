//! Monte Carlo estimation engine.
//!
//! This module provides the reduction framework that turns many independent
//! simulated paths into a single payoff estimate.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine<G, E, P>
//! ├── G: PathGenerator    (one path per trial)
//! ├── E: PathEvaluator    (one payoff per path)
//! ├── P: ExecutionPolicy  (Sequential fold | Parallel map-reduce)
//! └── MonteCarloConfig    (block size, optional seed)
//!
//! calculate(n)
//!   └── TrialBlock::partition(n, block_size)
//!         └── per block: PricerRng::for_stream(seed, index)
//!               └── generate -> evaluate -> PayoffMoments
//!                     └── policy.reduce(merge) -> McEstimate
//! ```
//!
//! Both policies see the same partition and the same per-block random
//! streams, so with a fixed seed they differ only by summation order.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use pricer_models::models::{GbmParams, GbmPathGenerator};
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine, Parallel, Sequential};
//! use pricer_pricing::payoff::EuropeanPathEvaluator;
//!
//! let generator = Arc::new(GbmPathGenerator::new(GbmParams::default()).unwrap());
//! let evaluator = Arc::new(EuropeanPathEvaluator::put(110.0).unwrap());
//! let config = MonteCarloConfig::builder().seed(7).build().unwrap();
//!
//! let seq = MonteCarloEngine::with_config(generator.clone(), evaluator.clone(), Sequential, config.clone());
//! let par = MonteCarloEngine::with_config(generator, evaluator, Parallel, config);
//!
//! let a = seq.calculate(4_096).unwrap();
//! let b = par.calculate(4_096).unwrap();
//! assert!((a - b).abs() < 1e-9);
//! ```

pub mod config;
pub mod engine;
pub mod policy;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_BLOCK_SIZE};
pub use engine::{McEstimate, MonteCarloEngine, PayoffMoments};
pub use policy::{Accumulate, ExecutionMode, ExecutionPolicy, Parallel, Sequential, TrialBlock};
