//! # Random Number Generation Infrastructure
//!
//! Seeded pseudo-random number generation for Monte Carlo simulations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator records the seed it was built from
//! - **Engine ownership**: streams are created by the engine inside each
//!   trial block, never stored in a path generator
//! - **Independence**: `for_stream` derives one seed per block index, so no
//!   two blocks of a run share a draw sequence
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//! use rand::Rng;
//!
//! let mut rng = PricerRng::for_stream(12345, 3);
//! let value: f64 = rng.gen();
//! assert!((0.0..1.0).contains(&value));
//! ```

pub mod prng;

pub use prng::PricerRng;
