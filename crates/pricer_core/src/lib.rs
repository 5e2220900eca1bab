//! # pricer_core: Foundation Types for the Monte Carlo Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Simulated path types: `Point`, `Path` (`types::path`)
//! - Error types: `PricingError` (`types::error`)
//! - Simulation capabilities: `PathGenerator`, `PathEvaluator` (`traits::simulation`)
//! - Generic floating-point trait re-export: `Float` (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - rand: The `Rng` bound used by `PathGenerator::generate`
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{Path, Point, PricingError};
//!
//! let path = Path::try_from_points(vec![
//!     Point::new(0.25, 101.0),
//!     Point::new(0.50, 99.5),
//! ])
//! .unwrap();
//!
//! assert_eq!(path.len(), 2);
//! assert_eq!(path.terminal().map(|p| p.spot()), Some(99.5));
//!
//! let err = Path::try_from_points(vec![Point::new(0.5, 1.0), Point::new(0.5, 1.0)]);
//! assert!(matches!(err, Err(PricingError::InvalidParameter { .. })));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;
