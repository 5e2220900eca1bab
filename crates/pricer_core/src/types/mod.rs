//! Core simulation and error types.
//!
//! This module provides:
//! - `path`: Simulated trajectories (`Point`, `Path`)
//! - `error`: Structured error types for validation and simulation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Point`], [`Path`] from `path`
//! - [`PricingError`] from `error`

pub mod error;
pub mod path;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use path::{Path, Point};
