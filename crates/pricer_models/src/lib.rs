//! # Pricer Models (L2: Business Logic)
//!
//! Stochastic path generators, payoff definitions and analytical formulas.
//!
//! This crate provides:
//! - Geometric Brownian motion path generation (Euler-Maruyama)
//! - European option type and payoff parameters
//! - Closed-form Black-Scholes prices used to validate Monte Carlo estimates
//!
//! ## Design Principles
//!
//! - **Validated construction**: every parameter bundle is checked once, up
//!   front, so simulation loops never see NaN-producing inputs
//! - **Immutable strategies**: generators hold read-only parameters and take
//!   their randomness from the caller

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
