//! Error types for the CLI.

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing failed
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),
}

impl CliError {
    /// True when a pricing component broke its own contract, as opposed to
    /// the user supplying bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Pricing(err) if err.is_contract_violation())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
