//! Pricing configuration management
//!
//! Loads model, option and engine parameters from an optional TOML file and
//! applies command-line overrides on top.

use std::path::Path;

use pricer_core::types::PricingError;
use pricer_models::instruments::PayoffParams;
use pricer_models::models::GbmParams;
use pricer_pricing::mc::{MonteCarloConfig, DEFAULT_BLOCK_SIZE};
use serde::Deserialize;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

impl From<PricingError> for ConfigError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::InvalidParameter { name, reason } => {
                ConfigError::InvalidValue { name, reason }
            }
            other => ConfigError::InvalidValue {
                name: "config",
                reason: other.to_string(),
            },
        }
    }
}

/// Price process parameters (`[model]`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Initial spot price
    pub spot: f64,
    /// Annualised volatility
    pub volatility: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Time horizon in years
    pub horizon: f64,
    /// Discretisation steps per path
    pub num_steps: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        let params = GbmParams::default();
        Self {
            spot: params.spot,
            volatility: params.volatility,
            rate: params.rate,
            horizon: params.horizon,
            num_steps: params.num_steps,
        }
    }
}

/// Contract parameters (`[option]`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptionConfig {
    /// Strike price, shared by the put and the call
    pub strike: f64,
}

impl Default for OptionConfig {
    fn default() -> Self {
        Self { strike: 110.0 }
    }
}

/// Engine parameters (`[engine]`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Trials per random stream
    pub block_size: usize,
    /// Fixed seed; unseeded runs draw a fresh seed per estimate
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            seed: None,
        }
    }
}

/// Complete pricing configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfig {
    pub model: ModelConfig,
    pub option: OptionConfig,
    pub engine: EngineConfig,
}

/// Command-line overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Seed override
    pub seed: Option<u64>,
    /// Step count override
    pub num_steps: Option<usize>,
}

impl PricingConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load from `path` if given, otherwise use the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(seed) = cli.seed {
            self.engine.seed = Some(seed);
        }
        if let Some(num_steps) = cli.num_steps {
            self.model.num_steps = num_steps;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gbm_params().validate()?;
        PayoffParams::call(self.option.strike)?;
        self.mc_config()?;
        Ok(())
    }

    /// Path generator parameters
    pub fn gbm_params(&self) -> GbmParams {
        GbmParams {
            spot: self.model.spot,
            volatility: self.model.volatility,
            rate: self.model.rate,
            horizon: self.model.horizon,
            num_steps: self.model.num_steps,
        }
    }

    /// Engine configuration
    pub fn mc_config(&self) -> Result<MonteCarloConfig, PricingError> {
        MonteCarloConfig::builder()
            .block_size(self.engine.block_size)
            .maybe_seed(self.engine.seed)
            .build()
    }
}
