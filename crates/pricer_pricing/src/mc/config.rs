//! Monte Carlo engine configuration.
//!
//! This module provides [`MonteCarloConfig`] and its builder. The path count
//! is not part of the configuration: it is supplied per call to
//! `MonteCarloEngine::calculate`.

use pricer_core::types::PricingError;

/// Default number of trials per block.
///
/// Each block is one unit of parallel work, so runs of up to this many
/// trials execute on a single worker.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Monte Carlo engine configuration.
///
/// Immutable configuration controlling how trials are partitioned and seeded.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .block_size(512)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.block_size(), 512);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of trials sharing one random stream.
    block_size: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of trials per block.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Returns the optional seed for reproducibility.
    ///
    /// `None` means each `calculate` call draws a fresh base seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if `block_size` is 0.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.block_size == 0 {
            return Err(PricingError::invalid_parameter(
                "block_size",
                "block size must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields fall back to the defaults of [`MonteCarloConfig::default`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    block_size: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of trials per block.
    ///
    /// Smaller blocks expose more parallelism for short runs at the cost of
    /// one stream setup per block. Changing it changes the seeded estimate.
    #[inline]
    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidParameter` if the block size is 0.
    pub fn build(self) -> Result<MonteCarloConfig, PricingError> {
        let config = MonteCarloConfig {
            block_size: self.block_size.unwrap_or(DEFAULT_BLOCK_SIZE),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
