//! Price command implementation
//!
//! Prices a European put and call with the Black-Scholes closed form and with
//! the Monte Carlo engine under both execution policies, timing each.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use pricer_models::analytical::BlackScholesAnalytical;
use pricer_models::instruments::{OptionType, PayoffParams};
use pricer_models::models::GbmPathGenerator;
use pricer_pricing::mc::{ExecutionMode, MonteCarloEngine};
use pricer_pricing::payoff::EuropeanPathEvaluator;
use tracing::info;

use crate::config::PricingConfig;
use crate::timing::time_it;
use crate::Result;

/// One timed price
#[derive(Debug, Clone, PartialEq)]
pub struct TimedPrice {
    pub label: &'static str,
    pub value: f64,
    pub elapsed: Duration,
}

/// All prices computed for one option side
#[derive(Debug, Clone, PartialEq)]
pub struct SideReport {
    pub option_type: OptionType,
    pub prices: Vec<TimedPrice>,
}

impl fmt::Display for SideReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "-- {} (sign = {})",
            self.option_type,
            self.option_type.sign()
        )?;
        for price in &self.prices {
            writeln!(
                f,
                "{:<23}: {:.6} ({}ms)",
                price.label,
                price.value,
                price.elapsed.as_millis()
            )?;
        }
        Ok(())
    }
}

fn mode_label(mode: ExecutionMode) -> &'static str {
    match mode {
        ExecutionMode::Sequential => "monte-carlo sequential",
        ExecutionMode::Parallel => "monte-carlo parallel",
    }
}

/// Run the price command
pub fn run(num_paths: usize, config: &PricingConfig) -> Result<()> {
    config.validate()?;

    info!("Starting pricing...");
    info!("  Monte Carlo paths: {}", num_paths);
    info!("  Steps per path: {}", config.model.num_steps);
    info!("  Strike: {}", config.option.strike);
    match config.engine.seed {
        Some(seed) => info!("  Seed: {}", seed),
        None => info!("  Seed: random"),
    }

    let generator = Arc::new(GbmPathGenerator::new(config.gbm_params())?);

    for option_type in OptionType::ALL {
        let report = price_side(option_type, num_paths, config, &generator)?;
        print!("{}", report);
    }

    info!("Pricing complete");
    Ok(())
}

/// Prices one option side analytically and with both execution policies.
///
/// The closed form reads its inputs back from the generator and evaluator,
/// so all three prices describe the same contract. The sequential and
/// parallel engines share the same generator and evaluator instances.
pub fn price_side(
    option_type: OptionType,
    num_paths: usize,
    config: &PricingConfig,
    generator: &Arc<GbmPathGenerator>,
) -> Result<SideReport> {
    let evaluator = Arc::new(EuropeanPathEvaluator::new(PayoffParams::new(
        option_type,
        config.option.strike,
    )?));
    let payoff = evaluator.params();
    let model = generator.params();

    let analytical = BlackScholesAnalytical::new(
        payoff.option_type(),
        model.spot,
        model.volatility,
        payoff.strike(),
        model.rate,
        model.horizon,
    )?;
    let mc_config = config.mc_config()?;

    let mut prices = Vec::with_capacity(1 + ExecutionMode::ALL.len());

    let label = "analytical solution";
    let (value, elapsed) = time_it(label, || analytical.calculate());
    prices.push(TimedPrice {
        label,
        value,
        elapsed,
    });

    for mode in ExecutionMode::ALL {
        let engine = MonteCarloEngine::with_config(
            Arc::clone(generator),
            Arc::clone(&evaluator),
            mode,
            mc_config.clone(),
        );
        let label = mode_label(mode);
        let (value, elapsed) = time_it(label, || engine.calculate(num_paths));
        prices.push(TimedPrice {
            label,
            value: value?,
            elapsed,
        });
    }

    Ok(SideReport {
        option_type: evaluator.option_type(),
        prices,
    })
}
