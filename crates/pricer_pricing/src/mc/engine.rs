//! Monte Carlo estimation engine.
//!
//! [`MonteCarloEngine`] drives independent trials, each generating one path
//! and evaluating one payoff, and reduces the payoffs to a sample mean. The
//! reduction is delegated to an [`ExecutionPolicy`].
//!
//! The estimate is the plain arithmetic mean of the payoffs; no discount
//! factor is applied.

use pricer_core::traits::{PathEvaluator, PathGenerator};
use pricer_core::types::PricingError;
use tracing::debug;

use super::config::MonteCarloConfig;
use super::policy::{Accumulate, ExecutionPolicy, Parallel, TrialBlock};
use crate::rng::PricerRng;

/// Running payoff moments of a set of trials.
///
/// Merging is associative, so partial moments from separate blocks can be
/// combined in any grouping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PayoffMoments {
    /// Number of payoffs recorded.
    pub count: usize,
    /// Sum of payoffs.
    pub sum: f64,
    /// Sum of squared payoffs.
    pub sum_sq: f64,
}

impl PayoffMoments {
    /// Records one payoff.
    #[inline]
    pub fn push(&mut self, payoff: f64) {
        self.count += 1;
        self.sum += payoff;
        self.sum_sq += payoff * payoff;
    }

    /// Converts the moments into an estimate.
    ///
    /// Uses the unbiased sample variance; the standard error is 0 for fewer
    /// than two payoffs.
    pub fn estimate(&self) -> McEstimate {
        if self.count == 0 {
            return McEstimate {
                mean: 0.0,
                std_error: 0.0,
                num_paths: 0,
            };
        }

        let n = self.count as f64;
        let mean = self.sum / n;
        let std_error = if self.count < 2 {
            0.0
        } else {
            let variance = ((self.sum_sq - self.sum * self.sum / n) / (n - 1.0)).max(0.0);
            (variance / n).sqrt()
        };

        McEstimate {
            mean,
            std_error,
            num_paths: self.count,
        }
    }
}

impl Accumulate for PayoffMoments {
    #[inline]
    fn identity() -> Self {
        Self::default()
    }

    #[inline]
    fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
        }
    }
}

/// Result of a Monte Carlo run.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::McEstimate;
///
/// let estimate = McEstimate { mean: 10.0, std_error: 0.05, num_paths: 10_000 };
/// println!("Estimate: {} +/- {}", estimate.mean, estimate.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct McEstimate {
    /// Sample mean of the payoffs.
    pub mean: f64,
    /// Standard error of the mean.
    pub std_error: f64,
    /// Number of paths simulated.
    pub num_paths: usize,
}

impl McEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Monte Carlo engine generic over path generation, payoff evaluation and
/// execution policy.
///
/// The engine holds its strategies read-only. Randomness is created per
/// call and per trial block, so one engine (or two engines sharing the same
/// strategies through `&G` or `Arc<G>`) can run `calculate` concurrently.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::{GbmParams, GbmPathGenerator};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloEngine, Sequential};
/// use pricer_pricing::payoff::EuropeanPathEvaluator;
///
/// let generator = GbmPathGenerator::new(GbmParams::default()).unwrap();
/// let evaluator = EuropeanPathEvaluator::call(110.0).unwrap();
/// let config = MonteCarloConfig::builder().seed(42).build().unwrap();
///
/// let engine = MonteCarloEngine::with_config(generator, evaluator, Sequential, config);
/// let price = engine.calculate(2_000).unwrap();
/// assert!(price.is_finite() && price >= 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloEngine<G, E, P = Parallel> {
    generator: G,
    evaluator: E,
    policy: P,
    config: MonteCarloConfig,
}

impl<G, E, P> MonteCarloEngine<G, E, P>
where
    G: PathGenerator,
    E: PathEvaluator,
    P: ExecutionPolicy,
{
    /// Creates an engine with the default configuration (unseeded).
    pub fn new(generator: G, evaluator: E, policy: P) -> Self {
        Self::with_config(generator, evaluator, policy, MonteCarloConfig::default())
    }

    /// Creates an engine with an explicit configuration.
    pub fn with_config(generator: G, evaluator: E, policy: P, config: MonteCarloConfig) -> Self {
        Self {
            generator,
            evaluator,
            policy,
            config,
        }
    }

    /// Estimates the expected payoff from `num_paths` independent trials.
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidParameter` if `num_paths` is 0, raised before
    ///   any path is generated
    /// - any error returned by the evaluator, e.g. `PricingError::EmptyPath`
    pub fn calculate(&self, num_paths: usize) -> Result<f64, PricingError> {
        self.calculate_with_stats(num_paths).map(|estimate| estimate.mean)
    }

    /// Like [`calculate`](Self::calculate), also reporting the standard error.
    ///
    /// # Errors
    ///
    /// Same as [`calculate`](Self::calculate).
    pub fn calculate_with_stats(&self, num_paths: usize) -> Result<McEstimate, PricingError> {
        if num_paths == 0 {
            return Err(PricingError::invalid_parameter(
                "num_paths",
                "number of paths must be greater than zero",
            ));
        }

        let base_seed = self.config.seed().unwrap_or_else(rand::random);
        let blocks = TrialBlock::partition(num_paths, self.config.block_size());

        debug!(
            num_paths,
            num_blocks = blocks.len(),
            policy = self.policy.name(),
            seeded = self.config.seed().is_some(),
            "starting Monte Carlo run"
        );

        let moments: PayoffMoments = self
            .policy
            .reduce(&blocks, |block| self.simulate_block(base_seed, block))?;
        let estimate = moments.estimate();

        debug!(
            policy = self.policy.name(),
            mean = estimate.mean,
            std_error = estimate.std_error,
            "Monte Carlo run complete"
        );

        Ok(estimate)
    }

    fn simulate_block(
        &self,
        base_seed: u64,
        block: &TrialBlock,
    ) -> Result<PayoffMoments, PricingError> {
        let mut rng = PricerRng::for_stream(base_seed, block.index as u64);
        let mut moments = PayoffMoments::default();

        for _ in block.trials.clone() {
            let path = self.generator.generate(&mut rng);
            moments.push(self.evaluator.evaluate(&path)?);
        }

        Ok(moments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::{ExecutionMode, Sequential, DEFAULT_BLOCK_SIZE};
    use approx::assert_relative_eq;
    use pricer_core::types::{Path, Point};
    use rand::Rng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Generator emitting `steps` points whose terminal spot is uniform on [0, 1).
    #[derive(Default)]
    struct UniformGenerator {
        calls: AtomicUsize,
    }

    impl PathGenerator for UniformGenerator {
        fn num_steps(&self) -> usize {
            1
        }

        fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Path {
            self.calls.fetch_add(1, Ordering::Relaxed);
            Path::new(vec![Point::new(1.0, rng.gen::<f64>())])
        }
    }

    struct ConstantGenerator(f64);

    impl PathGenerator for ConstantGenerator {
        fn num_steps(&self) -> usize {
            1
        }

        fn generate<R: Rng + ?Sized>(&self, _rng: &mut R) -> Path {
            Path::new(vec![Point::new(1.0, self.0)])
        }
    }

    struct EmptyGenerator;

    impl PathGenerator for EmptyGenerator {
        fn num_steps(&self) -> usize {
            0
        }

        fn generate<R: Rng + ?Sized>(&self, _rng: &mut R) -> Path {
            Path::default()
        }
    }

    /// Evaluator returning the terminal spot and counting invocations.
    #[derive(Default)]
    struct TerminalSpot {
        calls: AtomicUsize,
    }

    impl PathEvaluator for TerminalSpot {
        fn evaluate(&self, path: &Path) -> Result<f64, PricingError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            path.terminal()
                .map(|p| p.spot())
                .ok_or(PricingError::EmptyPath)
        }
    }

    fn seeded(seed: u64, block_size: usize) -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .seed(seed)
            .block_size(block_size)
            .build()
            .unwrap()
    }

    // ==========================================================
    // PayoffMoments / McEstimate
    // ==========================================================

    #[test]
    fn test_moments_estimate() {
        let mut moments = PayoffMoments::default();
        for x in [1.0, 2.0, 3.0, 4.0] {
            moments.push(x);
        }
        let estimate = moments.estimate();
        assert_eq!(estimate.num_paths, 4);
        assert_relative_eq!(estimate.mean, 2.5);
        // sample variance 5/3, std error sqrt(5/12)
        assert_relative_eq!(estimate.std_error, (5.0_f64 / 12.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(estimate.confidence_95(), 1.96 * estimate.std_error);
    }

    #[test]
    fn test_moments_merge_matches_single_pass() {
        let values: Vec<f64> = (0..100).map(|i| (i as f64 * 0.37).sin().abs()).collect();

        let mut whole = PayoffMoments::default();
        values.iter().for_each(|&v| whole.push(v));

        let (left, right) = values.split_at(37);
        let mut a = PayoffMoments::identity();
        let mut b = PayoffMoments::identity();
        left.iter().for_each(|&v| a.push(v));
        right.iter().for_each(|&v| b.push(v));
        let merged = a.merge(b);

        assert_eq!(merged.count, whole.count);
        assert_relative_eq!(merged.sum, whole.sum, epsilon = 1e-10);
        assert_relative_eq!(merged.sum_sq, whole.sum_sq, epsilon = 1e-10);
    }

    #[test]
    fn test_moments_degenerate_counts() {
        assert_eq!(PayoffMoments::default().estimate().num_paths, 0);

        let mut single = PayoffMoments::default();
        single.push(7.0);
        let estimate = single.estimate();
        assert_eq!(estimate.mean, 7.0);
        assert_eq!(estimate.std_error, 0.0);
    }

    // ==========================================================
    // Engine
    // ==========================================================

    #[test]
    fn test_zero_paths_rejected_before_any_invocation() {
        let generator = UniformGenerator::default();
        let evaluator = TerminalSpot::default();

        for mode in ExecutionMode::ALL {
            let engine = MonteCarloEngine::new(&generator, &evaluator, mode);
            let err = engine.calculate(0).unwrap_err();
            match err {
                PricingError::InvalidParameter { name, reason } => {
                    assert_eq!(name, "num_paths");
                    assert_eq!(reason, "number of paths must be greater than zero");
                }
                other => panic!("unexpected error {:?}", other),
            }
        }

        assert_eq!(generator.calls.load(Ordering::Relaxed), 0);
        assert_eq!(evaluator.calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_one_invocation_per_path() {
        let generator = UniformGenerator::default();
        let evaluator = TerminalSpot::default();
        let engine = MonteCarloEngine::with_config(&generator, &evaluator, Parallel, seeded(1, 64));

        let estimate = engine.calculate_with_stats(1_000).unwrap();
        assert_eq!(estimate.num_paths, 1_000);
        assert_eq!(generator.calls.load(Ordering::Relaxed), 1_000);
        assert_eq!(evaluator.calls.load(Ordering::Relaxed), 1_000);
    }

    #[test]
    fn test_constant_payoff_is_exact() {
        for mode in ExecutionMode::ALL {
            let engine = MonteCarloEngine::new(ConstantGenerator(3.25), TerminalSpot::default(), mode);
            let estimate = engine.calculate_with_stats(777).unwrap();
            assert_relative_eq!(estimate.mean, 3.25, epsilon = 1e-12);
            assert!(estimate.std_error < 1e-6);
        }
    }

    #[test]
    fn test_uniform_mean_converges() {
        let engine = MonteCarloEngine::with_config(
            UniformGenerator::default(),
            TerminalSpot::default(),
            Parallel,
            seeded(7, 1024),
        );
        let estimate = engine.calculate_with_stats(100_000).unwrap();
        // Var(U) = 1/12, se ~ 0.0009
        assert!((estimate.mean - 0.5).abs() < 5.0 * estimate.std_error + 1e-4);
        assert_relative_eq!(estimate.std_error, (1.0 / 12.0_f64 / 100_000.0).sqrt(), max_relative = 0.05);
    }

    #[test]
    fn test_seeded_runs_reproducible_and_policies_agree() {
        let generator = Arc::new(UniformGenerator::default());
        let evaluator = Arc::new(TerminalSpot::default());

        let seq = MonteCarloEngine::with_config(
            Arc::clone(&generator),
            Arc::clone(&evaluator),
            Sequential,
            seeded(99, 100),
        );
        let par = MonteCarloEngine::with_config(generator, evaluator, Parallel, seeded(99, 100));

        let a = seq.calculate(10_000).unwrap();
        let b = seq.calculate(10_000).unwrap();
        let c = par.calculate(10_000).unwrap();

        assert_eq!(a, b);
        assert_relative_eq!(a, c, max_relative = 1e-12);
    }

    #[test]
    fn test_short_run_split_into_smaller_blocks_stays_reproducible() {
        let generator = Arc::new(UniformGenerator::default());
        let evaluator = Arc::new(TerminalSpot::default());
        let run = |mode: ExecutionMode, block_size: usize| {
            MonteCarloEngine::with_config(
                Arc::clone(&generator),
                Arc::clone(&evaluator),
                mode,
                seeded(5, block_size),
            )
            .calculate(1_000)
            .unwrap()
        };

        // One default block versus eight parallel blocks
        let single = run(ExecutionMode::Parallel, DEFAULT_BLOCK_SIZE);
        let split_seq = run(ExecutionMode::Sequential, 128);
        let split_par = run(ExecutionMode::Parallel, 128);

        assert_relative_eq!(split_seq, split_par, max_relative = 1e-12);
        assert_ne!(single, split_par);
        assert!((split_par - 0.5).abs() < 0.1);
    }

    #[test]
    fn test_unseeded_runs_differ() {
        let engine = MonteCarloEngine::new(UniformGenerator::default(), TerminalSpot::default(), Parallel);
        let a = engine.calculate(5_000).unwrap();
        let b = engine.calculate(5_000).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_evaluator_error_propagates() {
        for mode in ExecutionMode::ALL {
            let engine = MonteCarloEngine::new(EmptyGenerator, TerminalSpot::default(), mode);
            assert_eq!(engine.calculate(10), Err(PricingError::EmptyPath));
        }
    }

    #[test]
    fn test_concurrent_engines_share_strategies() {
        let generator = Arc::new(UniformGenerator::default());
        let evaluator = Arc::new(TerminalSpot::default());

        std::thread::scope(|scope| {
            for mode in ExecutionMode::ALL {
                let engine = MonteCarloEngine::new(Arc::clone(&generator), Arc::clone(&evaluator), mode);
                scope.spawn(move || {
                    let value = engine.calculate(20_000).unwrap();
                    assert!((value - 0.5).abs() < 0.02);
                });
            }
        });

        assert_eq!(generator.calls.load(Ordering::Relaxed), 40_000);
        assert_eq!(evaluator.calls.load(Ordering::Relaxed), 40_000);
    }
}
