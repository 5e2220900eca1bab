//! Capability traits for Monte Carlo simulation.
//!
//! The Monte Carlo engine is generic over two strategies:
//! - [`PathGenerator`]: produces one simulated trajectory per call
//! - [`PathEvaluator`]: maps a completed trajectory to a payoff
//!
//! Both are read-only after construction and required to be `Send + Sync`,
//! so a single instance can be shared by several engines and worker threads
//! at once. Randomness is never owned by a generator: the caller passes the
//! random source into [`PathGenerator::generate`], which keeps concurrent
//! trials on separate streams.

use std::sync::Arc;

use rand::Rng;

use crate::types::{Path, PricingError};

/// Strategy producing simulated price paths.
///
/// # Contract
///
/// - `generate` must draw all randomness from `rng`; two calls with
///   independent sources produce independent paths.
/// - The returned path has exactly [`num_steps`](Self::num_steps) points and
///   strictly increasing times.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::simulation::PathGenerator;
/// use pricer_core::types::{Path, Point};
/// use rand::Rng;
///
/// /// Flat model: spot never moves.
/// struct Flat {
///     spot: f64,
/// }
///
/// impl PathGenerator for Flat {
///     fn num_steps(&self) -> usize {
///         1
///     }
///
///     fn generate<R: Rng + ?Sized>(&self, _rng: &mut R) -> Path {
///         Path::new(vec![Point::new(1.0, self.spot)])
///     }
/// }
///
/// let path = Flat { spot: 100.0 }.generate(&mut rand::thread_rng());
/// assert_eq!(path.terminal().unwrap().spot(), 100.0);
/// ```
pub trait PathGenerator: Send + Sync {
    /// Number of discretisation steps (and points) per generated path.
    fn num_steps(&self) -> usize;

    /// Simulates one path using randomness drawn from `rng`.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Path;
}

/// Strategy mapping a completed path to a scalar payoff.
///
/// # Contract
///
/// `evaluate` is pure and side-effect free. It fails with
/// [`PricingError::EmptyPath`] when the path has no points.
pub trait PathEvaluator: Send + Sync {
    /// Computes the payoff realised on `path`.
    fn evaluate(&self, path: &Path) -> Result<f64, PricingError>;
}

impl<G: PathGenerator> PathGenerator for &G {
    #[inline]
    fn num_steps(&self) -> usize {
        (**self).num_steps()
    }

    #[inline]
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Path {
        (**self).generate(rng)
    }
}

impl<G: PathGenerator> PathGenerator for Arc<G> {
    #[inline]
    fn num_steps(&self) -> usize {
        (**self).num_steps()
    }

    #[inline]
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Path {
        (**self).generate(rng)
    }
}

impl<E: PathEvaluator + ?Sized> PathEvaluator for &E {
    #[inline]
    fn evaluate(&self, path: &Path) -> Result<f64, PricingError> {
        (**self).evaluate(path)
    }
}

impl<E: PathEvaluator + ?Sized> PathEvaluator for Arc<E> {
    #[inline]
    fn evaluate(&self, path: &Path) -> Result<f64, PricingError> {
        (**self).evaluate(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, StandardNormal};

    struct NoisyGenerator;

    impl PathGenerator for NoisyGenerator {
        fn num_steps(&self) -> usize {
            2
        }

        fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Path {
            let z1: f64 = StandardNormal.sample(rng);
            let z2: f64 = StandardNormal.sample(rng);
            Path::new(vec![Point::new(0.5, z1), Point::new(1.0, z2)])
        }
    }

    struct Terminal;

    impl PathEvaluator for Terminal {
        fn evaluate(&self, path: &Path) -> Result<f64, PricingError> {
            path.terminal()
                .map(|p| p.spot())
                .ok_or(PricingError::EmptyPath)
        }
    }

    #[test]
    fn test_generator_is_driven_by_supplied_rng() {
        let generator = NoisyGenerator;
        let a = generator.generate(&mut StdRng::seed_from_u64(7));
        let b = generator.generate(&mut StdRng::seed_from_u64(7));
        let c = generator.generate(&mut StdRng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_reference_and_arc_delegate() {
        let generator = Arc::new(NoisyGenerator);
        let by_ref = &NoisyGenerator;
        assert_eq!(generator.num_steps(), 2);
        assert_eq!(by_ref.num_steps(), 2);

        let path = generator.generate(&mut StdRng::seed_from_u64(1));
        let evaluator = Arc::new(Terminal);
        assert_eq!(
            evaluator.evaluate(&path).unwrap(),
            (&Terminal).evaluate(&path).unwrap()
        );
    }

    #[test]
    fn test_terminal_draws_are_standard_normal() {
        let generator = NoisyGenerator;
        let mut rng = StdRng::seed_from_u64(11);
        let n = 20_000;
        let mean = (0..n)
            .map(|_| Terminal.evaluate(&generator.generate(&mut rng)).unwrap())
            .sum::<f64>()
            / n as f64;
        assert_relative_eq!(mean, 0.0, epsilon = 0.05);
    }

    #[test]
    fn test_evaluator_reports_empty_path() {
        assert_eq!(
            Terminal.evaluate(&Path::default()),
            Err(PricingError::EmptyPath)
        );
    }
}
