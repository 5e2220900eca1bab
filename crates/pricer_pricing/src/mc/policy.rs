//! Execution policies for the Monte Carlo reduction.
//!
//! A run is split into [`TrialBlock`]s. An [`ExecutionPolicy`] maps every
//! block to a partial result and merges the partials with an associative
//! combiner ([`Accumulate`]).
//!
//! ```text
//!   blocks:  [0..1024) [1024..2048) [2048..3000)
//!                │          │            │
//!   map:      partial    partial      partial
//!                └──── merge ────┴─── merge ──▶ total
//! ```
//!
//! [`Sequential`] folds the partials in block order on the calling thread.
//! [`Parallel`] maps the blocks on the rayon pool and reduces them as a tree,
//! so the summation order is unspecified.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use pricer_core::types::PricingError;
use rayon::prelude::*;

/// Partial result that can be merged associatively.
///
/// `identity()` must be a neutral element for `merge`.
pub trait Accumulate: Send + Sized {
    /// Neutral element of [`merge`](Accumulate::merge).
    fn identity() -> Self;

    /// Combines two partial results.
    fn merge(self, other: Self) -> Self;
}

impl Accumulate for f64 {
    #[inline]
    fn identity() -> Self {
        0.0
    }

    #[inline]
    fn merge(self, other: Self) -> Self {
        self + other
    }
}

impl Accumulate for usize {
    #[inline]
    fn identity() -> Self {
        0
    }

    #[inline]
    fn merge(self, other: Self) -> Self {
        self + other
    }
}

/// Merging results keeps the first error encountered.
impl<T: Accumulate, E: Send> Accumulate for Result<T, E> {
    #[inline]
    fn identity() -> Self {
        Ok(T::identity())
    }

    #[inline]
    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(a.merge(b)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        }
    }
}

/// Contiguous range of trial indices sharing one random stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrialBlock {
    /// Position of the block within its run; selects the random stream.
    pub index: usize,
    /// Trial indices covered by the block.
    pub trials: Range<usize>,
}

impl TrialBlock {
    /// Splits `num_trials` trials into blocks of at most `block_size`.
    ///
    /// Only the last block may be shorter. Returns no blocks for zero trials.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_pricing::mc::TrialBlock;
    ///
    /// let blocks = TrialBlock::partition(2500, 1000);
    /// assert_eq!(blocks.len(), 3);
    /// assert_eq!(blocks[2].trials, 2000..2500);
    /// ```
    pub fn partition(num_trials: usize, block_size: usize) -> Vec<TrialBlock> {
        let block_size = block_size.max(1);
        (0..num_trials)
            .step_by(block_size)
            .enumerate()
            .map(|(index, start)| TrialBlock {
                index,
                trials: start..(start + block_size).min(num_trials),
            })
            .collect()
    }

    /// Number of trials in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Returns `true` if the block covers no trials.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }
}

/// Strategy for reducing trial blocks to a single result.
pub trait ExecutionPolicy: Send + Sync {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Applies `map` to every block and merges the partial results.
    fn reduce<T, F>(&self, blocks: &[TrialBlock], map: F) -> T
    where
        T: Accumulate,
        F: Fn(&TrialBlock) -> T + Sync + Send;
}

/// Ordered, single-threaded fold over the blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sequential;

impl ExecutionPolicy for Sequential {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn reduce<T, F>(&self, blocks: &[TrialBlock], map: F) -> T
    where
        T: Accumulate,
        F: Fn(&TrialBlock) -> T + Sync + Send,
    {
        blocks.iter().map(&map).fold(T::identity(), T::merge)
    }
}

/// Data-parallel map-reduce over the global rayon pool.
///
/// Work is distributed per block, so a run of at most `block_size` trials
/// is a single block and executes on one worker. The partition depends only
/// on the trial count and block size, never on the pool size, which keeps
/// seeded runs identical across machines. Lower the block size to spread a
/// small run over more workers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Parallel;

impl ExecutionPolicy for Parallel {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn reduce<T, F>(&self, blocks: &[TrialBlock], map: F) -> T
    where
        T: Accumulate,
        F: Fn(&TrialBlock) -> T + Sync + Send,
    {
        blocks.par_iter().map(&map).reduce(T::identity, T::merge)
    }
}

/// Runtime selection between [`Sequential`] and [`Parallel`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{ExecutionMode, ExecutionPolicy};
///
/// let mode: ExecutionMode = "par".parse().unwrap();
/// assert_eq!(mode, ExecutionMode::Parallel);
/// assert_eq!(mode.name(), "parallel");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Single-threaded ordered fold.
    Sequential,
    /// Rayon map-reduce.
    #[default]
    Parallel,
}

impl ExecutionMode {
    /// Both modes, in reporting order.
    pub const ALL: [ExecutionMode; 2] = [ExecutionMode::Sequential, ExecutionMode::Parallel];
}

impl ExecutionPolicy for ExecutionMode {
    fn name(&self) -> &'static str {
        match self {
            ExecutionMode::Sequential => Sequential.name(),
            ExecutionMode::Parallel => Parallel.name(),
        }
    }

    fn reduce<T, F>(&self, blocks: &[TrialBlock], map: F) -> T
    where
        T: Accumulate,
        F: Fn(&TrialBlock) -> T + Sync + Send,
    {
        match self {
            ExecutionMode::Sequential => Sequential.reduce(blocks, map),
            ExecutionMode::Parallel => Parallel.reduce(blocks, map),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExecutionMode {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" | "seq" => Ok(ExecutionMode::Sequential),
            "parallel" | "par" => Ok(ExecutionMode::Parallel),
            other => Err(PricingError::invalid_parameter(
                "execution_mode",
                format!("unknown mode '{}', expected sequential or parallel", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==========================================================
    // Partitioning
    // ==========================================================

    #[test]
    fn test_partition_covers_all_trials_once() {
        let blocks = TrialBlock::partition(10_001, 1024);
        assert_eq!(blocks.len(), 10);
        assert_eq!(blocks.iter().map(TrialBlock::len).sum::<usize>(), 10_001);
        for (i, pair) in blocks.windows(2).enumerate() {
            assert_eq!(pair[0].index, i);
            assert_eq!(pair[0].trials.end, pair[1].trials.start);
        }
        assert_eq!(blocks.last().unwrap().trials, 9216..10_001);
    }

    #[test]
    fn test_partition_edge_cases() {
        assert!(TrialBlock::partition(0, 16).is_empty());

        let single = TrialBlock::partition(5, 16);
        assert_eq!(single, vec![TrialBlock { index: 0, trials: 0..5 }]);

        let exact = TrialBlock::partition(32, 16);
        assert_eq!(exact.len(), 2);
        assert!(exact.iter().all(|b| b.len() == 16 && !b.is_empty()));
    }

    #[test]
    fn test_small_runs_split_only_below_block_size() {
        assert_eq!(TrialBlock::partition(1000, 1024).len(), 1);
        assert_eq!(TrialBlock::partition(1024, 1024).len(), 1);
        assert_eq!(TrialBlock::partition(1025, 1024).len(), 2);

        let blocks = TrialBlock::partition(1000, 128);
        assert_eq!(blocks.len(), 8);
        assert_eq!(blocks.last().unwrap().trials, 896..1000);
    }

    // ==========================================================
    // Policies
    // ==========================================================

    #[test]
    fn test_policies_visit_every_block_once() {
        let blocks = TrialBlock::partition(1000, 7);
        for mode in ExecutionMode::ALL {
            let visits = AtomicUsize::new(0);
            let trials: usize = mode.reduce(&blocks, |b| {
                visits.fetch_add(1, Ordering::Relaxed);
                b.len()
            });
            assert_eq!(trials, 1000, "{}", mode);
            assert_eq!(visits.load(Ordering::Relaxed), blocks.len(), "{}", mode);
        }
    }

    #[test]
    fn test_sequential_and_parallel_agree() {
        let blocks = TrialBlock::partition(100_000, 100);
        let map = |b: &TrialBlock| b.trials.clone().map(|i| (i as f64).sqrt()).sum::<f64>();

        let seq: f64 = Sequential.reduce(&blocks, map);
        let par: f64 = Parallel.reduce(&blocks, map);
        approx::assert_relative_eq!(seq, par, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_blocks_yield_identity() {
        let sum: f64 = Parallel.reduce(&[], |_| 1.0);
        assert_eq!(sum, 0.0);
        let res: Result<f64, PricingError> = Sequential.reduce(&[], |_| Ok(1.0));
        assert_eq!(res, Ok(0.0));
    }

    #[test]
    fn test_result_merge_propagates_error() {
        let blocks = TrialBlock::partition(100, 10);
        for mode in ExecutionMode::ALL {
            let res: Result<f64, PricingError> = mode.reduce(&blocks, |b| {
                if b.index == 3 {
                    Err(PricingError::EmptyPath)
                } else {
                    Ok(1.0)
                }
            });
            assert_eq!(res, Err(PricingError::EmptyPath));
        }
    }

    #[test]
    fn test_execution_mode_parse_and_display() {
        assert_eq!("Sequential".parse::<ExecutionMode>().unwrap(), ExecutionMode::Sequential);
        assert_eq!("seq".parse::<ExecutionMode>().unwrap(), ExecutionMode::Sequential);
        assert!("gpu".parse::<ExecutionMode>().is_err());
        assert_eq!(ExecutionMode::Parallel.to_string(), "parallel");
        assert_eq!(ExecutionMode::default(), ExecutionMode::Parallel);
    }
}
