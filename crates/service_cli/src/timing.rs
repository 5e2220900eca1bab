//! Wall-clock timing helper.

use std::time::{Duration, Instant};

use tracing::trace;

/// Runs `f` and returns its result together with the elapsed wall-clock time.
pub fn time_it<T, F>(description: &str, f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed();
    trace!(description, elapsed_ms = elapsed.as_millis() as u64, "timed");
    (value, elapsed)
}
