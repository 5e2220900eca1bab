//! Path evaluators mapping simulated paths to payoffs.

pub mod european;

pub use european::EuropeanPathEvaluator;
