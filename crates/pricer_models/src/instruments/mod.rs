//! Financial instrument definitions.
//!
//! Only single-asset European options are modelled: the payoff depends on
//! the terminal price alone.
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionType, PayoffParams};
//!
//! let put = PayoffParams::new(OptionType::Put, 110.0).unwrap();
//! assert_eq!(put.intrinsic(100.0), 10.0);
//! ```

pub mod payoff;

pub use payoff::{OptionType, PayoffParams};
