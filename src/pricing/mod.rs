//! The pure Black-Scholes engine: price, Greeks, and expiry payoff.
//!
//! All functions here are stateless and side-effect free; each call is
//! independent, so callers may batch or parallelize evaluations freely.

pub mod bs;
pub mod greeks;
pub mod math;
pub mod payoff;

pub use bs::price;
pub use greeks::greeks;
pub use payoff::payoff;
