//! # OptCalc: Black-Scholes Option Pricing and Payoff Analytics
//!
//! `optcalc` is a small Rust library for quantitative option analytics. It
//! implements the closed-form European Black-Scholes family: price, the five
//! standard Greeks, and position payoff/PnL at expiry, plus spot-grid sweeps
//! and SVG chart rendering of the resulting curves.
//!
//! ## Core Features
//!
//! - **Pricing Engine**: pure, stateless Black-Scholes price with explicit
//!   handling of the degenerate `T = 0` / `sigma = 0` cases
//! - **Greeks**: delta, gamma, vega, theta, rho with documented scaling
//!   conventions (vega per unit vol, theta per year, rho per unit rate)
//! - **Payoff/PnL**: long/short call/put settlement at expiry
//! - **Sweeps & Charts**: batch evaluation over a spot grid and SVG
//!   rendering of the price/delta/PnL curves
//!
//! ## Quick Start
//!
//! ```rust
//! use optcalc::{
//!     greeks, payoff, price, OptionParameters, OptionType, PositionPayoff, PositionSide,
//! };
//!
//! // ATM call, 20% vol, one year, 5% rate
//! let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call)?;
//!
//! let value = price(&params);
//! assert!(value > 10.0 && value < 11.0);
//!
//! let sensitivities = greeks(&params);
//! assert!(sensitivities.delta > 0.5 && sensitivities.delta < 0.7);
//!
//! // Long call bought for $5, settling at $110
//! let position = PositionPayoff::new(110.0, 100.0, 5.0, OptionType::Call, PositionSide::Long)?;
//! assert_eq!(payoff(&position), 5.0);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Validation Policy
//!
//! Inputs are validated at the boundary: [`OptionParameters::new`],
//! [`PositionPayoff::new`], and (with the `serde` feature) [`ScenarioConfig`]
//! reject out-of-domain values with descriptive errors. The pure engine
//! functions themselves are total over validated inputs and never produce
//! NaN for the degenerate zero-volatility / zero-time cases.
//!
//! ## Scope
//!
//! Only closed-form European options are supported: no implied-volatility
//! solving, no American or exotic styles, no market-data handling.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod chart;
#[cfg(feature = "serde")]
pub mod config;
pub mod pricing;
pub mod sweep;
pub mod types;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// The engine: price, Greeks, and payoff
pub use pricing::{greeks, payoff, price};

// Value types
pub use types::{GreeksResult, OptionParameters, OptionType, PositionPayoff, PositionSide};

// Sweeps and chart rendering
pub use chart::{ChartConfig, CurveChart};
pub use sweep::{sweep_spot, SpotCurves, SweepConfig};

// Scenario configuration (TOML)
#[cfg(feature = "serde")]
pub use config::{OptionConfig, PositionConfig, ScenarioConfig};
