//! Value types shared by the pricing engine.
//!
//! Everything here is an immutable value passed by value; there is no state
//! and no lifecycle beyond a single function call. Constructors validate the
//! input domain and return `anyhow::Result`, so the pure engine functions in
//! [`crate::pricing`] can stay total.

use anyhow::{anyhow, Result};

/// Option type (call or put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Intrinsic value at the given spot
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

/// Side of a position (bought or written)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PositionSide {
    Long,
    Short,
}

impl PositionSide {
    /// PnL direction: +1 for long, -1 for short
    pub fn sign(&self) -> f64 {
        match self {
            PositionSide::Long => 1.0,
            PositionSide::Short => -1.0,
        }
    }
}

/// Inputs to the Black-Scholes formulas for a single European option.
///
/// `volatility == 0` and `time_to_expiry == 0` are valid degenerate inputs;
/// the pricing functions fall back to closed-form intrinsic values for them
/// instead of producing NaN. Out-of-domain values (non-positive spot or
/// strike, negative volatility or time) are rejected by [`Self::new`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Current underlying price (S > 0)
    pub spot: f64,
    /// Strike price (K > 0)
    pub strike: f64,
    /// Continuously compounded risk-free rate (annualized)
    pub rate: f64,
    /// Implied volatility (annualized, as decimal; σ ≥ 0)
    pub volatility: f64,
    /// Time to expiry in years (T ≥ 0)
    pub time_to_expiry: f64,
    /// Call or put
    pub option_type: OptionType,
}

impl OptionParameters {
    /// Build validated parameters, rejecting out-of-domain inputs.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        time_to_expiry: f64,
        option_type: OptionType,
    ) -> Result<Self> {
        let params = Self {
            spot,
            strike,
            rate,
            volatility,
            time_to_expiry,
            option_type,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the input domain. Callers constructing the struct directly
    /// (e.g. from deserialized config) should run this before pricing.
    pub fn validate(&self) -> Result<()> {
        if !self.spot.is_finite() || self.spot <= 0.0 {
            return Err(anyhow!("Spot must be finite and positive, got: {}", self.spot));
        }
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(anyhow!(
                "Strike must be finite and positive, got: {}",
                self.strike
            ));
        }
        if !self.rate.is_finite() {
            return Err(anyhow!("Rate must be finite, got: {}", self.rate));
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(anyhow!(
                "Volatility must be finite and non-negative, got: {}",
                self.volatility
            ));
        }
        if !self.time_to_expiry.is_finite() || self.time_to_expiry < 0.0 {
            return Err(anyhow!(
                "Time to expiry must be finite and non-negative, got: {}",
                self.time_to_expiry
            ));
        }
        Ok(())
    }

    /// Same parameters at a different spot (used when sweeping a spot grid)
    pub fn at_spot(&self, spot: f64) -> Self {
        Self { spot, ..*self }
    }
}

/// The five standard first-order sensitivities of the option price.
///
/// Scaling conventions (kept consistent across the crate):
/// - `vega` is per unit of volatility (multiply by 0.01 for a 1-vol-point move)
/// - `theta` is decay per year (divide by 365 for per-day decay)
/// - `rho` is per unit of rate (multiply by 0.01 for a 1%-rate move)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// dV/dS (sensitivity to spot)
    pub delta: f64,
    /// d²V/dS² (sensitivity of delta to spot)
    pub gamma: f64,
    /// dV/dσ (per unit volatility)
    pub vega: f64,
    /// dV/dt (time decay, per year)
    pub theta: f64,
    /// dV/dr (per unit rate)
    pub rho: f64,
}

/// A single option position settled at expiry.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionPayoff {
    /// Underlying price at expiry
    pub spot_at_expiry: f64,
    /// Strike price
    pub strike: f64,
    /// Premium paid (long) or received (short) at entry
    pub premium_paid: f64,
    /// Call or put
    pub option_type: OptionType,
    /// Long or short
    pub side: PositionSide,
}

impl PositionPayoff {
    /// Build a validated position, rejecting out-of-domain inputs.
    pub fn new(
        spot_at_expiry: f64,
        strike: f64,
        premium_paid: f64,
        option_type: OptionType,
        side: PositionSide,
    ) -> Result<Self> {
        if !spot_at_expiry.is_finite() || spot_at_expiry < 0.0 {
            return Err(anyhow!(
                "Spot at expiry must be finite and non-negative, got: {}",
                spot_at_expiry
            ));
        }
        if !strike.is_finite() || strike <= 0.0 {
            return Err(anyhow!("Strike must be finite and positive, got: {}", strike));
        }
        if !premium_paid.is_finite() || premium_paid < 0.0 {
            return Err(anyhow!(
                "Premium must be finite and non-negative, got: {}",
                premium_paid
            ));
        }
        Ok(Self {
            spot_at_expiry,
            strike,
            premium_paid,
            option_type,
            side,
        })
    }
}
