//! Spot-grid sweeps: batch price / delta / expiry-PnL curves for charting.

use anyhow::{anyhow, Result};

use crate::pricing::{greeks, payoff, price};
use crate::types::{OptionParameters, PositionPayoff, PositionSide};

/// Spot grid for a sweep, expressed as ratios of the strike.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig {
    /// Lowest grid spot as a fraction of the strike
    #[cfg_attr(feature = "serde", serde(default = "default_min_ratio"))]
    pub min_ratio: f64,

    /// Highest grid spot as a fraction of the strike
    #[cfg_attr(feature = "serde", serde(default = "default_max_ratio"))]
    pub max_ratio: f64,

    /// Number of grid points (inclusive of both ends)
    #[cfg_attr(feature = "serde", serde(default = "default_steps"))]
    pub steps: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_ratio: default_min_ratio(),
            max_ratio: default_max_ratio(),
            steps: default_steps(),
        }
    }
}

impl SweepConfig {
    /// Coarse grid for quick tables and tests
    pub fn coarse() -> Self {
        Self {
            steps: 50,
            ..Self::default()
        }
    }

    /// Fine grid for smooth chart lines
    pub fn fine() -> Self {
        Self {
            steps: 500,
            ..Self::default()
        }
    }

    /// Check the grid definition before sweeping.
    pub fn validate(&self) -> Result<()> {
        if !self.min_ratio.is_finite() || self.min_ratio <= 0.0 {
            return Err(anyhow!(
                "min_ratio must be finite and positive, got: {}",
                self.min_ratio
            ));
        }
        if !self.max_ratio.is_finite() || self.max_ratio <= self.min_ratio {
            return Err(anyhow!(
                "max_ratio must exceed min_ratio, got: [{}, {}]",
                self.min_ratio,
                self.max_ratio
            ));
        }
        if self.steps < 2 {
            return Err(anyhow!("steps must be at least 2, got: {}", self.steps));
        }
        Ok(())
    }
}

fn default_min_ratio() -> f64 {
    0.5
}

fn default_max_ratio() -> f64 {
    1.5
}

fn default_steps() -> usize {
    200
}

/// Per-spot curves produced by [`sweep_spot`]. All vectors have equal length
/// and `spots` is ascending.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpotCurves {
    /// Swept spot grid
    pub spots: Vec<f64>,
    /// Black-Scholes price at each spot
    pub prices: Vec<f64>,
    /// Delta at each spot
    pub deltas: Vec<f64>,
    /// Position PnL at expiry for each settlement spot
    pub pnls: Vec<f64>,
}

impl SpotCurves {
    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

/// Evaluate price, delta, and expiry PnL over a spot grid around the strike.
///
/// Each grid point is an independent call into the pure engine with the same
/// rate, volatility, and time to expiry; only the spot varies. The PnL curve
/// treats the grid spot as the settlement price of a position entered at
/// `premium_paid` on the given `side`.
pub fn sweep_spot(
    params: &OptionParameters,
    premium_paid: f64,
    side: PositionSide,
    config: &SweepConfig,
) -> Result<SpotCurves> {
    params.validate()?;
    config.validate()?;
    if !premium_paid.is_finite() || premium_paid < 0.0 {
        return Err(anyhow!(
            "Premium must be finite and non-negative, got: {}",
            premium_paid
        ));
    }

    let lo = config.min_ratio * params.strike;
    let hi = config.max_ratio * params.strike;
    let n = config.steps;

    let mut curves = SpotCurves {
        spots: Vec::with_capacity(n),
        prices: Vec::with_capacity(n),
        deltas: Vec::with_capacity(n),
        pnls: Vec::with_capacity(n),
    };

    for i in 0..n {
        let spot = lo + (hi - lo) * (i as f64) / ((n - 1) as f64);
        let point = params.at_spot(spot);
        let position = PositionPayoff {
            spot_at_expiry: spot,
            strike: params.strike,
            premium_paid,
            option_type: params.option_type,
            side,
        };

        curves.spots.push(spot);
        curves.prices.push(price(&point));
        curves.deltas.push(greeks(&point).delta);
        curves.pnls.push(payoff(&position));
    }

    Ok(curves)
}
