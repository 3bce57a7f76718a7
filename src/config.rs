//! Scenario configuration loaded from TOML.
//!
//! The raw config mirrors the untyped fields a caller might collect from a
//! form or a file; [`ScenarioConfig::option_parameters`] and
//! [`ScenarioConfig::position_at`] validate at the boundary and hand the
//! typed values to the pure engine, so out-of-domain inputs are rejected with
//! a descriptive error instead of propagating NaN.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::sweep::SweepConfig;
use crate::types::{OptionParameters, OptionType, PositionPayoff, PositionSide};

/// Raw option inputs as they appear in a scenario file.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionConfig {
    pub spot: f64,
    pub strike: f64,
    #[serde(default)]
    pub rate: f64,
    pub volatility: f64,
    pub time_to_expiry: f64,
    pub option_type: OptionType,
}

/// Raw position inputs for the PnL curve.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionConfig {
    #[serde(default)]
    pub premium_paid: f64,
    #[serde(default = "default_side")]
    pub side: PositionSide,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            premium_paid: 0.0,
            side: default_side(),
        }
    }
}

fn default_side() -> PositionSide {
    PositionSide::Long
}

/// A complete pricing scenario: the option, the position held against it,
/// and the spot grid to sweep.
///
/// # Example
///
/// ```rust
/// use optcalc::ScenarioConfig;
///
/// let config = ScenarioConfig::from_toml_str(
///     r#"
///     [option]
///     spot = 100.0
///     strike = 100.0
///     rate = 0.05
///     volatility = 0.2
///     time_to_expiry = 1.0
///     option_type = "call"
///
///     [position]
///     premium_paid = 5.0
///     side = "long"
///     "#,
/// )?;
/// let params = config.option_parameters()?;
/// assert_eq!(params.strike, 100.0);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    pub option: OptionConfig,
    #[serde(default)]
    pub position: PositionConfig,
    #[serde(default)]
    pub sweep: SweepConfig,
}

impl ScenarioConfig {
    /// Parse a scenario from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("Failed to parse scenario TOML")
    }

    /// Load a scenario from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Validated engine parameters for the configured option.
    pub fn option_parameters(&self) -> Result<OptionParameters> {
        OptionParameters::new(
            self.option.spot,
            self.option.strike,
            self.option.rate,
            self.option.volatility,
            self.option.time_to_expiry,
            self.option.option_type,
        )
    }

    /// Validated position settled at the given expiry spot.
    pub fn position_at(&self, spot_at_expiry: f64) -> Result<PositionPayoff> {
        PositionPayoff::new(
            spot_at_expiry,
            self.option.strike,
            self.position.premium_paid,
            self.option.option_type,
            self.position.side,
        )
    }
}
