//! Closed-form Black-Scholes price for European options.

use crate::pricing::math::{d1, d2, norm_cdf};
use crate::types::{OptionParameters, OptionType};

/// Black-Scholes price of a European option.
///
/// Degenerate inputs are handled explicitly instead of dividing by zero:
/// - `time_to_expiry <= 0` returns the intrinsic value;
/// - `volatility <= 0` (with positive time) returns the discounted intrinsic
///   value, `max(S - K·e^(-rT), 0)` for a call and the mirror for a put.
///
/// Assumes parameters are in-domain (see [`OptionParameters::validate`]).
pub fn price(params: &OptionParameters) -> f64 {
    let OptionParameters {
        spot,
        strike,
        rate,
        volatility,
        time_to_expiry: t,
        option_type,
    } = *params;

    if t <= 0.0 {
        return option_type.intrinsic(spot, strike);
    }

    if volatility <= 0.0 {
        // Zero vol: the option settles at its forward intrinsic value.
        let discounted_strike = strike * (-rate * t).exp();
        return option_type.intrinsic(spot, discounted_strike);
    }

    let d1 = d1(spot, strike, rate, volatility, t);
    let d2 = d2(spot, strike, rate, volatility, t);
    let df = (-rate * t).exp();

    match option_type {
        OptionType::Call => spot * norm_cdf(d1) - strike * df * norm_cdf(d2),
        OptionType::Put => strike * df * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}
