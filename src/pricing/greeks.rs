//! Black-Scholes Greeks for European options.

use crate::pricing::math::{d1, d2, norm_cdf, norm_pdf};
use crate::types::{GreeksResult, OptionParameters, OptionType};

/// The five standard Greeks of a European option.
///
/// Scaling conventions (see [`GreeksResult`]): vega per unit volatility,
/// theta as decay per year, rho per unit rate.
///
/// The closed-form sensitivities require `volatility > 0` and
/// `time_to_expiry > 0`. When either is zero the expiry-limit Greeks are
/// returned: delta is the in-the-money indicator (1 for an ITM call, -1 for
/// an ITM put, 0 otherwise) and all other Greeks are zero.
pub fn greeks(params: &OptionParameters) -> GreeksResult {
    let OptionParameters {
        spot,
        strike,
        rate,
        volatility,
        time_to_expiry: t,
        option_type,
    } = *params;

    if t <= 0.0 || volatility <= 0.0 {
        let delta = match option_type {
            OptionType::Call => {
                if spot > strike {
                    1.0
                } else {
                    0.0
                }
            }
            OptionType::Put => {
                if spot < strike {
                    -1.0
                } else {
                    0.0
                }
            }
        };
        return GreeksResult {
            delta,
            ..GreeksResult::default()
        };
    }

    let d1 = d1(spot, strike, rate, volatility, t);
    let d2 = d2(spot, strike, rate, volatility, t);
    let sqrt_t = t.sqrt();
    let df = (-rate * t).exp();
    let pdf_d1 = norm_pdf(d1);

    let delta = match option_type {
        OptionType::Call => norm_cdf(d1),
        OptionType::Put => norm_cdf(d1) - 1.0,
    };

    // Gamma and vega are identical for calls and puts.
    let gamma = pdf_d1 / (spot * volatility * sqrt_t);
    let vega = spot * pdf_d1 * sqrt_t;

    let decay = -spot * pdf_d1 * volatility / (2.0 * sqrt_t);
    let theta = match option_type {
        OptionType::Call => decay - rate * strike * df * norm_cdf(d2),
        OptionType::Put => decay + rate * strike * df * norm_cdf(-d2),
    };

    let rho = match option_type {
        OptionType::Call => strike * t * df * norm_cdf(d2),
        OptionType::Put => -strike * t * df * norm_cdf(-d2),
    };

    GreeksResult {
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}
