//! Shared numeric helpers for the Black-Scholes formulas.

use std::f64::consts::{PI, SQRT_2};

/// Standard normal cumulative distribution function.
///
/// Computed as `0.5 * (1 + erf(x / sqrt(2)))` on top of `libm::erf`, which is
/// accurate well beyond 1e-7 absolute error over the whole real line.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / SQRT_2))
}

/// Standard normal probability density function.
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes d1 term. Assumes `sigma > 0` and `t > 0`.
pub(crate) fn d1(spot: f64, strike: f64, rate: f64, sigma: f64, t: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}

/// Black-Scholes d2 term. Assumes `sigma > 0` and `t > 0`.
pub(crate) fn d2(spot: f64, strike: f64, rate: f64, sigma: f64, t: f64) -> f64 {
    d1(spot, strike, rate, sigma, t) - sigma * t.sqrt()
}
