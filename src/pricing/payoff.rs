//! Expiry payoff / PnL of a single option position.

use crate::types::PositionPayoff;

/// Realized PnL of a position at expiry.
///
/// Intrinsic value at expiry is `max(S_T - K, 0)` for a call and
/// `max(K - S_T, 0)` for a put. A long position earns
/// `intrinsic - premium_paid`; a short position earns the negation.
/// Total for all finite inputs.
pub fn payoff(position: &PositionPayoff) -> f64 {
    let intrinsic = position
        .option_type
        .intrinsic(position.spot_at_expiry, position.strike);
    position.side.sign() * (intrinsic - position.premium_paid)
}
