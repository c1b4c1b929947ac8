//! Monetary types for stake and payout representation.

use rust_decimal::Decimal;

/// Currency amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Payout multiplier (money returned per unit of eligible contribution).
pub type Ratio = Decimal;

/// Largest stake a single wager may carry.
pub const MAX_STAKE: Amount = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Stakes are whole cents.
pub const STAKE_SCALE: u32 = 2;

/// Round an amount to whole cents for display.
#[must_use]
pub fn to_cents(amount: Amount) -> Amount {
    amount.round_dp(2)
}
