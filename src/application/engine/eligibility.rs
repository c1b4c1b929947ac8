//! Which contributions may claim which pool, given a placing.

use crate::domain::{BetType, Placing, PoolName};

/// True when a wager of `bet_type` on a contestant that finished at
/// `placing` may claim `pool`.
///
/// The winner's backers collect from every pool their bet type feeds.
/// Lower placings collect only from pools at or below the bet they made:
/// second place pays Place and Show bets, third place pays Show bets.
#[must_use]
pub const fn is_eligible(pool: PoolName, bet_type: BetType, placing: Placing) -> bool {
    match pool {
        PoolName::Win => matches!((placing, bet_type), (Placing::First, BetType::Win)),
        PoolName::Place => matches!(
            (placing, bet_type),
            (Placing::First, BetType::Win | BetType::Place) | (Placing::Second, BetType::Place)
        ),
        PoolName::Show => matches!(
            (placing, bet_type),
            (Placing::First, _)
                | (Placing::Second, BetType::Place | BetType::Show)
                | (Placing::Third, BetType::Show)
        ),
    }
}
