use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use parimutuel::application::engine::{PariMutuelEngine, PayoutPolicy};
use parimutuel::domain::{BetType, FinishingOrder, NewWager, Roster, Wager, WagerId};

pub const CONTESTANTS: [&str; 4] = ["A", "B", "C", "D"];

pub fn roster() -> Roster {
    Roster::shared(CONTESTANTS)
}

pub fn engine(policy: PayoutPolicy) -> PariMutuelEngine {
    PariMutuelEngine::new(roster(), policy)
}

/// Wager with a fixed timestamp; the bettor is the backed contestant.
pub fn wager(id: u64, contestant: &str, bet_type: BetType, amount: Decimal) -> Wager {
    bettor_wager(id, contestant, contestant, bet_type, amount)
}

pub fn bettor_wager(
    id: u64,
    bettor: &str,
    contestant: &str,
    bet_type: BetType,
    amount: Decimal,
) -> Wager {
    let placed_at = Utc.with_ymd_and_hms(2025, 6, 21, 14, 0, 0).unwrap();
    NewWager::try_new(bettor.into(), contestant.into(), bet_type, amount)
        .unwrap()
        .into_wager(WagerId::new(id), placed_at)
}

pub fn order(first: &str, second: &str, third: &str) -> FinishingOrder {
    FinishingOrder::try_new(first.into(), second.into(), third.into()).unwrap()
}
