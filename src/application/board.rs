//! Pre-result odds board.
//!
//! Shows how big each pool is and what a contestant's straight backers would
//! collect per unit staked if that contestant finished in the paying
//! position: `pool stake / stake on the contestant for that bet type`.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Amount, ParticipantId, PoolAmounts, PoolName, Ratio, Roster, Wager};

/// Hypothetical ratio per pool; `None` when nothing is staked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HypotheticalRatios {
    pub win: Option<Ratio>,
    pub place: Option<Ratio>,
    pub show: Option<Ratio>,
}

impl HypotheticalRatios {
    #[must_use]
    pub const fn get(&self, pool: PoolName) -> Option<Ratio> {
        match pool {
            PoolName::Win => self.win,
            PoolName::Place => self.place,
            PoolName::Show => self.show,
        }
    }
}

/// One row of the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContestantOdds {
    pub contestant: ParticipantId,
    /// Straight stake on this contestant, per bet type.
    pub staked: PoolAmounts,
    pub ratios: HypotheticalRatios,
}

/// Pool sizes and per-contestant hypothetical ratios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OddsBoard {
    pub pools: PoolAmounts,
    pub total: Amount,
    pub wagers: usize,
    pub contestants: Vec<ContestantOdds>,
}

impl OddsBoard {
    /// Build the board for `wagers`, listing contestants in roster order.
    ///
    /// Contestants with wagers that are no longer on the roster are appended
    /// after the roster, in name order.
    #[must_use]
    pub fn build(roster: &Roster, wagers: &[Wager]) -> Self {
        let mut pools = PoolAmounts::ZERO;
        let mut by_contestant: HashMap<&ParticipantId, PoolAmounts> = HashMap::new();
        for wager in wagers {
            let pool = wager.bet_type.pool();
            pools.add(pool, wager.amount);
            by_contestant
                .entry(&wager.contestant)
                .or_default()
                .add(pool, wager.amount);
        }

        let mut order: Vec<&ParticipantId> = roster.contestants().iter().collect();
        let mut strays: Vec<&ParticipantId> = by_contestant
            .keys()
            .copied()
            .filter(|c| !roster.is_contestant(c))
            .collect();
        strays.sort();
        order.extend(strays);

        let contestants = order
            .into_iter()
            .map(|contestant| {
                let staked = by_contestant.get(contestant).copied().unwrap_or_default();
                ContestantOdds {
                    contestant: contestant.clone(),
                    staked,
                    ratios: HypotheticalRatios {
                        win: ratio(pools.win, staked.win),
                        place: ratio(pools.place, staked.place),
                        show: ratio(pools.show, staked.show),
                    },
                }
            })
            .collect();

        Self {
            pools,
            total: pools.total(),
            wagers: wagers.len(),
            contestants,
        }
    }

    /// Row for `contestant`, if listed.
    #[must_use]
    pub fn contestant(&self, contestant: &ParticipantId) -> Option<&ContestantOdds> {
        self.contestants.iter().find(|row| row.contestant == *contestant)
    }
}

fn ratio(pool: Amount, staked: Amount) -> Option<Ratio> {
    (staked > Decimal::ZERO).then(|| pool / staked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BetType, WagerId};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn wager(id: u64, contestant: &str, bet_type: BetType, amount: Amount) -> Wager {
        Wager {
            id: WagerId::new(id),
            bettor: "X".into(),
            contestant: contestant.into(),
            bet_type,
            amount,
            placed_at: Utc::now(),
        }
    }

    #[test]
    fn pools_and_ratios() {
        let roster = Roster::shared(["A", "B", "C"]);
        let wagers = vec![
            wager(1, "A", BetType::Win, dec!(30)),
            wager(2, "B", BetType::Win, dec!(10)),
            wager(3, "A", BetType::Show, dec!(20)),
        ];
        let board = OddsBoard::build(&roster, &wagers);

        assert_eq!(board.pools, PoolAmounts::new(dec!(40), dec!(0), dec!(20)));
        assert_eq!(board.total, dec!(60));
        assert_eq!(board.wagers, 3);

        let a = board.contestant(&"A".into()).unwrap();
        assert_eq!(a.ratios.win, Some(dec!(40) / dec!(30)));
        assert_eq!(a.ratios.place, None);
        assert_eq!(a.ratios.show, Some(dec!(1)));

        let b = board.contestant(&"B".into()).unwrap();
        assert_eq!(b.ratios.get(PoolName::Win), Some(dec!(4)));
    }

    #[test]
    fn lists_every_roster_contestant_in_order() {
        let roster = Roster::shared(["C", "A", "B"]);
        let board = OddsBoard::build(&roster, &[]);
        let names: Vec<_> = board
            .contestants
            .iter()
            .map(|row| row.contestant.as_str())
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert!(board.contestants.iter().all(|row| row.ratios == HypotheticalRatios::default()));
    }

    #[test]
    fn contestants_dropped_from_roster_still_show() {
        let roster = Roster::shared(["A", "B", "C"]);
        let wagers = vec![wager(1, "Retired", BetType::Place, dec!(5))];
        let board = OddsBoard::build(&roster, &wagers);
        assert_eq!(board.contestants.len(), 4);
        assert_eq!(board.contestants[3].contestant.as_str(), "Retired");
    }
}
