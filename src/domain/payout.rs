//! Payout report types produced by the engine.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::id::{ParticipantId, WagerId};
use super::money::{Amount, Ratio};
use super::pool::{PoolAmounts, PoolName};
use super::wager::{BetType, Wager};

/// Money owed to a single wager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutLine {
    pub wager_id: WagerId,
    pub bettor: ParticipantId,
    pub contestant: ParticipantId,
    pub bet_type: BetType,
    pub amount: Amount,
    pub win: Amount,
    pub place: Amount,
    pub show: Amount,
    /// Stake returned because the wager's pool had no eligible claims.
    pub refund: Amount,
    pub total: Amount,
}

impl PayoutLine {
    /// Build a line from per-pool winnings plus any refund.
    #[must_use]
    pub fn new(wager: &Wager, pools: PoolAmounts, refund: Amount) -> Self {
        Self {
            wager_id: wager.id,
            bettor: wager.bettor.clone(),
            contestant: wager.contestant.clone(),
            bet_type: wager.bet_type,
            amount: wager.amount,
            win: pools.win,
            place: pools.place,
            show: pools.show,
            refund,
            total: pools.total() + refund,
        }
    }

    /// Scale every amount by `factor`, or `None` on overflow.
    #[must_use]
    pub fn checked_scaled(mut self, factor: Decimal) -> Option<Self> {
        self.win = self.win.checked_mul(factor)?;
        self.place = self.place.checked_mul(factor)?;
        self.show = self.show.checked_mul(factor)?;
        self.refund = self.refund.checked_mul(factor)?;
        self.total = self
            .win
            .checked_add(self.place)?
            .checked_add(self.show)?
            .checked_add(self.refund)?;
        Some(self)
    }

    /// Payout minus stake.
    #[must_use]
    pub fn net(&self) -> Amount {
        self.total - self.amount
    }
}

/// Accounting for one pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolSummary {
    pub pool: PoolName,
    /// Straight stake: money wagered with this bet type.
    pub stake: Amount,
    /// Sum of eligible contributions claiming this pool.
    pub eligible: Amount,
    /// Money redistributed into this pool from degenerate pools.
    pub received: Amount,
    /// `stake + received`.
    pub effective: Amount,
    /// `effective / eligible`, zero when nothing is eligible.
    pub ratio: Ratio,
    /// Money was staked but no contribution is eligible to claim it.
    pub degenerate: bool,
}

/// How the pools were settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// At least one pool had eligible claims.
    Settled,
    /// No pool had eligible claims; every stake was returned.
    FullRefund,
    /// Nothing was wagered.
    Empty,
}

/// Money in and money out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub wagered: Amount,
    pub paid: Amount,
}

/// Complete result of a payout computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoutReport {
    pub lines: Vec<PayoutLine>,
    pub pools: [PoolSummary; 3],
    pub totals: Totals,
    pub resolution: Resolution,
    /// Scale factor applied to restore conservation, if any.
    pub normalization: Option<Decimal>,
}

impl PayoutReport {
    /// Summary for `pool`.
    #[must_use]
    pub fn pool(&self, pool: PoolName) -> &PoolSummary {
        match pool {
            PoolName::Win => &self.pools[0],
            PoolName::Place => &self.pools[1],
            PoolName::Show => &self.pools[2],
        }
    }

    /// Line for `id`, if the wager is in the report.
    #[must_use]
    pub fn line(&self, id: WagerId) -> Option<&PayoutLine> {
        self.lines.iter().find(|line| line.wager_id == id)
    }

    /// `paid - wagered`; zero when conservation holds exactly.
    #[must_use]
    pub fn imbalance(&self) -> Amount {
        self.totals.paid - self.totals.wagered
    }

    /// Per-bettor totals, sorted by bettor name.
    #[must_use]
    pub fn bettor_summaries(&self) -> Vec<BettorSummary> {
        let mut by_bettor: BTreeMap<&ParticipantId, BettorSummary> = BTreeMap::new();
        for line in &self.lines {
            let entry = by_bettor
                .entry(&line.bettor)
                .or_insert_with(|| BettorSummary::new(line.bettor.clone()));
            entry.wagers += 1;
            entry.wagered += line.amount;
            entry.paid += line.total;
        }
        by_bettor
            .into_values()
            .map(|mut summary| {
                summary.net = summary.paid - summary.wagered;
                summary
            })
            .collect()
    }
}

/// What one bettor put in and got back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BettorSummary {
    pub bettor: ParticipantId,
    pub wagers: usize,
    pub wagered: Amount,
    pub paid: Amount,
    pub net: Amount,
}

impl BettorSummary {
    fn new(bettor: ParticipantId) -> Self {
        Self {
            bettor,
            wagers: 0,
            wagered: Decimal::ZERO,
            paid: Decimal::ZERO,
            net: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn wager(id: u64, bettor: &str, bet_type: BetType, amount: Amount) -> Wager {
        Wager {
            id: WagerId::new(id),
            bettor: bettor.into(),
            contestant: "A".into(),
            bet_type,
            amount,
            placed_at: Utc::now(),
        }
    }

    #[test]
    fn line_total_includes_refund() {
        let w = wager(1, "X", BetType::Win, dec!(10));
        let line = PayoutLine::new(&w, PoolAmounts::new(dec!(4), dec!(1), dec!(2)), dec!(3));
        assert_eq!(line.total, dec!(10));
        assert_eq!(line.net(), dec!(0));
    }

    #[test]
    fn scaled_line_recomputes_total() {
        let w = wager(1, "X", BetType::Show, dec!(10));
        let line = PayoutLine::new(&w, PoolAmounts::new(dec!(0), dec!(0), dec!(5)), dec!(0));
        let scaled = line.clone().checked_scaled(dec!(2)).unwrap();
        assert_eq!(scaled.show, dec!(10));
        assert_eq!(scaled.total, dec!(10));
        assert_eq!(line.checked_scaled(Decimal::MAX), None);
    }

    #[test]
    fn bettor_summaries_group_and_sort() {
        let lines = vec![
            PayoutLine::new(
                &wager(1, "Zed", BetType::Win, dec!(10)),
                PoolAmounts::new(dec!(30), dec!(0), dec!(0)),
                dec!(0),
            ),
            PayoutLine::new(
                &wager(2, "Amy", BetType::Show, dec!(5)),
                PoolAmounts::ZERO,
                dec!(0),
            ),
            PayoutLine::new(
                &wager(3, "Zed", BetType::Show, dec!(15)),
                PoolAmounts::ZERO,
                dec!(0),
            ),
        ];
        let summary = |pool| PoolSummary {
            pool,
            stake: dec!(0),
            eligible: dec!(0),
            received: dec!(0),
            effective: dec!(0),
            ratio: dec!(0),
            degenerate: false,
        };
        let report = PayoutReport {
            lines,
            pools: [
                summary(PoolName::Win),
                summary(PoolName::Place),
                summary(PoolName::Show),
            ],
            totals: Totals {
                wagered: dec!(30),
                paid: dec!(30),
            },
            resolution: Resolution::Settled,
            normalization: None,
        };

        let summaries = report.bettor_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].bettor.as_str(), "Amy");
        assert_eq!(summaries[0].net, dec!(-5));
        assert_eq!(summaries[1].bettor.as_str(), "Zed");
        assert_eq!(summaries[1].wagers, 2);
        assert_eq!(summaries[1].wagered, dec!(25));
        assert_eq!(summaries[1].paid, dec!(30));
        assert_eq!(summaries[1].net, dec!(5));
        assert_eq!(report.imbalance(), dec!(0));
    }
}
