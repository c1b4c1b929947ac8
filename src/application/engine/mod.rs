//! Pari-mutuel payout engine.
//!
//! Given a snapshot of wagers and a finishing order, the engine works out
//! how much of the pooled money each wager is owed:
//!
//! 1. Every stake is split across the Win, Place and Show pools by its bet
//!    type (see [`BetType::split`](crate::domain::BetType::split)).
//! 2. Each pool's size is its straight stake: money wagered with that bet
//!    type.
//! 3. Contributions are eligible to claim a pool according to the placing of
//!    the backed contestant (see [`is_eligible`]).
//! 4. Pools holding money but no eligible claims are degenerate; their stake
//!    is redistributed or refunded according to [`DegeneratePolicy`]. When
//!    no pool has claims at all, every stake is refunded.
//! 5. Each pool pays `effective stake / eligible contributions` per unit of
//!    eligible contribution.
//! 6. Payouts are optionally rescaled so the total paid equals the total
//!    wagered.
//!
//! The engine is a pure function of its inputs: it holds no state between
//! calls, and wagers are settled in id order so the order of the snapshot
//! does not matter.

mod eligibility;
mod policy;

pub use eligibility::is_eligible;
pub use policy::{DegeneratePolicy, PayoutPolicy};

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    check_stake, Amount, FinishingOrder, InvalidOrderError, PayoutError, PayoutLine,
    PayoutReport, PoolAmounts, PoolName, PoolSummary, Resolution, Roster, Totals, Wager,
};

/// Computes payout reports for a fixed roster and policy.
#[derive(Debug, Clone)]
pub struct PariMutuelEngine {
    roster: Roster,
    policy: PayoutPolicy,
}

impl PariMutuelEngine {
    #[must_use]
    pub const fn new(roster: Roster, policy: PayoutPolicy) -> Self {
        Self { roster, policy }
    }

    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub const fn policy(&self) -> &PayoutPolicy {
        &self.policy
    }

    /// Compute the payout owed to every wager in `wagers`.
    ///
    /// Lines are reported in wager id order, whatever the order of the
    /// snapshot.
    ///
    /// Fails when `order` is unset or places a contestant that is not on the
    /// roster. Contestants without wagers are fine. Arithmetic edge cases
    /// (empty pools, nothing eligible) never fail. Stakes outside the ledger's
    /// limits are refused with [`PayoutError::InvalidStake`], and arithmetic
    /// leaving `Decimal`'s range reports [`PayoutError::Overflow`].
    pub fn compute(
        &self,
        wagers: &[Wager],
        order: Option<&FinishingOrder>,
    ) -> Result<PayoutReport, PayoutError> {
        let order = order.ok_or(InvalidOrderError::Unset)?;
        self.roster.check_order(order)?;

        let mut wagers: Vec<&Wager> = wagers.iter().collect();
        wagers.sort_by_key(|wager| wager.id);
        for wager in &wagers {
            check_stake(wager.amount).map_err(|source| PayoutError::InvalidStake {
                id: wager.id,
                source,
            })?;
        }

        let tally = Tally::collect(&wagers, order).ok_or(PayoutError::Overflow)?;
        let settlement =
            Settlement::resolve(&tally, self.policy.degenerate).ok_or(PayoutError::Overflow)?;

        let mut lines = wagers
            .iter()
            .map(|wager| settlement.line(wager, order))
            .collect::<Option<Vec<PayoutLine>>>()
            .ok_or(PayoutError::Overflow)?;

        let raw_paid = sum_totals(&lines).ok_or(PayoutError::Overflow)?;
        let normalization = self.normalization_factor(tally.wagered, raw_paid);
        if let Some(factor) = normalization {
            debug!(%factor, %raw_paid, wagered = %tally.wagered, "Normalizing payouts");
            lines = lines
                .into_iter()
                .map(|line| line.checked_scaled(factor))
                .collect::<Option<Vec<PayoutLine>>>()
                .ok_or(PayoutError::Overflow)?;
        }
        let paid = sum_totals(&lines).ok_or(PayoutError::Overflow)?;

        let pools = PoolName::ALL.map(|pool| settlement.summary(&tally, pool));
        for summary in &pools {
            debug!(
                pool = %summary.pool,
                stake = %summary.stake,
                eligible = %summary.eligible,
                received = %summary.received,
                ratio = %summary.ratio,
                degenerate = summary.degenerate,
                "Pool settled"
            );
        }

        Ok(PayoutReport {
            lines,
            pools,
            totals: Totals {
                wagered: tally.wagered,
                paid,
            },
            resolution: settlement.resolution,
            normalization,
        })
    }

    /// Scale factor restoring `paid == wagered`, when drift exceeds epsilon.
    fn normalization_factor(&self, wagered: Amount, raw_paid: Amount) -> Option<Decimal> {
        if !self.policy.normalize || raw_paid <= Decimal::ZERO {
            return None;
        }
        let drift = raw_paid.checked_sub(wagered)?.abs();
        if drift <= self.policy.epsilon {
            return None;
        }
        wagered.checked_div(raw_paid)
    }
}

fn sum_totals(lines: &[PayoutLine]) -> Option<Amount> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.total))
}

/// Order-dependent aggregates gathered in one pass over the snapshot.
#[derive(Debug, Default)]
struct Tally {
    /// Straight stake per pool.
    stake: PoolAmounts,
    /// Eligible contributions per pool.
    eligible: PoolAmounts,
    wagered: Amount,
}

impl Tally {
    fn collect(wagers: &[&Wager], order: &FinishingOrder) -> Option<Self> {
        let mut tally = Self::default();
        for wager in wagers {
            tally.wagered = tally.wagered.checked_add(wager.amount)?;
            tally.stake.checked_add(wager.bet_type.pool(), wager.amount)?;

            let placing = order.placing_of(&wager.contestant);
            for (pool, share) in wager.contributions().iter() {
                if is_eligible(pool, wager.bet_type, placing) {
                    tally.eligible.checked_add(pool, share)?;
                }
            }
        }
        Some(tally)
    }

    fn is_degenerate(&self, pool: PoolName) -> bool {
        self.eligible.get(pool).is_zero() && self.stake.get(pool) > Decimal::ZERO
    }

    fn has_claims(&self, pool: PoolName) -> bool {
        self.eligible.get(pool) > Decimal::ZERO
    }
}

/// Per-pool ratios and refund decisions derived from a [`Tally`].
#[derive(Debug)]
struct Settlement {
    resolution: Resolution,
    received: PoolAmounts,
    ratio: PoolAmounts,
    /// Pools whose stake goes back to the wagers that formed them.
    refunded: [bool; 3],
}

impl Settlement {
    fn resolve(tally: &Tally, policy: DegeneratePolicy) -> Option<Self> {
        let mut settlement = Self {
            resolution: Resolution::Settled,
            received: PoolAmounts::ZERO,
            ratio: PoolAmounts::ZERO,
            refunded: [false; 3],
        };

        if tally.wagered.is_zero() {
            settlement.resolution = Resolution::Empty;
            return Some(settlement);
        }

        let recipients: Vec<PoolName> = PoolName::ALL
            .into_iter()
            .filter(|pool| tally.has_claims(*pool))
            .collect();
        if recipients.is_empty() {
            settlement.resolution = Resolution::FullRefund;
            return Some(settlement);
        }

        for pool in PoolName::ALL.into_iter().filter(|p| tally.is_degenerate(*p)) {
            match policy {
                DegeneratePolicy::Redistribute => {
                    settlement.redistribute(tally.stake.get(pool), &recipients, &tally.stake)?;
                }
                DegeneratePolicy::Refund => settlement.refunded[pool_index(pool)] = true,
            }
        }

        for pool in recipients {
            let effective = tally.stake.get(pool).checked_add(settlement.received.get(pool))?;
            *settlement.ratio.get_mut(pool) = effective.checked_div(tally.eligible.get(pool))?;
        }
        Some(settlement)
    }

    /// Spread `amount` over `recipients` by their own stake, or evenly when
    /// none of them has stake. The last recipient takes the remainder so the
    /// shares sum to `amount` exactly.
    fn redistribute(
        &mut self,
        amount: Amount,
        recipients: &[PoolName],
        stake: &PoolAmounts,
    ) -> Option<()> {
        let weight_total = recipients
            .iter()
            .try_fold(Decimal::ZERO, |sum, pool| sum.checked_add(stake.get(*pool)))?;
        let count = Decimal::from(recipients.len());
        let mut remaining = amount;

        for (i, pool) in recipients.iter().enumerate() {
            let share = if i + 1 == recipients.len() {
                remaining.max(Decimal::ZERO)
            } else if weight_total > Decimal::ZERO {
                amount
                    .checked_mul(stake.get(*pool))?
                    .checked_div(weight_total)?
            } else {
                amount.checked_div(count)?
            };
            remaining = remaining.checked_sub(share)?;
            self.received.checked_add(*pool, share)?;
        }
        Some(())
    }

    fn line(&self, wager: &Wager, order: &FinishingOrder) -> Option<PayoutLine> {
        let line = match self.resolution {
            Resolution::FullRefund => PayoutLine::new(wager, PoolAmounts::ZERO, wager.amount),
            Resolution::Empty => PayoutLine::new(wager, PoolAmounts::ZERO, Decimal::ZERO),
            Resolution::Settled => {
                let placing = order.placing_of(&wager.contestant);
                let mut won = PoolAmounts::ZERO;
                for (pool, share) in wager.contributions().iter() {
                    if is_eligible(pool, wager.bet_type, placing) {
                        won.checked_add(pool, share.checked_mul(self.ratio.get(pool))?)?;
                    }
                }
                let refund = if self.refunded[pool_index(wager.bet_type.pool())] {
                    wager.amount
                } else {
                    Decimal::ZERO
                };
                PayoutLine::new(wager, won, refund)
            }
        };
        Some(line)
    }

    fn summary(&self, tally: &Tally, pool: PoolName) -> PoolSummary {
        let stake = tally.stake.get(pool);
        let received = self.received.get(pool);
        PoolSummary {
            pool,
            stake,
            eligible: tally.eligible.get(pool),
            received,
            effective: stake + received,
            ratio: self.ratio.get(pool),
            degenerate: tally.is_degenerate(pool),
        }
    }
}

const fn pool_index(pool: PoolName) -> usize {
    match pool {
        PoolName::Win => 0,
        PoolName::Place => 1,
        PoolName::Show => 2,
    }
}
