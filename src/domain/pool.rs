//! Pool identifiers and per-pool amount buckets.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Amount;

/// One of the three accumulation buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolName {
    Win,
    Place,
    Show,
}

impl PoolName {
    /// All pools in display order.
    pub const ALL: [Self; 3] = [Self::Win, Self::Place, Self::Show];

    /// Stable name used in logs and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Win => "win",
            Self::Place => "place",
            Self::Show => "show",
        }
    }
}

impl fmt::Display for PoolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Win => "Win",
            Self::Place => "Place",
            Self::Show => "Show",
        };
        f.write_str(label)
    }
}

/// One amount per pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolAmounts {
    pub win: Amount,
    pub place: Amount,
    pub show: Amount,
}

impl PoolAmounts {
    /// All pools zero.
    pub const ZERO: Self = Self {
        win: Decimal::ZERO,
        place: Decimal::ZERO,
        show: Decimal::ZERO,
    };

    #[must_use]
    pub const fn new(win: Amount, place: Amount, show: Amount) -> Self {
        Self { win, place, show }
    }

    /// Amount held for `pool`.
    #[must_use]
    pub const fn get(&self, pool: PoolName) -> Amount {
        match pool {
            PoolName::Win => self.win,
            PoolName::Place => self.place,
            PoolName::Show => self.show,
        }
    }

    /// Mutable slot for `pool`.
    pub fn get_mut(&mut self, pool: PoolName) -> &mut Amount {
        match pool {
            PoolName::Win => &mut self.win,
            PoolName::Place => &mut self.place,
            PoolName::Show => &mut self.show,
        }
    }

    /// Add `amount` to `pool`.
    pub fn add(&mut self, pool: PoolName, amount: Amount) {
        *self.get_mut(pool) += amount;
    }

    /// Add `amount` to `pool`, or `None` if the sum leaves `Decimal`'s range.
    #[must_use]
    pub fn checked_add(&mut self, pool: PoolName, amount: Amount) -> Option<()> {
        let slot = self.get_mut(pool);
        *slot = slot.checked_add(amount)?;
        Some(())
    }

    /// Sum across all pools.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.win + self.place + self.show
    }

    /// Iterate `(pool, amount)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PoolName, Amount)> + '_ {
        PoolName::ALL.into_iter().map(move |pool| (pool, self.get(pool)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn add_and_total() {
        let mut amounts = PoolAmounts::ZERO;
        amounts.add(PoolName::Win, dec!(10));
        amounts.add(PoolName::Show, dec!(5));
        amounts.add(PoolName::Show, dec!(2.5));

        assert_eq!(amounts.get(PoolName::Win), dec!(10));
        assert_eq!(amounts.get(PoolName::Place), dec!(0));
        assert_eq!(amounts.get(PoolName::Show), dec!(7.5));
        assert_eq!(amounts.total(), dec!(17.5));
    }

    #[test]
    fn checked_add_refuses_overflow() {
        let mut amounts = PoolAmounts::new(Decimal::MAX, dec!(0), dec!(0));
        assert_eq!(amounts.checked_add(PoolName::Win, dec!(1)), None);
        assert_eq!(amounts.win, Decimal::MAX);

        assert_eq!(amounts.checked_add(PoolName::Place, dec!(2.5)), Some(()));
        assert_eq!(amounts.place, dec!(2.5));
    }

    #[test]
    fn iter_follows_display_order() {
        let names: Vec<_> = PoolAmounts::ZERO.iter().map(|(p, _)| p).collect();
        assert_eq!(names, PoolName::ALL.to_vec());
    }
}
