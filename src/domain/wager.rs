//! Wager records and the each-way contribution split.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::id::{ParticipantId, WagerId};
use super::money::{Amount, MAX_STAKE, STAKE_SCALE};
use super::pool::{PoolAmounts, PoolName};

/// Kind of wager placed on a contestant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetType {
    Win,
    Place,
    Show,
}

impl BetType {
    /// The straight pool this bet type's stake belongs to.
    #[must_use]
    pub const fn pool(self) -> PoolName {
        match self {
            Self::Win => PoolName::Win,
            Self::Place => PoolName::Place,
            Self::Show => PoolName::Show,
        }
    }

    /// Split a stake across pools using the each-way convention.
    ///
    /// A Win bet also backs Place and Show in equal thirds; a Place bet also
    /// backs Show in halves; a Show bet stays whole.
    #[must_use]
    pub fn split(self, amount: Amount) -> PoolAmounts {
        match self {
            Self::Win => {
                let third = amount / Decimal::from(3);
                PoolAmounts::new(third, third, third)
            }
            Self::Place => {
                let half = amount / Decimal::from(2);
                PoolAmounts::new(Decimal::ZERO, half, half)
            }
            Self::Show => PoolAmounts::new(Decimal::ZERO, Decimal::ZERO, amount),
        }
    }
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pool())
    }
}

impl FromStr for BetType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" => Ok(Self::Win),
            "place" => Ok(Self::Place),
            "show" => Ok(Self::Show),
            _ => Err(ValidationError::UnknownBetType {
                value: s.to_string(),
            }),
        }
    }
}

/// Check that `amount` is a stake the ledger accepts: positive, at most
/// [`MAX_STAKE`], in whole cents.
pub fn check_stake(amount: Amount) -> Result<(), ValidationError> {
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount { amount });
    }
    if amount > MAX_STAKE {
        return Err(ValidationError::AmountTooLarge {
            amount,
            max: MAX_STAKE,
        });
    }
    if amount.normalize().scale() > STAKE_SCALE {
        return Err(ValidationError::AmountTooPrecise {
            amount,
            scale: STAKE_SCALE,
        });
    }
    Ok(())
}

/// A validated wager waiting for the ledger to assign its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWager {
    bettor: ParticipantId,
    contestant: ParticipantId,
    bet_type: BetType,
    amount: Amount,
}

impl NewWager {
    /// Create a wager request, rejecting stakes [`check_stake`] refuses.
    ///
    /// Roster membership is checked by the caller, which owns the roster.
    pub fn try_new(
        bettor: ParticipantId,
        contestant: ParticipantId,
        bet_type: BetType,
        amount: Amount,
    ) -> Result<Self, ValidationError> {
        check_stake(amount)?;
        Ok(Self {
            bettor,
            contestant,
            bet_type,
            amount,
        })
    }

    /// Attach the ledger-assigned id and timestamp.
    #[must_use]
    pub fn into_wager(self, id: WagerId, placed_at: DateTime<Utc>) -> Wager {
        Wager {
            id,
            bettor: self.bettor,
            contestant: self.contestant,
            bet_type: self.bet_type,
            amount: self.amount,
            placed_at,
        }
    }
}

/// A wager recorded in the ledger. Never mutated once created.
///
/// Deserializing applies the same stake checks as [`NewWager::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWager")]
pub struct Wager {
    pub id: WagerId,
    pub bettor: ParticipantId,
    pub contestant: ParticipantId,
    pub bet_type: BetType,
    pub amount: Amount,
    pub placed_at: DateTime<Utc>,
}

/// Unvalidated wire shape of [`Wager`].
#[derive(Deserialize)]
struct RawWager {
    id: WagerId,
    bettor: ParticipantId,
    contestant: ParticipantId,
    bet_type: BetType,
    amount: Amount,
    placed_at: DateTime<Utc>,
}

impl TryFrom<RawWager> for Wager {
    type Error = ValidationError;

    fn try_from(raw: RawWager) -> Result<Self, Self::Error> {
        NewWager::try_new(raw.bettor, raw.contestant, raw.bet_type, raw.amount)
            .map(|wager| wager.into_wager(raw.id, raw.placed_at))
    }
}

impl Wager {
    /// This wager's contribution to each pool.
    #[must_use]
    pub fn contributions(&self) -> PoolAmounts {
        self.bet_type.split(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_bet_types_case_insensitively() {
        assert_eq!("Win".parse::<BetType>().unwrap(), BetType::Win);
        assert_eq!(" place ".parse::<BetType>().unwrap(), BetType::Place);
        assert_eq!("SHOW".parse::<BetType>().unwrap(), BetType::Show);
    }

    #[test]
    fn rejects_unknown_bet_type() {
        let err = "Place-ish".parse::<BetType>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownBetType {
                value: "Place-ish".to_string()
            }
        );
    }

    #[test]
    fn win_splits_in_thirds() {
        let split = BetType::Win.split(dec!(30));
        assert_eq!(split, PoolAmounts::new(dec!(10), dec!(10), dec!(10)));
    }

    #[test]
    fn place_splits_in_halves() {
        let split = BetType::Place.split(dec!(30));
        assert_eq!(split, PoolAmounts::new(dec!(0), dec!(15), dec!(15)));
    }

    #[test]
    fn show_stays_whole() {
        let split = BetType::Show.split(dec!(30));
        assert_eq!(split, PoolAmounts::new(dec!(0), dec!(0), dec!(30)));
    }

    #[test]
    fn new_wager_rejects_non_positive_amounts() {
        for amount in [dec!(0), dec!(-5)] {
            let result = NewWager::try_new("A".into(), "B".into(), BetType::Win, amount);
            assert_eq!(result, Err(ValidationError::NonPositiveAmount { amount }));
        }
    }

    #[test]
    fn new_wager_bounds_stake_size_and_precision() {
        let too_large = MAX_STAKE + dec!(0.01);
        assert_eq!(
            NewWager::try_new("A".into(), "B".into(), BetType::Win, too_large),
            Err(ValidationError::AmountTooLarge {
                amount: too_large,
                max: MAX_STAKE,
            })
        );

        let tiny = dec!(0.00000000000000000001);
        assert_eq!(
            NewWager::try_new("A".into(), "B".into(), BetType::Win, tiny),
            Err(ValidationError::AmountTooPrecise {
                amount: tiny,
                scale: STAKE_SCALE,
            })
        );

        for amount in [MAX_STAKE, dec!(0.01), dec!(12.500)] {
            assert!(NewWager::try_new("A".into(), "B".into(), BetType::Win, amount).is_ok());
        }
    }

    #[test]
    fn deserializing_rechecks_the_stake() {
        let json = |amount: &str| {
            format!(
                r#"{{"id":3,"bettor":"A","contestant":"B","bet_type":"show","amount":"{amount}","placed_at":"2025-06-01T12:00:00Z"}}"#
            )
        };

        let wager: Wager = serde_json::from_str(&json("7.50")).unwrap();
        assert_eq!(wager.id, WagerId::new(3));
        assert_eq!(wager.amount, dec!(7.50));

        for bad in ["-5", "0", "0.001", "5000000000"] {
            assert!(serde_json::from_str::<Wager>(&json(bad)).is_err(), "{bad}");
        }
    }

    #[test]
    fn into_wager_keeps_fields() {
        let now = Utc::now();
        let wager = NewWager::try_new("A".into(), "B".into(), BetType::Show, dec!(20))
            .unwrap()
            .into_wager(WagerId::new(4), now);

        assert_eq!(wager.id, WagerId::new(4));
        assert_eq!(wager.bettor.as_str(), "A");
        assert_eq!(wager.contestant.as_str(), "B");
        assert_eq!(wager.placed_at, now);
        assert_eq!(wager.contributions().show, dec!(20));
    }
}
