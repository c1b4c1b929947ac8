//! Finishing order and race-state lifecycle.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::InvalidOrderError;
use super::id::ParticipantId;

/// Where a contestant finished relative to the paying positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placing {
    First,
    Second,
    Third,
    /// Outside the top three.
    Unplaced,
}

/// Top-three finishing order. Positions are pairwise distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOrder")]
pub struct FinishingOrder {
    first: ParticipantId,
    second: ParticipantId,
    third: ParticipantId,
}

/// Unvalidated wire shape of [`FinishingOrder`].
#[derive(Deserialize)]
struct RawOrder {
    first: ParticipantId,
    second: ParticipantId,
    third: ParticipantId,
}

impl TryFrom<RawOrder> for FinishingOrder {
    type Error = InvalidOrderError;

    fn try_from(raw: RawOrder) -> Result<Self, Self::Error> {
        Self::try_new(raw.first, raw.second, raw.third)
    }
}

impl FinishingOrder {
    /// Create a finishing order, rejecting blank or repeated contestants.
    pub fn try_new(
        first: ParticipantId,
        second: ParticipantId,
        third: ParticipantId,
    ) -> Result<Self, InvalidOrderError> {
        for (position, name) in [(1, &first), (2, &second), (3, &third)] {
            if name.is_empty() {
                return Err(InvalidOrderError::EmptyContestant { position });
            }
        }
        if first == second || first == third {
            return Err(InvalidOrderError::DuplicateContestant { name: first });
        }
        if second == third {
            return Err(InvalidOrderError::DuplicateContestant { name: second });
        }
        Ok(Self {
            first,
            second,
            third,
        })
    }

    #[must_use]
    pub fn first(&self) -> &ParticipantId {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &ParticipantId {
        &self.second
    }

    #[must_use]
    pub fn third(&self) -> &ParticipantId {
        &self.third
    }

    /// Placed contestants, first to third.
    #[must_use]
    pub fn contestants(&self) -> [&ParticipantId; 3] {
        [&self.first, &self.second, &self.third]
    }

    /// Placing of `contestant` in this order.
    #[must_use]
    pub fn placing_of(&self, contestant: &ParticipantId) -> Placing {
        if *contestant == self.first {
            Placing::First
        } else if *contestant == self.second {
            Placing::Second
        } else if *contestant == self.third {
            Placing::Third
        } else {
            Placing::Unplaced
        }
    }
}

impl fmt::Display for FinishingOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1. {}  2. {}  3. {}", self.first, self.second, self.third)
    }
}

/// Administrative state of the event: wagering window and recorded result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceState {
    /// Whether new wagers are accepted.
    pub wagering_open: bool,
    /// Recorded finishing order, if any.
    #[serde(default)]
    pub order: Option<FinishingOrder>,
    /// Once locked, the order and the ledger are frozen.
    #[serde(default)]
    pub locked: bool,
}

impl Default for RaceState {
    fn default() -> Self {
        Self {
            wagering_open: true,
            order: None,
            locked: false,
        }
    }
}
