//! Domain validation errors for wagers and finishing orders.
//!
//! These errors are returned when domain invariants are violated at a
//! construction boundary: a wager entering the ledger, or a finishing order
//! handed to the payout engine.
//!
//! # Examples
//!
//! ```
//! use parimutuel::domain::{BetType, ValidationError};
//!
//! let result = "Place-ish".parse::<BetType>();
//! assert!(matches!(result, Err(ValidationError::UnknownBetType { .. })));
//! ```

use thiserror::Error;

use super::id::{ParticipantId, WagerId};
use super::money::Amount;

/// Malformed wager input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Stakes must be strictly positive.
    #[error("amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount.
        amount: Amount,
    },

    /// Stake above [`MAX_STAKE`](super::money::MAX_STAKE).
    #[error("amount {amount} exceeds the maximum stake of {max}")]
    AmountTooLarge {
        /// The rejected amount.
        amount: Amount,
        /// The largest accepted stake.
        max: Amount,
    },

    /// Stake finer than whole cents.
    #[error("amount {amount} has more than {scale} decimal places")]
    AmountTooPrecise {
        /// The rejected amount.
        amount: Amount,
        /// Decimal places allowed.
        scale: u32,
    },

    /// Bet type is not one of win, place, show.
    #[error("unknown bet type '{value}' (expected win, place or show)")]
    UnknownBetType {
        /// The rejected input.
        value: String,
    },

    /// Bettor is not on the roster.
    #[error("unknown bettor '{name}'")]
    UnknownBettor {
        /// The rejected name.
        name: ParticipantId,
    },

    /// Contestant is not on the roster.
    #[error("unknown contestant '{name}'")]
    UnknownContestant {
        /// The rejected name.
        name: ParticipantId,
    },
}

/// Missing or malformed finishing order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOrderError {
    /// No finishing order has been recorded.
    #[error("no finishing order set")]
    Unset,

    /// The same contestant occupies more than one position.
    #[error("contestant '{name}' appears more than once in the finishing order")]
    DuplicateContestant {
        /// The repeated contestant.
        name: ParticipantId,
    },

    /// A position was left blank.
    #[error("finishing order position {position} is empty")]
    EmptyContestant {
        /// One-based position (1, 2 or 3).
        position: u8,
    },

    /// A placed contestant is not on the roster.
    #[error("finishing order references unknown contestant '{name}'")]
    UnknownContestant {
        /// The rejected contestant.
        name: ParticipantId,
    },
}

/// Why a payout report could not be produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayoutError {
    /// The finishing order is missing or does not fit the roster.
    #[error(transparent)]
    InvalidOrder(#[from] InvalidOrderError),

    /// A wager in the snapshot carries a stake the ledger would refuse.
    #[error("wager {id} has an invalid stake: {source}")]
    InvalidStake {
        /// The offending wager.
        id: WagerId,
        /// What is wrong with its stake.
        #[source]
        source: ValidationError,
    },

    /// Settlement arithmetic left the range of `Decimal`.
    #[error("payout arithmetic overflowed")]
    Overflow,
}
