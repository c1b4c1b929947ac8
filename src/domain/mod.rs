//! Wagering domain types: wagers, pools, finishing orders and payouts.

pub mod error;
pub mod id;
pub mod money;
pub mod order;
pub mod payout;
pub mod pool;
pub mod roster;
pub mod wager;

pub use error::{InvalidOrderError, PayoutError, ValidationError};
pub use id::{ParticipantId, WagerId};
pub use money::{Amount, Ratio, MAX_STAKE, STAKE_SCALE};
pub use order::{FinishingOrder, Placing, RaceState};
pub use payout::{BettorSummary, PayoutLine, PayoutReport, PoolSummary, Resolution, Totals};
pub use pool::{PoolAmounts, PoolName};
pub use roster::Roster;
pub use wager::{check_stake, BetType, NewWager, Wager};
