//! Ledger port for wager persistence.
//!
//! The ledger is append/delete-only: wagers are never edited in place. It
//! also carries the race state so the finishing order survives restarts
//! together with the wagers it settles.
//!
//! # Implementation Notes
//!
//! - Implementations must be thread-safe (`Send + Sync`)
//! - Each method is atomic on its own; callers that need check-then-write
//!   sequences serialize them (see [`Event`](crate::application::event::Event))
//! - `remove` ignores unknown ids so that retries are harmless

use crate::domain::{NewWager, RaceState, Wager, WagerId};
use crate::error::Result;

/// Storage operations for wagers and race state.
pub trait LedgerStore: Send + Sync {
    /// Assign an id and timestamp to `wager` and append it.
    fn append(&self, wager: NewWager) -> Result<Wager>;

    /// Delete the given wagers. Returns how many existed.
    fn remove(&self, ids: &[WagerId]) -> Result<usize>;

    /// All current wagers.
    fn snapshot(&self) -> Result<Vec<Wager>>;

    /// Current race state.
    fn load_state(&self) -> Result<RaceState>;

    /// Replace the race state.
    fn store_state(&self, state: &RaceState) -> Result<()>;
}
