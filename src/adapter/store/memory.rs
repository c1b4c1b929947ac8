//! In-memory ledger for tests and embedding.

use chrono::Utc;
use parking_lot::RwLock;

use crate::domain::{NewWager, RaceState, Wager, WagerId};
use crate::error::Result;
use crate::port::LedgerStore;

#[derive(Debug)]
struct Inner {
    wagers: Vec<Wager>,
    next_id: u64,
    state: RaceState,
}

/// In-memory ledger. Contents are lost when dropped.
#[derive(Debug)]
pub struct MemoryLedger {
    inner: RwLock<Inner>,
}

impl MemoryLedger {
    /// Create an empty ledger with wagering open.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                wagers: Vec::new(),
                next_id: 1,
                state: RaceState::default(),
            }),
        }
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for MemoryLedger {
    fn append(&self, wager: NewWager) -> Result<Wager> {
        let mut inner = self.inner.write();
        let id = WagerId::new(inner.next_id);
        inner.next_id += 1;
        let wager = wager.into_wager(id, Utc::now());
        inner.wagers.push(wager.clone());
        Ok(wager)
    }

    fn remove(&self, ids: &[WagerId]) -> Result<usize> {
        let mut inner = self.inner.write();
        let before = inner.wagers.len();
        inner.wagers.retain(|w| !ids.contains(&w.id));
        Ok(before - inner.wagers.len())
    }

    fn snapshot(&self) -> Result<Vec<Wager>> {
        Ok(self.inner.read().wagers.clone())
    }

    fn load_state(&self) -> Result<RaceState> {
        Ok(self.inner.read().state.clone())
    }

    fn store_state(&self, state: &RaceState) -> Result<()> {
        self.inner.write().state = state.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BetType;
    use rust_decimal_macros::dec;

    fn new_wager(amount: rust_decimal::Decimal) -> NewWager {
        NewWager::try_new("A".into(), "B".into(), BetType::Win, amount).unwrap()
    }

    #[test]
    fn append_assigns_increasing_ids() {
        let ledger = MemoryLedger::new();
        let first = ledger.append(new_wager(dec!(5))).unwrap();
        let second = ledger.append(new_wager(dec!(7))).unwrap();

        assert_eq!(first.id, WagerId::new(1));
        assert_eq!(second.id, WagerId::new(2));
        assert_eq!(ledger.snapshot().unwrap().len(), 2);
    }

    #[test]
    fn remove_is_idempotent() {
        let ledger = MemoryLedger::new();
        let wager = ledger.append(new_wager(dec!(5))).unwrap();

        assert_eq!(ledger.remove(&[wager.id, WagerId::new(99)]).unwrap(), 1);
        assert_eq!(ledger.remove(&[wager.id]).unwrap(), 0);
        assert!(ledger.snapshot().unwrap().is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let ledger = MemoryLedger::new();
        let first = ledger.append(new_wager(dec!(5))).unwrap();
        ledger.remove(&[first.id]).unwrap();
        let second = ledger.append(new_wager(dec!(5))).unwrap();
        assert_eq!(second.id, WagerId::new(2));
    }

    #[test]
    fn state_round_trips() {
        let ledger = MemoryLedger::new();
        let state = RaceState {
            wagering_open: false,
            ..RaceState::default()
        };
        ledger.store_state(&state).unwrap();
        assert_eq!(ledger.load_state().unwrap(), state);
    }
}
