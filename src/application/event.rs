//! Event service: roster, ledger and race lifecycle behind one API.
//!
//! All mutating operations run under a single writer lock so that
//! check-then-write sequences (is wagering open? then append) cannot
//! interleave. Read-only operations work on consistent snapshots.

use parking_lot::Mutex;
use tracing::info;

use crate::application::board::OddsBoard;
use crate::application::engine::PariMutuelEngine;
use crate::domain::{
    Amount, BetType, FinishingOrder, NewWager, ParticipantId, PayoutReport, RaceState, Roster,
    Wager, WagerId,
};
use crate::error::{EventError, Result};
use crate::port::LedgerStore;

/// A single wagering event backed by a ledger store.
pub struct Event<S> {
    name: String,
    engine: PariMutuelEngine,
    store: S,
    writer: Mutex<()>,
}

impl<S: LedgerStore> Event<S> {
    #[must_use]
    pub fn new(name: impl Into<String>, engine: PariMutuelEngine, store: S) -> Self {
        Self {
            name: name.into(),
            engine,
            store,
            writer: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        self.engine.roster()
    }

    #[must_use]
    pub const fn engine(&self) -> &PariMutuelEngine {
        &self.engine
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Record a wager while wagering is open.
    ///
    /// `bet_type` is parsed here so that free-form input from a form or the
    /// command line is validated at the ledger boundary.
    pub fn place_wager(
        &self,
        bettor: impl Into<ParticipantId>,
        contestant: impl Into<ParticipantId>,
        bet_type: &str,
        amount: Amount,
    ) -> Result<Wager> {
        let bettor = bettor.into();
        let contestant = contestant.into();
        let bet_type: BetType = bet_type.parse()?;
        self.roster().check_bettor(&bettor)?;
        self.roster().check_contestant(&contestant)?;
        let wager = NewWager::try_new(bettor, contestant, bet_type, amount)?;

        let _guard = self.writer.lock();
        let state = self.store.load_state()?;
        if !state.wagering_open || state.locked {
            return Err(EventError::WageringClosed.into());
        }

        let wager = self.store.append(wager)?;
        info!(
            id = %wager.id,
            bettor = %wager.bettor,
            contestant = %wager.contestant,
            bet_type = %wager.bet_type,
            amount = %wager.amount,
            "Wager placed"
        );
        Ok(wager)
    }

    /// Delete wagers by id. Unknown ids are ignored; returns the count removed.
    pub fn remove_wagers(&self, ids: &[WagerId]) -> Result<usize> {
        let _guard = self.writer.lock();
        if self.store.load_state()?.locked {
            return Err(EventError::ResultsLocked.into());
        }
        let removed = self.store.remove(ids)?;
        info!(requested = ids.len(), removed, "Wagers removed");
        Ok(removed)
    }

    /// Record (or replace) the finishing order.
    pub fn set_order(
        &self,
        first: impl Into<ParticipantId>,
        second: impl Into<ParticipantId>,
        third: impl Into<ParticipantId>,
    ) -> Result<FinishingOrder> {
        let order = FinishingOrder::try_new(first.into(), second.into(), third.into())?;
        self.roster().check_order(&order)?;

        self.update_state(|state| {
            if state.locked {
                return Err(EventError::ResultsLocked);
            }
            state.order = Some(order.clone());
            Ok(())
        })?;
        info!(order = %order, "Finishing order set");
        Ok(order)
    }

    /// Forget the recorded finishing order.
    pub fn clear_order(&self) -> Result<()> {
        self.update_state(|state| {
            if state.locked {
                return Err(EventError::ResultsLocked);
            }
            state.order = None;
            Ok(())
        })?;
        info!("Finishing order cleared");
        Ok(())
    }

    /// Freeze the finishing order and the ledger. Closes wagering.
    pub fn lock_results(&self) -> Result<FinishingOrder> {
        let order = self.update_state(|state| {
            let order = state.order.clone().ok_or(EventError::OrderNotSet)?;
            state.locked = true;
            state.wagering_open = false;
            Ok(order)
        })?;
        info!(order = %order, "Results locked");
        Ok(order)
    }

    /// Start accepting wagers.
    pub fn open_wagering(&self) -> Result<()> {
        self.update_state(|state| {
            if state.locked {
                return Err(EventError::ResultsLocked);
            }
            state.wagering_open = true;
            Ok(())
        })?;
        info!("Wagering opened");
        Ok(())
    }

    /// Stop accepting wagers.
    pub fn close_wagering(&self) -> Result<()> {
        self.update_state(|state| {
            state.wagering_open = false;
            Ok(())
        })?;
        info!("Wagering closed");
        Ok(())
    }

    /// Current wagers.
    pub fn wagers(&self) -> Result<Vec<Wager>> {
        self.store.snapshot()
    }

    /// Current race state.
    pub fn state(&self) -> Result<RaceState> {
        self.store.load_state()
    }

    /// Pool sizes and hypothetical ratios for the current ledger.
    pub fn odds_board(&self) -> Result<OddsBoard> {
        let wagers = self.store.snapshot()?;
        Ok(OddsBoard::build(self.roster(), &wagers))
    }

    /// Settle the current ledger against the recorded finishing order.
    pub fn payouts(&self) -> Result<PayoutReport> {
        let (wagers, state) = {
            let _guard = self.writer.lock();
            (self.store.snapshot()?, self.store.load_state()?)
        };
        let report = self.engine.compute(&wagers, state.order.as_ref())?;
        info!(
            wagers = report.lines.len(),
            wagered = %report.totals.wagered,
            paid = %report.totals.paid,
            resolution = ?report.resolution,
            "Payouts computed"
        );
        Ok(report)
    }

    /// Read-modify-write the race state under the writer lock.
    fn update_state<T>(
        &self,
        change: impl FnOnce(&mut RaceState) -> std::result::Result<T, EventError>,
    ) -> Result<T> {
        let _guard = self.writer.lock();
        let mut state = self.store.load_state()?;
        let out = change(&mut state)?;
        self.store.store_state(&state)?;
        Ok(out)
    }
}
