//! Parimutuel - Win/Place/Show pool accounting.
//!
//! Records wagers on contestants in a single event and, once the first three
//! finishers are known, settles the Win, Place and Show pools.
//!
//! # Architecture
//!
//! - **`domain`** - Wagers, pools, finishing orders, rosters and payout reports
//! - **`application`** - The payout engine, the odds board and the event
//!   service that ties the ledger to the race lifecycle
//! - **`port`** - The ledger storage trait
//! - **`adapter`** - In-memory and JSON file ledgers, and the CLI
//! - **`infrastructure`** - Configuration, logging and wiring
//!
//! # Example
//!
//! ```
//! use parimutuel::application::engine::{PariMutuelEngine, PayoutPolicy};
//! use parimutuel::domain::{FinishingOrder, NewWager, Roster, WagerId};
//! use rust_decimal_macros::dec;
//!
//! let engine = PariMutuelEngine::new(
//!     Roster::shared(["A", "B", "C"]),
//!     PayoutPolicy::default(),
//! );
//! let wagers = vec![
//!     NewWager::try_new("A".into(), "A".into(), "win".parse().unwrap(), dec!(30))
//!         .unwrap()
//!         .into_wager(WagerId::new(1), chrono::Utc::now()),
//! ];
//! let order = FinishingOrder::try_new("A".into(), "B".into(), "C".into()).unwrap();
//!
//! let report = engine.compute(&wagers, Some(&order)).unwrap();
//! assert_eq!(report.totals.paid, dec!(30));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;
