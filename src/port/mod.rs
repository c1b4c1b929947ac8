//! Port definitions for hexagonal architecture.
//!
//! Ports are the traits the application layer talks to; the store adapters
//! implement them.

pub mod ledger;

pub use ledger::LedgerStore;
