//! Application layer: the payout engine and the services built on it.

pub mod board;
pub mod engine;
pub mod event;

pub use board::{ContestantOdds, HypotheticalRatios, OddsBoard};
pub use engine::{is_eligible, DegeneratePolicy, PariMutuelEngine, PayoutPolicy};
pub use event::Event;
