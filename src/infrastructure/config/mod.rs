//! Infrastructure configuration modules.

pub mod logging;
pub mod payout;
pub mod roster;
pub mod settings;
