//! Ledger store adapters.

mod json_file;
mod memory;

pub use json_file::JsonFileLedger;
pub use memory::MemoryLedger;
