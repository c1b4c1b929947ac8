//! JSON file ledger.
//!
//! The whole ledger lives in one JSON document. Every mutation is applied to
//! a copy, written to a temp file, synced and renamed over the existing file.
//! The in-memory copy is only replaced once the rename succeeds. A
//! process-local mutex serializes writers.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{NewWager, RaceState, Wager, WagerId};
use crate::error::{LedgerError, Result};
use crate::port::LedgerStore;

/// Current ledger file format version.
const LEDGER_VERSION: u32 = 1;

/// On-disk document. Wager ids are unique and below `next_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawLedgerDocument")]
struct LedgerDocument {
    version: u32,
    next_id: u64,
    state: RaceState,
    wagers: Vec<Wager>,
}

/// Unchecked wire shape of [`LedgerDocument`]. Each wager validates its own
/// stake while deserializing.
#[derive(Deserialize)]
struct RawLedgerDocument {
    version: u32,
    next_id: u64,
    #[serde(default)]
    state: RaceState,
    #[serde(default)]
    wagers: Vec<Wager>,
}

impl TryFrom<RawLedgerDocument> for LedgerDocument {
    type Error = String;

    fn try_from(raw: RawLedgerDocument) -> std::result::Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(raw.wagers.len());
        for wager in &raw.wagers {
            if !seen.insert(wager.id) {
                return Err(format!("duplicate wager id {}", wager.id));
            }
            if wager.id.value() >= raw.next_id {
                return Err(format!(
                    "wager id {} is not below next_id {}",
                    wager.id, raw.next_id
                ));
            }
        }
        Ok(Self {
            version: raw.version,
            next_id: raw.next_id,
            state: raw.state,
            wagers: raw.wagers,
        })
    }
}

impl Default for LedgerDocument {
    fn default() -> Self {
        Self {
            version: LEDGER_VERSION,
            next_id: 1,
            state: RaceState::default(),
            wagers: Vec::new(),
        }
    }
}

/// Ledger persisted to a JSON file.
#[derive(Debug)]
pub struct JsonFileLedger {
    path: PathBuf,
    document: Mutex<LedgerDocument>,
}

impl JsonFileLedger {
    /// Open the ledger at `path`. A missing file is an empty ledger; it is
    /// created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let document = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let document: LedgerDocument =
                serde_json::from_str(&content).map_err(|source| LedgerError::Corrupt {
                    path: path.display().to_string(),
                    source,
                })?;
            if document.version != LEDGER_VERSION {
                return Err(LedgerError::UnsupportedVersion {
                    found: document.version,
                    expected: LEDGER_VERSION,
                }
                .into());
            }
            debug!(path = %path.display(), wagers = document.wagers.len(), "Ledger loaded");
            document
        } else {
            LedgerDocument::default()
        };

        Ok(Self {
            path,
            document: Mutex::new(document),
        })
    }

    /// Apply `change` to a copy of the document, persist it, then commit.
    fn mutate<T>(&self, change: impl FnOnce(&mut LedgerDocument) -> T) -> Result<T> {
        let mut document = self.document.lock();
        let mut next = document.clone();
        let out = change(&mut next);
        write_atomic(&self.path, &next)?;
        *document = next;
        Ok(out)
    }
}

/// Write `document` to `path` using write-to-temp-then-rename.
fn write_atomic(path: &Path, document: &LedgerDocument) -> Result<()> {
    let json = serde_json::to_string_pretty(document)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;

    let cleanup_and_err = |e| {
        let _ = fs::remove_file(&temp_path);
        e
    };

    file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
    file.sync_all().map_err(cleanup_and_err)?;
    fs::rename(&temp_path, path).map_err(cleanup_and_err)?;

    Ok(())
}

impl LedgerStore for JsonFileLedger {
    fn append(&self, wager: NewWager) -> Result<Wager> {
        self.mutate(|doc| {
            let id = WagerId::new(doc.next_id);
            doc.next_id += 1;
            let wager = wager.into_wager(id, Utc::now());
            doc.wagers.push(wager.clone());
            wager
        })
    }

    fn remove(&self, ids: &[WagerId]) -> Result<usize> {
        {
            let document = self.document.lock();
            if !document.wagers.iter().any(|w| ids.contains(&w.id)) {
                return Ok(0);
            }
        }
        self.mutate(|doc| {
            let before = doc.wagers.len();
            doc.wagers.retain(|w| !ids.contains(&w.id));
            before - doc.wagers.len()
        })
    }

    fn snapshot(&self) -> Result<Vec<Wager>> {
        Ok(self.document.lock().wagers.clone())
    }

    fn load_state(&self) -> Result<RaceState> {
        Ok(self.document.lock().state.clone())
    }

    fn store_state(&self, state: &RaceState) -> Result<()> {
        self.mutate(|doc| doc.state = state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BetType, FinishingOrder};
    use crate::error::Error;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn new_wager(contestant: &str) -> NewWager {
        NewWager::try_new("A".into(), contestant.into(), BetType::Place, dec!(12.50)).unwrap()
    }

    #[test]
    fn missing_file_is_empty_and_not_created_until_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        let ledger = JsonFileLedger::open(&path).unwrap();

        assert!(ledger.snapshot().unwrap().is_empty());
        assert!(!path.exists());

        ledger.append(new_wager("B")).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn reopen_restores_wagers_state_and_ids() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("ledger.json");

        {
            let ledger = JsonFileLedger::open(&path).unwrap();
            ledger.append(new_wager("B")).unwrap();
            let second = ledger.append(new_wager("C")).unwrap();
            ledger.remove(&[second.id]).unwrap();
            let order = FinishingOrder::try_new("A".into(), "B".into(), "C".into()).unwrap();
            ledger
                .store_state(&RaceState {
                    wagering_open: false,
                    order: Some(order),
                    locked: true,
                })
                .unwrap();
        }

        let ledger = JsonFileLedger::open(&path).unwrap();
        let wagers = ledger.snapshot().unwrap();
        assert_eq!(wagers.len(), 1);
        assert_eq!(wagers[0].amount, dec!(12.50));
        assert_eq!(wagers[0].contestant.as_str(), "B");

        let state = ledger.load_state().unwrap();
        assert!(state.locked);
        assert_eq!(state.order.unwrap().first().as_str(), "A");

        let next = ledger.append(new_wager("D")).unwrap();
        assert_eq!(next.id, WagerId::new(3));
    }

    #[test]
    fn removing_unknown_ids_does_not_touch_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        let ledger = JsonFileLedger::open(&path).unwrap();

        assert_eq!(ledger.remove(&[WagerId::new(4)]).unwrap(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileLedger::open(&path).unwrap_err();
        assert!(matches!(err, Error::Ledger(LedgerError::Corrupt { .. })));
    }

    fn document(wagers: &str, next_id: u64) -> String {
        format!(
            r#"{{"version": 1, "next_id": {next_id}, "state": {{"wagering_open": true, "order": null, "locked": false}}, "wagers": [{wagers}]}}"#
        )
    }

    fn wager_json(id: u64, amount: &str, placed_at: &str) -> String {
        format!(
            r#"{{"id": {id}, "bettor": "A", "contestant": "B", "bet_type": "win", "amount": "{amount}", "placed_at": "{placed_at}"}}"#
        )
    }

    #[test]
    fn wagers_breaking_ledger_rules_are_reported_as_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        let at = "2025-06-21T14:00:00Z";
        let cases = [
            document(&wager_json(1, "-5", at), 2),
            document(&wager_json(1, "0", at), 2),
            document(&wager_json(1, "0.001", at), 2),
            document(&wager_json(1, "5", "yesterday"), 2),
            document(&format!("{},{}", wager_json(1, "5", at), wager_json(1, "6", at)), 2),
            document(&wager_json(4, "5", at), 3),
        ];

        for contents in cases {
            fs::write(&path, &contents).unwrap();
            let result = JsonFileLedger::open(&path);
            assert!(
                matches!(result, Err(Error::Ledger(LedgerError::Corrupt { .. }))),
                "{contents}"
            );
        }

        fs::write(&path, document(&wager_json(1, "5.25", at), 2)).unwrap();
        let ledger = JsonFileLedger::open(&path).unwrap();
        assert_eq!(ledger.snapshot().unwrap()[0].amount, dec!(5.25));
    }

    #[test]
    fn future_version_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, r#"{"version": 9, "next_id": 1}"#).unwrap();

        let err = JsonFileLedger::open(&path).unwrap_err();
        assert!(matches!(
            err,
            Error::Ledger(LedgerError::UnsupportedVersion { found: 9, .. })
        ));
    }
}
