use std::fs;
use std::io;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Entry, Ledger};

/// File extension for saved snapshots.
pub const SNAPSHOT_FILE_EXT: &str = "json";

/// Snapshot document version this build writes and accepts.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),

    #[error("snapshot I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Whole-ledger snapshot document for save/load.
///
/// The encoding is self-describing JSON with an explicit version field.
/// Decoding verifies the version and materializes the entire ledger before
/// returning; a failed decode never yields a partially-populated ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub version: u32,
    pub owner: String,
    pub created_on: NaiveDate,
    pub incomes: Vec<Entry>,
    pub expenses: Vec<Entry>,
}

impl LedgerSnapshot {
    pub fn of(ledger: &Ledger) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            owner: ledger.owner().to_string(),
            created_on: ledger.created_on(),
            incomes: ledger.incomes().to_vec(),
            expenses: ledger.expenses().to_vec(),
        }
    }

    pub fn into_ledger(self) -> Result<Ledger, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Corrupt(format!(
                "unsupported snapshot version {} (expected {})",
                self.version, SNAPSHOT_VERSION
            )));
        }

        // The loaded ledger keeps its original creation date.
        let mut ledger = Ledger::opened_on(self.owner, self.created_on);
        for entry in self.incomes {
            ledger.add_income(entry.name, entry.amount);
        }
        for entry in self.expenses {
            ledger.add_expense(entry.name, entry.amount);
        }
        Ok(ledger)
    }
}

/// Encode a ledger as a pretty-printed snapshot document.
pub fn encode_snapshot(ledger: &Ledger) -> Result<Vec<u8>, SnapshotError> {
    let snapshot = LedgerSnapshot::of(ledger);
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|err| SnapshotError::Corrupt(err.to_string()))?;
    Ok(json.into_bytes())
}

/// Decode snapshot bytes back into a ledger.
pub fn decode_snapshot(bytes: &[u8]) -> Result<Ledger, SnapshotError> {
    let snapshot: LedgerSnapshot =
        serde_json::from_slice(bytes).map_err(|err| SnapshotError::Corrupt(err.to_string()))?;
    snapshot.into_ledger()
}

/// Read and decode a snapshot file.
pub fn read_snapshot(path: &Path) -> Result<Ledger, SnapshotError> {
    let bytes = fs::read(path)?;
    decode_snapshot(&bytes)
}
