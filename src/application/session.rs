use std::path::{Path, PathBuf};

use crate::domain::{Entry, Ledger, parse_amount};
use crate::io::{REPORT_FILE_EXT, render_report};
use crate::storage::{SNAPSHOT_FILE_EXT, available_path, encode_snapshot, read_snapshot, write_new};

use super::AppError;

/// Application boundary for one tracking session.
///
/// The session owns the single mutable slot holding the current ledger. All
/// boundary validation (owner names, amount text) happens here, so the
/// ledger underneath only ever sees clean input. A snapshot load decodes the
/// replacement ledger fully before swapping the slot; any failure leaves the
/// current ledger untouched.
pub struct Session {
    ledger: Ledger,
}

impl Session {
    /// Start a session for `name`, opening a fresh ledger dated today.
    /// Called exactly once at startup; empty and whitespace-only names are
    /// rejected so the login prompt can re-prompt.
    pub fn login(name: &str) -> Result<Self, AppError> {
        Ok(Self {
            ledger: Ledger::new(validated_owner(name)?),
        })
    }

    /// Session over a previously restored ledger.
    pub fn resume(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    /// Parse the amount text and append an income entry. Malformed text is
    /// `InvalidAmount` and never reaches the ledger.
    pub fn add_income(&mut self, name: &str, amount_text: &str) -> Result<Entry, AppError> {
        let amount = parse_entry_amount(amount_text)?;
        self.ledger.add_income(name, amount);
        Ok(Entry::new(name, amount))
    }

    /// Parse the amount text and append an expense entry.
    pub fn add_expense(&mut self, name: &str, amount_text: &str) -> Result<Entry, AppError> {
        let amount = parse_entry_amount(amount_text)?;
        self.ledger.add_expense(name, amount);
        Ok(Entry::new(name, amount))
    }

    /// Remove the income entry at a 0-based display position. `None` when
    /// the position is out of range; the shell reports that as a notice.
    pub fn remove_income_at(&mut self, index: usize) -> Option<Entry> {
        self.ledger.remove_income_at(index)
    }

    /// Remove the expense entry at a 0-based display position.
    pub fn remove_expense_at(&mut self, index: usize) -> Option<Entry> {
        self.ledger.remove_expense_at(index)
    }

    /// Change the owner name, with the same validation as login.
    pub fn rename_owner(&mut self, name: &str) -> Result<(), AppError> {
        self.ledger.set_owner(validated_owner(name)?);
        Ok(())
    }

    /// Render the report and write it to `dir`, never overwriting an
    /// existing file. Returns the path actually written.
    pub fn save_report(&self, dir: &Path) -> Result<PathBuf, AppError> {
        let report = render_report(&self.ledger);
        let path = available_path(dir, &self.file_base(), REPORT_FILE_EXT);
        write_new(&path, report.as_bytes())?;
        Ok(path)
    }

    /// Encode a snapshot and write it to `dir`, with the same base name and
    /// collision policy as the report.
    pub fn save_snapshot(&self, dir: &Path) -> Result<PathBuf, AppError> {
        let bytes = encode_snapshot(&self.ledger)?;
        let path = available_path(dir, &self.file_base(), SNAPSHOT_FILE_EXT);
        write_new(&path, &bytes)?;
        Ok(path)
    }

    /// Read and decode a snapshot, then replace the current ledger with it.
    pub fn load_snapshot(&mut self, path: &Path) -> Result<(), AppError> {
        let restored = read_snapshot(path)?;
        self.ledger = restored;
        Ok(())
    }

    fn file_base(&self) -> String {
        format!(
            "Financial Report for {}_{}",
            self.ledger.owner(),
            self.ledger.created_on()
        )
    }
}

fn validated_owner(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::EmptyOwnerName);
    }
    Ok(name)
}

fn parse_entry_amount(text: &str) -> Result<f64, AppError> {
    parse_amount(text).map_err(|_| AppError::InvalidAmount(text.trim().to_string()))
}
