// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use cashbook::application::Session;
use cashbook::domain::Ledger;
use chrono::NaiveDate;
use tempfile::TempDir;

/// Helper to build a date without the Option dance
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Ledger fixture with a fixed date and one entry on each side
pub fn sample_ledger() -> Ledger {
    let mut ledger = Ledger::opened_on("Alice", date(2024, 1, 1));
    ledger.add_income("Salary", 2000.0);
    ledger.add_expense("Rent", 800.0);
    ledger
}

/// Session over the sample ledger plus a temporary directory for file output
pub fn sample_session() -> Result<(Session, TempDir)> {
    let temp_dir = TempDir::new()?;
    Ok((Session::resume(sample_ledger()), temp_dir))
}
