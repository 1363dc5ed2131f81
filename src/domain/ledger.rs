use chrono::{Local, NaiveDate};

use super::Entry;

/// The in-memory state of one tracking session: the owner's name, the date
/// the ledger was opened, and the two ordered entry sequences.
///
/// The balance is always derived from the sequences, never stored. None of
/// the operations here validate or fail; amount text and owner names are
/// checked at the application boundary before they reach the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    owner: String,
    created_on: NaiveDate,
    incomes: Vec<Entry>,
    expenses: Vec<Entry>,
}

impl Ledger {
    /// Open a fresh, empty ledger dated today.
    pub fn new(owner: impl Into<String>) -> Self {
        Self::opened_on(owner, Local::now().date_naive())
    }

    /// Open a fresh, empty ledger with an explicit date. Snapshot restores
    /// go through this so a loaded ledger keeps its original date.
    pub fn opened_on(owner: impl Into<String>, created_on: NaiveDate) -> Self {
        Self {
            owner: owner.into(),
            created_on,
            incomes: Vec::new(),
            expenses: Vec::new(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_on
    }

    pub fn incomes(&self) -> &[Entry] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Entry] {
        &self.expenses
    }

    /// Append an income entry. Duplicates are legal and insertion order is
    /// preserved.
    pub fn add_income(&mut self, name: impl Into<String>, amount: f64) {
        self.incomes.push(Entry::new(name, amount));
    }

    /// Append an expense entry. Duplicates are legal and insertion order is
    /// preserved.
    pub fn add_expense(&mut self, name: impl Into<String>, amount: f64) {
        self.expenses.push(Entry::new(name, amount));
    }

    /// Remove the first income entry equal to `entry`, keeping the order of
    /// the rest. Returns false (and changes nothing) when none matches.
    pub fn remove_income(&mut self, entry: &Entry) -> bool {
        remove_first(&mut self.incomes, entry)
    }

    /// Remove the first expense entry equal to `entry`, keeping the order of
    /// the rest. Returns false (and changes nothing) when none matches.
    pub fn remove_expense(&mut self, entry: &Entry) -> bool {
        remove_first(&mut self.expenses, entry)
    }

    /// Remove the income entry at a 0-based position. Position-addressed
    /// removal stays unambiguous when equal entries coexist.
    pub fn remove_income_at(&mut self, index: usize) -> Option<Entry> {
        remove_at(&mut self.incomes, index)
    }

    /// Remove the expense entry at a 0-based position.
    pub fn remove_expense_at(&mut self, index: usize) -> Option<Entry> {
        remove_at(&mut self.expenses, index)
    }

    pub fn total_income(&self) -> f64 {
        self.incomes.iter().map(|entry| entry.amount).sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.expenses.iter().map(|entry| entry.amount).sum()
    }

    /// Balance = sum of incomes - sum of expenses, recomputed on every call.
    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expense()
    }
}

fn remove_first(entries: &mut Vec<Entry>, entry: &Entry) -> bool {
    match entries.iter().position(|candidate| candidate == entry) {
        Some(index) => {
            entries.remove(index);
            true
        }
        None => false,
    }
}

fn remove_at(entries: &mut Vec<Entry>, index: usize) -> Option<Entry> {
    if index < entries.len() {
        Some(entries.remove(index))
    } else {
        None
    }
}
