use std::fmt;

use serde::{Deserialize, Serialize};

use super::format_amount;

/// A single income or expense line: a free-form label and an amount.
///
/// Entries carry no identity. Two entries are equal exactly when name and
/// amount both match, and a ledger may hold any number of equal entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub amount: f64,
}

impl Entry {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${}", self.name, format_amount(self.amount))
    }
}
