use std::io::Write;

use anyhow::Result;

use crate::domain::{Entry, Ledger, format_amount};

/// File extension for saved text reports.
pub const REPORT_FILE_EXT: &str = "txt";

const SEPARATOR: &str = "---------------------------------------------------";

/// Render the financial report for a ledger.
///
/// Line order is fixed: title, date, then the income section, the expense
/// section and the balance line, each introduced by a separator row. Entry
/// lines appear in insertion order as `<name>: $<amount>`, amounts in their
/// raw decimal form (no rounding, no thousands separators).
pub fn render_report(ledger: &Ledger) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Financial Report for {}", ledger.owner()));
    lines.push(format!("Date: {}", ledger.created_on()));

    lines.push(SEPARATOR.to_string());
    lines.push("Incomes:".to_string());
    for entry in ledger.incomes() {
        lines.push(entry.to_string());
    }

    lines.push(SEPARATOR.to_string());
    lines.push("Expenses:".to_string());
    for entry in ledger.expenses() {
        lines.push(entry.to_string());
    }

    lines.push(SEPARATOR.to_string());
    lines.push(format!("Balance: ${}", format_amount(ledger.balance())));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

/// Export all entries of a ledger to CSV format, incomes first, each section
/// in insertion order. Returns the number of entry rows written.
pub fn export_entries_csv<W: Write>(ledger: &Ledger, writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // Write header
    csv_writer.write_record(&["kind", "name", "amount"])?;

    let mut count = 0;
    for entry in ledger.incomes() {
        csv_writer.write_record(&entry_record("income", entry))?;
        count += 1;
    }
    for entry in ledger.expenses() {
        csv_writer.write_record(&entry_record("expense", entry))?;
        count += 1;
    }

    csv_writer.flush()?;
    Ok(count)
}

fn entry_record(kind: &str, entry: &Entry) -> [String; 3] {
    [
        kind.to_string(),
        entry.name.clone(),
        format_amount(entry.amount),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::opened_on("Alice", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        ledger.add_income("Salary", 2000.0);
        ledger.add_expense("Rent", 800.0);
        ledger
    }

    #[test]
    fn test_render_report() {
        let expected = "\
Financial Report for Alice
Date: 2024-01-01
---------------------------------------------------
Incomes:
Salary: $2000.0
---------------------------------------------------
Expenses:
Rent: $800.0
---------------------------------------------------
Balance: $1200.0
";
        assert_eq!(render_report(&sample_ledger()), expected);
    }

    #[test]
    fn test_render_report_empty_ledger() {
        let ledger = Ledger::opened_on("Bob", NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let report = render_report(&ledger);

        assert!(report.starts_with("Financial Report for Bob\nDate: 2024-06-15\n"));
        assert!(report.contains("Incomes:\n"));
        assert!(report.contains("Expenses:\n"));
        assert!(report.ends_with("Balance: $0.0\n"));
    }

    #[test]
    fn test_render_report_keeps_insertion_order() {
        let mut ledger = sample_ledger();
        ledger.add_income("Bonus", 150.5);
        ledger.add_expense("Groceries", 120.0);

        let report = render_report(&ledger);
        let salary = report.find("Salary: $2000.0").unwrap();
        let bonus = report.find("Bonus: $150.5").unwrap();
        let rent = report.find("Rent: $800.0").unwrap();
        let groceries = report.find("Groceries: $120.0").unwrap();

        assert!(salary < bonus);
        assert!(bonus < rent);
        assert!(rent < groceries);
    }

    #[test]
    fn test_separator_width() {
        assert_eq!(SEPARATOR.len(), 51);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn test_export_entries_csv() {
        let mut buffer = Vec::new();
        let count = export_entries_csv(&sample_ledger(), &mut buffer).unwrap();

        let expected = "\
kind,name,amount
income,Salary,2000.0
expense,Rent,800.0
";
        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(buffer).unwrap(), expected);
    }

    #[test]
    fn test_export_entries_csv_quotes_commas() {
        let mut ledger = sample_ledger();
        ledger.add_expense("Food, drinks", 45.0);

        let mut buffer = Vec::new();
        let count = export_entries_csv(&ledger, &mut buffer).unwrap();

        assert_eq!(count, 3);
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("expense,\"Food, drinks\",45.0"));
    }
}
