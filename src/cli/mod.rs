use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::application::Session;
use crate::io::export_entries_csv;

/// Cashbook - Personal Income and Expense Tracker
#[derive(Parser)]
#[command(name = "cashbook")]
#[command(about = "A single-user income and expense tracker for the command line")]
#[command(version)]
pub struct Cli {}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();

        let Some(mut session) = login(&mut input)? else {
            return Ok(());
        };
        print_welcome(&session);
        println!("Type 'help' for the command list.");

        run_shell(&mut input, &mut session)
    }
}

/// One parsed shell command. The grammar is the event-to-action mapping:
/// each variant corresponds to exactly one session operation or display
/// action.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    AddIncome { amount: String, name: String },
    AddExpense { amount: String, name: String },
    DeleteIncome(usize),
    DeleteExpense(usize),
    List,
    Balance,
    Report(Option<PathBuf>),
    Save(Option<PathBuf>),
    Load(PathBuf),
    Csv(PathBuf),
    Rename(String),
    Help,
    Quit,
}

/// Parse one input line. `Ok(None)` is a blank line; `Err` carries the
/// usage message to print.
pub fn parse_command(line: &str) -> Result<Option<ShellCommand>, String> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };

    let command = match keyword {
        "income" | "expense" => {
            let amount = tokens.next().ok_or_else(|| usage_for(keyword))?.to_string();
            let name = rest_text(tokens);
            if keyword == "income" {
                ShellCommand::AddIncome { amount, name }
            } else {
                ShellCommand::AddExpense { amount, name }
            }
        }
        "delete" => {
            let kind = tokens.next().ok_or_else(|| usage_for("delete"))?;
            let position = tokens
                .next()
                .and_then(|token| token.parse::<usize>().ok())
                .filter(|&position| position >= 1)
                .ok_or_else(|| usage_for("delete"))?;
            match kind {
                "income" => ShellCommand::DeleteIncome(position),
                "expense" => ShellCommand::DeleteExpense(position),
                _ => return Err(usage_for("delete")),
            }
        }
        "list" => ShellCommand::List,
        "balance" => ShellCommand::Balance,
        "report" => ShellCommand::Report(rest_path(tokens)),
        "save" => ShellCommand::Save(rest_path(tokens)),
        "load" => ShellCommand::Load(rest_path(tokens).ok_or_else(|| usage_for("load"))?),
        "csv" => ShellCommand::Csv(rest_path(tokens).ok_or_else(|| usage_for("csv"))?),
        "rename" => ShellCommand::Rename(rest_text(tokens)),
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => {
            return Err(format!(
                "Unknown command '{other}'. Type 'help' for the command list."
            ));
        }
    };
    Ok(Some(command))
}

fn rest_text(tokens: std::str::SplitWhitespace<'_>) -> String {
    tokens.collect::<Vec<_>>().join(" ")
}

fn rest_path(tokens: std::str::SplitWhitespace<'_>) -> Option<PathBuf> {
    let joined = rest_text(tokens);
    if joined.is_empty() {
        None
    } else {
        Some(PathBuf::from(joined))
    }
}

fn usage_for(keyword: &str) -> String {
    let usage = match keyword {
        "income" => "income <amount> <name>",
        "expense" => "expense <amount> <name>",
        "delete" => "delete income|expense <n>",
        "load" => "load <path>",
        "csv" => "csv <file>",
        _ => "help",
    };
    format!("Usage: {usage}")
}

const USAGE: &str = "\
Commands:
  income <amount> <name>     add an income entry
  expense <amount> <name>    add an expense entry
  delete income <n>          delete the n-th income entry
  delete expense <n>         delete the n-th expense entry
  list                       show all entries and the balance
  balance                    show the running balance
  report [dir]               save the text report (default: current directory)
  save [dir]                 save a snapshot (default: current directory)
  load <path>                load a snapshot, replacing the current ledger
  csv <file>                 export all entries as CSV
  rename <name>              change the owner name
  help                       show this help
  quit                       exit";

/// Prompt for the owner name until one is accepted. `None` on end of input.
fn login<R: BufRead>(input: &mut R) -> Result<Option<Session>> {
    loop {
        print!("Enter your name: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match Session::login(&line) {
            Ok(session) => return Ok(Some(session)),
            Err(err) => println!("{err}"),
        }
    }
}

/// The read-dispatch loop. Command failures are printed and the loop
/// continues; only quit and end of input leave it.
fn run_shell<R: BufRead>(input: &mut R, session: &mut Session) -> Result<()> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(ShellCommand::Quit)) => return Ok(()),
            Ok(Some(command)) => {
                if let Err(err) = run_command(session, command) {
                    eprintln!("{err}");
                }
            }
            Err(usage) => println!("{usage}"),
        }
    }
}

fn run_command(session: &mut Session, command: ShellCommand) -> Result<()> {
    match command {
        ShellCommand::AddIncome { amount, name } => {
            let entry = session.add_income(&name, &amount)?;
            println!("Added income: {entry}");
        }

        ShellCommand::AddExpense { amount, name } => {
            let entry = session.add_expense(&name, &amount)?;
            println!("Added expense: {entry}");
        }

        ShellCommand::DeleteIncome(position) => match session.remove_income_at(position - 1) {
            Some(entry) => println!("Deleted income: {entry}"),
            None => println!("No income entry at position {position}"),
        },

        ShellCommand::DeleteExpense(position) => match session.remove_expense_at(position - 1) {
            Some(entry) => println!("Deleted expense: {entry}"),
            None => println!("No expense entry at position {position}"),
        },

        ShellCommand::List => print_overview(session),

        ShellCommand::Balance => println!("Balance: ${:.2}", session.balance()),

        ShellCommand::Report(dir) => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            let path = session.save_report(&dir)?;
            println!("Report saved to {}", path.display());
        }

        ShellCommand::Save(dir) => {
            let dir = dir.unwrap_or_else(|| PathBuf::from("."));
            let path = session.save_snapshot(&dir)?;
            println!("Snapshot saved to {}", path.display());
        }

        ShellCommand::Load(path) => {
            session.load_snapshot(&path)?;
            print_welcome(session);
            print_overview(session);
        }

        ShellCommand::Csv(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let count = export_entries_csv(session.ledger(), file)?;
            println!("Exported {} entries to {}", count, path.display());
        }

        ShellCommand::Rename(name) => {
            session.rename_owner(&name)?;
            println!("Welcome {}!", session.ledger().owner());
        }

        ShellCommand::Help => println!("{USAGE}"),

        // Handled by the loop.
        ShellCommand::Quit => {}
    }
    Ok(())
}

fn print_welcome(session: &Session) {
    println!("Welcome {}!", session.ledger().owner());
    println!("Your accounts for {}", session.ledger().created_on());
}

fn print_overview(session: &Session) {
    let ledger = session.ledger();

    println!("Incomes:");
    for (position, entry) in ledger.incomes().iter().enumerate() {
        println!("  {}. {}", position + 1, entry);
    }
    println!("Expenses:");
    for (position, entry) in ledger.expenses().iter().enumerate() {
        println!("  {}. {}", position + 1, entry);
    }
    println!("Balance: ${:.2}", ledger.balance());
}
