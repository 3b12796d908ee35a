//! Ledger CLI commands
//!
//! Bridges clap argument parsing with the input handler and the ledger
//! controller. Every mutating command prints the updated summary.

use std::io::{self, BufRead, Write};

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_ledger, format_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::models::TransactionId;
use crate::services::{clear_with_confirmation, submit, ClearOutcome, Ledger, TransactionForm};
use crate::storage::KeyValueStorage;

const CLEAR_PROMPT: &str = "Clear all transactions? This cannot be undone.";

/// Ledger subcommands
#[derive(Subcommand, Debug)]
pub enum LedgerCommands {
    /// Record a new transaction
    Add {
        /// What the money was for
        description: String,
        /// Amount, e.g. "12.50" (the sign is ignored)
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// income or expense (defaults to the configured type)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// List all transactions with totals
    #[command(alias = "ls")]
    List,
    /// Show income, expense and balance totals
    Summary,
    /// Remove a transaction by id or unique id prefix
    #[command(alias = "rm")]
    Remove {
        /// Transaction id (the short form shown by `list` is enough)
        id: String,
    },
    /// Remove all transactions
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a ledger command
pub fn handle_ledger_command<S: KeyValueStorage>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    cmd: LedgerCommands,
) -> LedgerResult<()> {
    match cmd {
        LedgerCommands::Add {
            description,
            amount,
            kind,
        } => {
            let kind = kind.unwrap_or_else(|| settings.default_kind.as_str().to_string());
            let form = TransactionForm::new(description, amount, kind);
            let txn = submit(ledger, &form)?;

            let view = ledger.render();
            let amount = view
                .list
                .rows()
                .first()
                .map(|row| row.amount.clone())
                .unwrap_or_default();
            println!("Added {} ({}): {}", txn.description, txn.id.short(), amount);
            println!();
            print!("{}", format_summary(&view.summary));
        }

        LedgerCommands::List => {
            print!("{}", format_ledger(&ledger.render()));
        }

        LedgerCommands::Summary => {
            print!("{}", format_summary(&ledger.render().summary));
        }

        LedgerCommands::Remove { id } => {
            let id = resolve_id(ledger, &id)?;
            if ledger.remove_transaction(&id)? {
                println!("Removed transaction {}", id.short());
            } else {
                println!("No transaction matched '{}'", id);
            }
            println!();
            print!("{}", format_summary(&ledger.render().summary));
        }

        LedgerCommands::Clear { yes } => {
            let outcome = clear_with_confirmation(ledger, || yes || confirm(CLEAR_PROMPT))?;
            match outcome {
                ClearOutcome::Cleared(count) => {
                    println!("Cleared {} transaction(s).", count);
                    println!();
                    print!("{}", format_ledger(&ledger.render()));
                }
                ClearOutcome::Cancelled => println!("Aborted."),
            }
        }
    }

    Ok(())
}

/// Map user input to a stored id
///
/// An exact id wins; otherwise a prefix must identify exactly one entry. An
/// id that matches nothing is passed through so removal stays a no-op.
pub fn resolve_id<S: KeyValueStorage>(ledger: &Ledger<S>, input: &str) -> LedgerResult<TransactionId> {
    let input = input.trim();
    let exact = TransactionId::from(input);
    if ledger.get(&exact).is_some() {
        return Ok(exact);
    }

    let matches = ledger.find_by_prefix(input);
    match matches.as_slice() {
        [] => Ok(exact),
        [only] => Ok(only.id.clone()),
        many => Err(LedgerError::Validation(format!(
            "Id prefix '{}' is ambiguous ({} matches)",
            input,
            many.len()
        ))),
    }
}

/// Ask a yes/no question on stdin; anything but "y"/"yes" is a no
fn confirm(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => is_yes(&answer),
        Err(_) => false,
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
