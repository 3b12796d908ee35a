use std::fs::OpenOptions;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};
use log::info;

use pocket_ledger::cli::{handle_ledger_command, LedgerCommands};
use pocket_ledger::config::{LedgerPaths, Settings};
use pocket_ledger::display::DisplayOptions;
use pocket_ledger::services::Ledger;
use pocket_ledger::storage::{open_file_store, STORAGE_KEY};
use pocket_ledger::tui::{run_tui, App};

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Track income and expenses from the terminal",
    long_about = "Pocket Ledger records income and expense transactions, keeps them \
                  in a local JSON file and shows running totals. Run without a \
                  subcommand to open the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config {
        /// Write the settings file so it can be edited
        #[arg(long)]
        init: bool,
    },

    #[command(flatten)]
    Ledger(LedgerCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(&paths, interactive)?;

    let settings = Settings::load_or_create(&paths)?;
    let store = open_file_store(&paths)?;
    let mut ledger = Ledger::open(store).with_display(DisplayOptions::from(&settings));

    match cli.command {
        None | Some(Commands::Tui) => {
            run_tui(App::new(ledger, settings))?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("Pocket Ledger Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", paths.storage_file(STORAGE_KEY).display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Timestamp format:    {}", settings.timestamp_format);
            println!("  Thousands separator: {:?}", settings.thousands_separator);
            println!("  Decimal separator:   {:?}", settings.decimal_separator);
            println!("  Default type:        {}", settings.default_kind);
        }
        Some(Commands::Ledger(cmd)) => {
            handle_ledger_command(&mut ledger, &settings, cmd)?;
        }
    }

    Ok(())
}

/// Log to stderr for one-shot commands, to the log file while the TUI owns
/// the screen. `RUST_LOG` overrides the default level.
fn init_logging(paths: &LedgerPaths, interactive: bool) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(if interactive {
        "info"
    } else {
        "warn"
    }));

    if interactive {
        paths.ensure_directories()?;
        let log_path = paths.log_file();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    info!("Using data directory {}", paths.base_dir().display());
    Ok(())
}
