//! deskcalc: four-function calculator with a terminal keypad
//!
//! ## Usage
//!
//! ```bash
//! deskcalc                      # Open the interactive keypad
//! deskcalc press 3 + 4 =        # Print "7"
//! deskcalc keypad               # Show the button layout
//! ```

use std::process::ExitCode;

use clap::Parser;
use deskcalc::cli::{Cli, Commands};
use deskcalc::config::{AppConfig, UiConfig};
use deskcalc::core::Keypad;
use deskcalc::error::AppResult;
use deskcalc::logging::{self, LogSink};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::resolve(cli.config.as_deref())?;
    if let Some(file) = cli.log_file {
        config.logging.file = Some(file);
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            logging::init(&config.logging, cli.verbose, LogSink::FileOnly)?;
            run_tui(config.ui)
        }
        Commands::Press(args) => {
            logging::init(&config.logging, cli.verbose, LogSink::Stderr)?;
            debug!(labels = ?args.labels, "pressing buttons");
            let display = deskcalc::press_labels(&args.labels)?;
            println!("{display}");
            Ok(())
        }
        Commands::Keypad => {
            println!("{}", Keypad::new().to_text());
            Ok(())
        }
    }
}

#[cfg(feature = "tui")]
fn run_tui(ui: UiConfig) -> AppResult<()> {
    deskcalc::tui::run(ui)
}

#[cfg(not(feature = "tui"))]
fn run_tui(_ui: UiConfig) -> AppResult<()> {
    Err(deskcalc::error::AppError::terminal(
        "interactive keypad not enabled. Rebuild with --features tui",
    ))
}
