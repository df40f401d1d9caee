//! Command-line interface

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

/// Four-function desk calculator with a memory register
#[derive(Debug, Parser)]
#[command(name = "deskcalc", version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "DESKCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides the config file)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Command to run; the interactive keypad when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive keypad (default)
    Run,

    /// Press buttons by label and print the final display
    Press(PressArgs),

    /// Print the keypad layout
    Keypad,
}

/// Arguments for the `press` subcommand
#[derive(Debug, clap::Args)]
pub struct PressArgs {
    /// Button labels in order: 0-9 . + - * / = C CE MC MR MS
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub labels: Vec<String>,
}
