//! Calculator TUI Example
//!
//! Opens the keypad with default settings and no logging.
//!
//! Run with: cargo run --example calculator_tui --features tui

use deskcalc::config::UiConfig;
use deskcalc::tui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tui::run(UiConfig::default())?;
    Ok(())
}
