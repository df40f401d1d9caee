//! TUI Calculator Demo
//!
//! Clicks through a few calculations on the TUI app without opening a
//! terminal, then runs the shared driver checks against it.
//!
//! Run with: cargo run --example calculator_tui_demo --features tui

#![allow(clippy::unwrap_used)]

use deskcalc::driver::{verify_all, CalculatorDriver, TuiDriver};

fn main() {
    let mut driver = TuiDriver::new();

    println!("Keypad:");
    println!("{}", driver.app().keypad().to_text());
    println!();

    for sequence in ["3 + 4 =", "2 + 3 * 4 =", "1 . 5 * 4 =", "5 / 0 =", "- 8 / 2 ="] {
        driver.reset();
        driver.enter(sequence).unwrap();
        println!("{sequence:<14} -> {}", driver.display());
    }

    println!();
    println!("Memory:");
    driver.reset();
    driver.enter("4 2 MS C").unwrap();
    println!("  after MS, C:  {:?}", driver.display());
    driver.enter("MR").unwrap();
    println!("  after MR:     {:?}", driver.display());

    verify_all(&mut driver);
    println!();
    println!("All driver checks passed.");
}
