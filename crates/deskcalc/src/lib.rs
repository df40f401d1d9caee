//! deskcalc - four-function desk calculator
//!
//! A button-driven calculator: digits build up a display, operators chain
//! strictly left to right, `=` resolves the pending operation, and a
//! single memory register sits alongside. Division by zero shows an error
//! in the display instead of failing.
//!
//! The [`core::Engine`] knows nothing about terminals. The `tui` module
//! (default feature) puts a mouse-driven keypad in front of it.
//!
//! # Example
//!
//! ```rust
//! use deskcalc::prelude::*;
//!
//! let mut engine = Engine::new();
//! engine.press_all([
//!     ButtonAction::Digit(2),
//!     ButtonAction::Operator(Operation::Add),
//!     ButtonAction::Digit(3),
//!     ButtonAction::Operator(Operation::Multiply),
//!     ButtonAction::Digit(4),
//!     ButtonAction::Equals,
//! ]);
//! // No precedence: (2 + 3) * 4
//! assert_eq!(engine.display(), "20");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

use crate::driver::{CalculatorDriver, HeadlessDriver};
use crate::error::AppResult;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{AppConfig, LogLevel, LoggingConfig, UiConfig};
    pub use crate::core::{
        ButtonAction, CalcError, CalcResult, Engine, Keypad, KeypadButton, Operation,
        DIVIDE_BY_ZERO_MESSAGE,
    };
    pub use crate::driver::{CalculatorDriver, HeadlessDriver};
    pub use crate::error::{AppError, AppResult};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}

/// Presses the labelled buttons on a fresh calculator and returns the display
pub fn press_labels<S: AsRef<str>>(labels: &[S]) -> AppResult<String> {
    let mut driver = HeadlessDriver::new();
    for label in labels {
        driver.press_label(label.as_ref())?;
    }
    Ok(driver.display())
}
