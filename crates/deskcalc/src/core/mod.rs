//! Calculation core: operators, keypad layout and the button-press engine
//!
//! Nothing in here knows about terminals; front-ends feed
//! [`ButtonAction`]s into an [`Engine`] and read back its display.

pub mod engine;
pub mod keypad;
mod operations;

pub use engine::Engine;
pub use keypad::{ButtonAction, Keypad, KeypadButton};
pub use operations::Operation;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Text shown in the display after a division by zero
pub const DIVIDE_BY_ZERO_MESSAGE: &str = "ERROR: Divide by zero";

/// Calculator error types
///
/// None of these escape the engine as failures: division by zero is turned
/// into [`DIVIDE_BY_ZERO_MESSAGE`] on the display and an invalid operand
/// simply skips the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Operand text could not be read as a number
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),
}

/// Parses operand text the way the display holds it
pub fn parse_operand(text: &str) -> CalcResult<f32> {
    text.trim()
        .parse::<f32>()
        .map_err(|_| CalcError::InvalidOperand(text.to_string()))
}

/// Longest text a typed entry may grow to
pub const MAX_ENTRY_LEN: usize = 16;

/// Formats a result for the display
///
/// Magnitudes of 1e15 and up, or non-zero ones below 1e-6, use exponent
/// form (`1e27`, `-2.5e-8`) so the text stays short. [`parse_operand`]
/// reads both forms back.
#[must_use]
pub fn format_result(value: f32) -> String {
    let magnitude = value.abs();
    if value.is_finite() && (magnitude >= 1e15 || (magnitude != 0.0 && magnitude < 1e-6)) {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}
