//! Button-press calculation engine
//!
//! Holds the display buffer, at most one pending operation, the memory
//! register and the clear-on-next-input flag. Operators chain strictly
//! left to right; there is no precedence.

use tracing::{debug, trace, warn};

use crate::core::{
    format_result, parse_operand, ButtonAction, CalcError, CalcResult, Operation,
    DIVIDE_BY_ZERO_MESSAGE, MAX_ENTRY_LEN,
};

/// The first operand together with the operator waiting for a second one
///
/// Keeping both in one value means an operand can never be pending
/// without an operator, or the other way round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOperation {
    /// Display text captured when the operator was pressed
    pub operand: String,
    /// The operator awaiting its second operand
    pub op: Operation,
}

/// Calculator engine state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Engine {
    display: String,
    pending: Option<PendingOperation>,
    memory: String,
    clear_on_next_input: bool,
}

impl Engine {
    /// Creates an engine with an empty display and memory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.pending.as_ref()
    }

    /// Returns the first operand, empty when nothing is pending
    #[must_use]
    pub fn operand1(&self) -> &str {
        self.pending.as_ref().map_or("", |p| p.operand.as_str())
    }

    /// Returns the pending operator
    #[must_use]
    pub fn pending_op(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.op)
    }

    /// Returns the memory register
    #[must_use]
    pub fn memory(&self) -> &str {
        &self.memory
    }

    /// Returns true if memory holds a value
    #[must_use]
    pub fn has_memory(&self) -> bool {
        !self.memory.is_empty()
    }

    /// Returns whether the next digit replaces the display
    #[must_use]
    pub fn clear_on_next_input(&self) -> bool {
        self.clear_on_next_input
    }

    /// Returns true if the display currently shows the divide-by-zero error
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == DIVIDE_BY_ZERO_MESSAGE
    }

    /// Dispatches a keypad button to the matching operation
    pub fn press(&mut self, action: ButtonAction) {
        trace!(button = action.label(), "button pressed");
        match action {
            ButtonAction::Digit(d) => self.input_digit(d),
            ButtonAction::Decimal => self.input_decimal(),
            ButtonAction::Operator(Operation::Subtract) => self.input_minus(),
            ButtonAction::Operator(op) => self.input_operator(op),
            ButtonAction::Equals => self.calculate(),
            ButtonAction::Clear => self.clear(),
            ButtonAction::ClearEntry => self.clear_entry(),
            ButtonAction::MemoryClear => self.memory_clear(),
            ButtonAction::MemoryRecall => self.memory_recall(),
            ButtonAction::MemoryStore => self.memory_store(),
        }
    }

    /// Presses a sequence of buttons in order
    pub fn press_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = ButtonAction>,
    {
        for action in actions {
            self.press(action);
        }
    }

    /// Enters a digit; out-of-range digits are ignored, as are digits
    /// past [`MAX_ENTRY_LEN`]
    pub fn input_digit(&mut self, digit: u8) {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.clear_on_next_input || self.display == "0" {
            self.display.clear();
            self.display.push(ch);
            self.clear_on_next_input = false;
        } else if self.display.len() < MAX_ENTRY_LEN {
            self.display.push(ch);
        } else {
            trace!(len = self.display.len(), "entry full");
        }
    }

    /// Enters a decimal point, at most one per number
    pub fn input_decimal(&mut self) {
        if self.clear_on_next_input || self.display.is_empty() {
            self.display = "0.".to_string();
            self.clear_on_next_input = false;
        } else if self.display == "-" {
            self.display = "-0.".to_string();
        } else if !self.display.contains('.') && self.display.len() < MAX_ENTRY_LEN {
            self.display.push('.');
        }
    }

    /// The subtract button: starts a negative number on an empty display,
    /// otherwise acts as the subtract operator
    pub fn input_minus(&mut self) {
        if self.display.is_empty() {
            self.display.push('-');
            self.clear_on_next_input = false;
        } else {
            self.input_operator(Operation::Subtract);
        }
    }

    /// Presses a binary operator, first resolving any pending operation
    pub fn input_operator(&mut self, op: Operation) {
        if self.display.is_empty() {
            return;
        }
        if self.pending.is_some() {
            self.calculate();
        }
        debug!(operand = %self.display, op = %op, "operator pending");
        self.pending = Some(PendingOperation {
            operand: self.display.clone(),
            op,
        });
        self.clear_on_next_input = true;
    }

    /// Applies the pending operator to the first operand and the display
    ///
    /// Does nothing when either operand is not a number, including when no
    /// operator is pending.
    pub fn calculate(&mut self) {
        let Some(pending) = self.pending.as_ref() else {
            trace!("calculate with nothing pending");
            return;
        };
        let operand2 = self.display.as_str();
        match Self::evaluate(pending, operand2) {
            Ok(value) => {
                self.display = format_result(value);
                debug!(result = %self.display, "calculated");
                self.reset_operation();
            }
            Err(CalcError::DivisionByZero) => {
                warn!(operand = %pending.operand, "divide by zero");
                self.display = DIVIDE_BY_ZERO_MESSAGE.to_string();
                self.reset_operation();
            }
            Err(err @ CalcError::InvalidOperand(_)) => {
                debug!(error = %err, "calculation skipped");
            }
        }
    }

    fn evaluate(pending: &PendingOperation, operand2: &str) -> CalcResult<f32> {
        let a = parse_operand(&pending.operand)?;
        let b = parse_operand(operand2)?;
        pending.op.apply(a, b)
    }

    fn reset_operation(&mut self) {
        self.pending = None;
        self.clear_on_next_input = true;
    }

    /// C: empties the display and drops any pending operation
    pub fn clear(&mut self) {
        self.display.clear();
        self.pending = None;
        self.clear_on_next_input = false;
    }

    /// CE: empties the display only
    pub fn clear_entry(&mut self) {
        self.display.clear();
    }

    /// MS: stores the display in memory
    pub fn memory_store(&mut self) {
        self.memory = self.display.clone();
    }

    /// MR: copies memory to the display if it holds a value
    pub fn memory_recall(&mut self) {
        if !self.memory.is_empty() {
            self.display = self.memory.clone();
        }
    }

    /// MC: erases memory
    pub fn memory_clear(&mut self) {
        self.memory.clear();
    }
}
