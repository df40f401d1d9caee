//! Calculator keypad layout
//!
//! Toolkit-independent description of the buttons: what each one does,
//! what it is labelled and where it sits on the grid. Rendering and
//! pressed-state highlighting live in the front-end.

use crate::core::Operation;

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Binary operator
    Operator(Operation),
    /// Calculate the pending operation
    Equals,
    /// C: clear the display and any pending operation
    Clear,
    /// CE: clear the display only
    ClearEntry,
    /// MC: erase memory
    MemoryClear,
    /// MR: recall memory into the display
    MemoryRecall,
    /// MS: store the display into memory
    MemoryStore,
}

impl ButtonAction {
    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Digit(d) => DIGIT_LABELS.get(usize::from(*d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(Operation::Add) => "+",
            Self::Operator(Operation::Subtract) => "-",
            Self::Operator(Operation::Multiply) => "*",
            Self::Operator(Operation::Divide) => "/",
            Self::Equals => "=",
            Self::Clear => "C",
            Self::ClearEntry => "CE",
            Self::MemoryClear => "MC",
            Self::MemoryRecall => "MR",
            Self::MemoryStore => "MS",
        }
    }

    /// Parses a button label; memory and clear labels are case-insensitive
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if let Some(d) = DIGIT_LABELS.iter().position(|l| *l == label) {
            return u8::try_from(d).ok().map(Self::Digit);
        }
        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(op) = Operation::from_symbol(c) {
                return Some(Self::Operator(op));
            }
        }
        match label.to_ascii_uppercase().as_str() {
            "." => Some(Self::Decimal),
            "=" => Some(Self::Equals),
            "C" => Some(Self::Clear),
            "CE" => Some(Self::ClearEntry),
            "MC" => Some(Self::MemoryClear),
            "MR" => Some(Self::MemoryRecall),
            "MS" => Some(Self::MemoryStore),
            _ => None,
        }
    }

    /// Returns true for the memory buttons
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(
            self,
            Self::MemoryClear | Self::MemoryRecall | Self::MemoryStore
        )
    }
}

impl std::fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: ButtonAction,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a new button definition
    #[must_use]
    pub const fn new(action: ButtonAction, row: usize, col: usize) -> Self {
        Self { action, row, col }
    }

    /// Returns the label printed on the button
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.action.label()
    }
}

/// Direction for moving focus across the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous row
    Up,
    /// Next row
    Down,
    /// Previous column
    Left,
    /// Next column
    Right,
}

/// Keypad layout definition
///
/// ```text
/// [MC] [MR] [MS] [ C]
/// [ 7] [ 8] [ 9] [ /]
/// [ 4] [ 5] [ 6] [ *]
/// [ 1] [ 2] [ 3] [ -]
/// [ 0] [ .] [CE] [ +]
///                [ =]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard calculator keypad
    #[must_use]
    pub fn new() -> Self {
        use ButtonAction::{
            ClearEntry, Decimal, Digit, Equals, MemoryClear, MemoryRecall, MemoryStore,
            Operator,
        };

        let buttons = vec![
            // Row 0: MC MR MS C
            KeypadButton::new(MemoryClear, 0, 0),
            KeypadButton::new(MemoryRecall, 0, 1),
            KeypadButton::new(MemoryStore, 0, 2),
            KeypadButton::new(ButtonAction::Clear, 0, 3),
            // Row 1: 7 8 9 /
            KeypadButton::new(Digit(7), 1, 0),
            KeypadButton::new(Digit(8), 1, 1),
            KeypadButton::new(Digit(9), 1, 2),
            KeypadButton::new(Operator(Operation::Divide), 1, 3),
            // Row 2: 4 5 6 *
            KeypadButton::new(Digit(4), 2, 0),
            KeypadButton::new(Digit(5), 2, 1),
            KeypadButton::new(Digit(6), 2, 2),
            KeypadButton::new(Operator(Operation::Multiply), 2, 3),
            // Row 3: 1 2 3 -
            KeypadButton::new(Digit(1), 3, 0),
            KeypadButton::new(Digit(2), 3, 1),
            KeypadButton::new(Digit(3), 3, 2),
            KeypadButton::new(Operator(Operation::Subtract), 3, 3),
            // Row 4: 0 . CE +
            KeypadButton::new(Digit(0), 4, 0),
            KeypadButton::new(Decimal, 4, 1),
            KeypadButton::new(ClearEntry, 4, 2),
            KeypadButton::new(Operator(Operation::Add), 4, 3),
            // Row 5: =
            KeypadButton::new(Equals, 5, 3),
        ];

        Self {
            buttons,
            rows: 6,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the index of the button at a grid cell, if the cell is occupied
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.row == row && b.col == col)
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds the button performing an action
    #[must_use]
    pub fn find_button(&self, action: ButtonAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<usize> {
        ButtonAction::from_label(label).and_then(|action| self.find_button(action))
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }

    /// Moves from the button at `index` to the nearest button in `direction`
    ///
    /// Empty cells are skipped. Stays put when nothing lies that way.
    #[must_use]
    pub fn neighbor(&self, index: usize, direction: Direction) -> usize {
        let Some(start) = self.buttons.get(index) else {
            return index;
        };
        let (mut row, mut col) = (start.row, start.col);
        loop {
            match direction {
                Direction::Up if row > 0 => row -= 1,
                Direction::Down if row + 1 < self.rows => row += 1,
                Direction::Left if col > 0 => col -= 1,
                Direction::Right if col + 1 < self.cols => col += 1,
                _ => return index,
            }
            if let Some(found) = self.index_at(row, col) {
                return found;
            }
        }
    }

    /// Renders the layout as plain text, one grid row per line
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let cells: Vec<String> = (0..self.cols)
                .map(|col| match self.get_button_at(row, col) {
                    Some(btn) => format!("[{:>2}]", btn.label()),
                    None => "    ".to_string(),
                })
                .collect();
            lines.push(cells.join(" ").trim_end().to_string());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ButtonAction tests =====

    #[test]
    fn test_digit_labels() {
        for d in 0..=9u8 {
            let expected = char::from_digit(u32::from(d), 10).unwrap().to_string();
            assert_eq!(ButtonAction::Digit(d).label(), expected);
        }
    }

    #[test]
    fn test_out_of_range_digit_label() {
        assert_eq!(ButtonAction::Digit(12).label(), "?");
    }

    #[test]
    fn test_operator_labels() {
        for op in Operation::ALL {
            assert_eq!(
                ButtonAction::Operator(op).label(),
                op.symbol().to_string()
            );
        }
    }

    #[test]
    fn test_memory_and_clear_labels() {
        assert_eq!(ButtonAction::Clear.label(), "C");
        assert_eq!(ButtonAction::ClearEntry.label(), "CE");
        assert_eq!(ButtonAction::MemoryClear.label(), "MC");
        assert_eq!(ButtonAction::MemoryRecall.label(), "MR");
        assert_eq!(ButtonAction::MemoryStore.label(), "MS");
    }

    #[test]
    fn test_from_label_roundtrip() {
        let keypad = Keypad::new();
        for btn in keypad.buttons() {
            assert_eq!(ButtonAction::from_label(btn.label()), Some(btn.action));
        }
    }

    #[test]
    fn test_from_label_case_insensitive() {
        assert_eq!(ButtonAction::from_label("ms"), Some(ButtonAction::MemoryStore));
        assert_eq!(ButtonAction::from_label("ce"), Some(ButtonAction::ClearEntry));
        assert_eq!(ButtonAction::from_label(" c "), Some(ButtonAction::Clear));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(ButtonAction::from_label("%"), None);
        assert_eq!(ButtonAction::from_label("10"), None);
        assert_eq!(ButtonAction::from_label(""), None);
    }

    #[test]
    fn test_is_memory() {
        assert!(ButtonAction::MemoryStore.is_memory());
        assert!(!ButtonAction::Clear.is_memory());
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_has_all_buttons() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 21);
        assert_eq!(keypad.dimensions(), (6, 4));
        for d in 0..=9 {
            assert!(keypad.find_button(ButtonAction::Digit(d)).is_some());
        }
        for op in Operation::ALL {
            assert!(keypad.find_button(ButtonAction::Operator(op)).is_some());
        }
    }

    #[test]
    fn test_keypad_positions_unique() {
        let keypad = Keypad::new();
        for (i, a) in keypad.buttons().enumerate() {
            for b in keypad.buttons().skip(i + 1) {
                assert!((a.row, a.col) != (b.row, b.col));
            }
        }
    }

    #[test]
    fn test_keypad_get_button_at() {
        let keypad = Keypad::new();
        assert_eq!(keypad.get_button_at(0, 0).unwrap().label(), "MC");
        assert_eq!(keypad.get_button_at(1, 0).unwrap().label(), "7");
        assert_eq!(keypad.get_button_at(4, 2).unwrap().label(), "CE");
        assert_eq!(keypad.get_button_at(5, 3).unwrap().label(), "=");
        assert!(keypad.get_button_at(5, 0).is_none());
        assert!(keypad.get_button_at(10, 10).is_none());
    }

    #[test]
    fn test_keypad_find_by_label() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_button_by_label("MC"), Some(0));
        assert_eq!(keypad.find_button_by_label("7"), Some(4));
        assert_eq!(keypad.find_button_by_label("="), Some(20));
        assert_eq!(keypad.find_button_by_label("X"), None);
    }

    #[test]
    fn test_neighbor_moves() {
        let keypad = Keypad::new();
        let seven = keypad.find_button_by_label("7").unwrap();
        assert_eq!(
            keypad.neighbor(seven, Direction::Right),
            keypad.find_button_by_label("8").unwrap()
        );
        assert_eq!(
            keypad.neighbor(seven, Direction::Up),
            keypad.find_button_by_label("MC").unwrap()
        );
        assert_eq!(
            keypad.neighbor(seven, Direction::Down),
            keypad.find_button_by_label("4").unwrap()
        );
    }

    #[test]
    fn test_neighbor_stays_at_edge() {
        let keypad = Keypad::new();
        let mc = keypad.find_button_by_label("MC").unwrap();
        assert_eq!(keypad.neighbor(mc, Direction::Up), mc);
        assert_eq!(keypad.neighbor(mc, Direction::Left), mc);
    }

    #[test]
    fn test_neighbor_into_gap_stays() {
        let keypad = Keypad::new();
        let zero = keypad.find_button_by_label("0").unwrap();
        // Nothing below 0 in the last row
        assert_eq!(keypad.neighbor(zero, Direction::Down), zero);
    }

    #[test]
    fn test_neighbor_reaches_equals() {
        let keypad = Keypad::new();
        let plus = keypad.find_button_by_label("+").unwrap();
        assert_eq!(
            keypad.neighbor(plus, Direction::Down),
            keypad.find_button_by_label("=").unwrap()
        );
    }

    #[test]
    fn test_neighbor_invalid_index() {
        let keypad = Keypad::new();
        assert_eq!(keypad.neighbor(99, Direction::Up), 99);
    }

    #[test]
    fn test_to_text_layout() {
        let text = Keypad::new().to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "[MC] [MR] [MS] [ C]");
        assert_eq!(lines[1], "[ 7] [ 8] [ 9] [ /]");
        assert_eq!(lines[5].trim(), "[ =]");
    }
}
