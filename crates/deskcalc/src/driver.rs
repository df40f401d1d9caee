//! Calculator drivers
//!
//! A driver presses keypad buttons and reads the display back. The
//! `verify_*` functions are written once against [`CalculatorDriver`] and
//! run against every front-end.

use crate::core::{ButtonAction, Engine, DIVIDE_BY_ZERO_MESSAGE};
use crate::error::{AppError, AppResult};

/// Abstract driver trait for calculator interactions
pub trait CalculatorDriver {
    /// Presses one button
    fn press(&mut self, action: ButtonAction);

    /// Gets the current display text
    fn display(&self) -> String;

    /// Gets the memory register
    fn memory(&self) -> String;

    /// Starts over with a fresh calculator
    fn reset(&mut self);

    /// Presses a button by its label
    fn press_label(&mut self, label: &str) -> AppResult<()> {
        let action =
            ButtonAction::from_label(label).ok_or_else(|| AppError::unknown_button(label))?;
        self.press(action);
        Ok(())
    }

    /// Presses a whitespace-separated sequence of labels, e.g. `"3 + 4 ="`
    fn enter(&mut self, sequence: &str) -> AppResult<()> {
        for label in sequence.split_whitespace() {
            self.press_label(label)?;
        }
        Ok(())
    }
}

/// Driver over the bare engine, no front-end involved
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    engine: Engine,
}

impl HeadlessDriver {
    /// Creates a new headless driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

impl CalculatorDriver for HeadlessDriver {
    fn press(&mut self, action: ButtonAction) {
        self.engine.press(action);
    }

    fn display(&self) -> String {
        self.engine.display().to_string()
    }

    fn memory(&self) -> String {
        self.engine.memory().to_string()
    }

    fn reset(&mut self) {
        self.engine = Engine::new();
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::layout::Rect;

    use super::CalculatorDriver;
    use crate::core::ButtonAction;
    use crate::tui::{layout, CalculatorApp};

    /// Drives the TUI app with mouse clicks on the rendered layout
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
        frame: Rect,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a TUI driver on an 80x24 frame
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(CalculatorApp::new(), Rect::new(0, 0, 80, 24))
        }

        /// Creates a TUI driver with an existing app and frame size
        #[must_use]
        pub fn with_app(app: CalculatorApp, frame: Rect) -> Self {
            Self { app, frame }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Terminal cell at the top-left of a button's grid cell
        fn cell_of(&self, action: ButtonAction) -> Option<(u16, u16)> {
            let keypad = self.app.keypad();
            let btn = keypad.get_button(keypad.find_button(action)?)?;
            let area = layout(self.frame, self.app.ui_config().show_help).keypad;
            let (rows, cols) = keypad.dimensions();
            let btn_width = area.width.saturating_sub(2) / cols as u16;
            let btn_height = area.height.saturating_sub(2) / rows as u16;
            Some((
                area.x + 1 + btn.col as u16 * btn_width,
                area.y + 1 + btn.row as u16 * btn_height,
            ))
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: ButtonAction) {
            if let Some((column, row)) = self.cell_of(action) {
                self.app.click(self.frame, column, row);
            }
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn memory(&self) -> String {
            self.app.engine().memory().to_string()
        }

        fn reset(&mut self) {
            self.app = CalculatorApp::with_config(self.app.ui_config().clone());
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behaviour checks =====
// These work with ANY CalculatorDriver implementation

fn enter<D: CalculatorDriver>(driver: &mut D, sequence: &str) {
    driver
        .enter(sequence)
        .unwrap_or_else(|e| panic!("cannot enter {sequence:?}: {e}"));
}

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (sequence, expected) in [
        ("3 + 4 =", "7"),
        ("1 0 - 4 =", "6"),
        ("6 * 7 =", "42"),
        ("2 0 / 8 =", "2.5"),
    ] {
        driver.reset();
        enter(driver, sequence);
        assert_eq!(driver.display(), expected, "{sequence}");
    }
}

/// Verifies that operators chain left to right without precedence
pub fn verify_left_to_right_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter(driver, "2 + 3 *");
    assert_eq!(driver.display(), "5");
    enter(driver, "4 =");
    assert_eq!(driver.display(), "20");
}

/// Verifies that digits replace the display after an operator or result
pub fn verify_replace_after_result<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter(driver, "1 2 +");
    enter(driver, "5");
    assert_eq!(driver.display(), "5");
    enter(driver, "=");
    assert_eq!(driver.display(), "17");
    enter(driver, "9");
    assert_eq!(driver.display(), "9");
}

/// Verifies that a number never gets a second decimal point
pub fn verify_single_decimal_point<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter(driver, ". 5 . 2 .");
    assert_eq!(driver.display(), "0.52");
}

/// Verifies divide-by-zero handling and recovery
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter(driver, "5 / 0 =");
    assert_eq!(driver.display(), DIVIDE_BY_ZERO_MESSAGE);
    enter(driver, "3");
    assert_eq!(driver.display(), "3");
}

/// Verifies the memory register
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter(driver, "4 2 MS CE");
    assert_eq!(driver.display(), "");
    enter(driver, "MR");
    assert_eq!(driver.display(), "42");
    assert_eq!(driver.memory(), "42");

    enter(driver, "MC C 7 MR");
    assert_eq!(driver.display(), "7");
    assert_eq!(driver.memory(), "");
}

/// Verifies the difference between C and CE
pub fn verify_clear_semantics<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter(driver, "8 + 5 CE 2 =");
    assert_eq!(driver.display(), "10");

    enter(driver, "C 8 + 5 C 2 =");
    // Nothing pending after C, so = leaves the display alone
    assert_eq!(driver.display(), "2");
}

/// Verifies that minus on an empty display starts a negative number
pub fn verify_negative_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.reset();
    enter(driver, "- 3 * 2 =");
    assert_eq!(driver.display(), "-6");
}

/// Runs every verification against a driver
pub fn verify_all<D: CalculatorDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_left_to_right_chaining(driver);
    verify_replace_after_result(driver);
    verify_single_decimal_point(driver);
    verify_divide_by_zero(driver);
    verify_memory(driver);
    verify_clear_semantics(driver);
    verify_negative_entry(driver);
}
