//! TUI application state
//!
//! Owns the calculation engine and the keypad; translates focus moves and
//! clicks into button presses.

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::hit_test;
use super::ui::layout;
use crate::config::UiConfig;
use crate::core::keypad::Direction;
use crate::core::{ButtonAction, Engine, Keypad};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    engine: Engine,
    keypad: Keypad,
    /// Button with the focus highlight
    focused: usize,
    /// Last pressed button, highlighted until the next press
    pressed: Option<usize>,
    ui: UiConfig,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    /// Creates a calculator app with the given UI settings
    #[must_use]
    pub fn with_config(ui: UiConfig) -> Self {
        let keypad = Keypad::new();
        let focused = keypad.find_button(ButtonAction::Digit(7)).unwrap_or(0);
        Self {
            engine: Engine::new(),
            keypad,
            focused,
            pressed: None,
            ui,
            should_quit: false,
        }
    }

    /// Returns the calculation engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the UI settings
    #[must_use]
    pub fn ui_config(&self) -> &UiConfig {
        &self.ui
    }

    /// Returns the focused button index
    #[must_use]
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Returns the last pressed button index
    #[must_use]
    pub fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display()
    }

    /// Presses the button at `index`; focus follows the press
    pub fn press_button(&mut self, index: usize) {
        let Some(btn) = self.keypad.get_button(index) else {
            return;
        };
        let action = btn.action;
        self.engine.press(action);
        self.pressed = Some(index);
        self.focused = index;
    }

    /// Presses the button performing `action`
    pub fn press_action(&mut self, action: ButtonAction) {
        if let Some(index) = self.keypad.find_button(action) {
            self.press_button(index);
        }
    }

    /// Presses the focused button
    pub fn press_focused(&mut self) {
        self.press_button(self.focused);
    }

    /// Moves the focus highlight
    pub fn move_focus(&mut self, direction: Direction) {
        self.focused = self.keypad.neighbor(self.focused, direction);
    }

    /// Handles a click at a terminal cell, given the full frame area
    pub fn click(&mut self, frame_area: Rect, column: u16, row: u16) {
        let keypad_area = layout(frame_area, self.ui.show_help).keypad;
        match hit_test(&self.keypad, keypad_area, column, row) {
            Some(index) => self.press_button(index),
            None => debug!(column, row, "click outside keypad buttons"),
        }
    }

    /// Applies an input action
    pub fn apply(&mut self, action: KeyAction, frame_area: Rect) {
        match action {
            KeyAction::MoveFocus(direction) => self.move_focus(direction),
            KeyAction::PressFocused => self.press_focused(),
            KeyAction::Click { column, row } => self.click(frame_area, column, row),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    /// Returns the status line: memory indicator and pending operation
    #[must_use]
    pub fn status_line(&self) -> String {
        let memory = if self.ui.show_memory_indicator && self.engine.has_memory() {
            "M"
        } else {
            " "
        };
        match self.engine.pending() {
            Some(pending) => format!("{memory}  {} {}", pending.operand, pending.op),
            None => memory.to_string(),
        }
    }
}
