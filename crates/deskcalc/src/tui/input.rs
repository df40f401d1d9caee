//! Terminal event handling
//!
//! Buttons are pressed with the mouse, or by moving a focus highlight
//! with the arrow keys and pressing Enter. Digits and operators typed on
//! the keyboard are not interpreted.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::core::keypad::Direction;

/// Actions that can be triggered by terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the focus highlight
    MoveFocus(Direction),
    /// Press the focused button
    PressFocused,
    /// Left click at a terminal cell
    Click {
        /// Column of the click
        column: u16,
        /// Row of the click
        row: u16,
    },
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps terminal events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps any terminal event to an action
    #[must_use]
    pub fn handle_event(&self, event: &Event) -> KeyAction {
        match event {
            Event::Key(key) => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => KeyAction::None,
        }
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Up => KeyAction::MoveFocus(Direction::Up),
            KeyCode::Down => KeyAction::MoveFocus(Direction::Down),
            KeyCode::Left => KeyAction::MoveFocus(Direction::Left),
            KeyCode::Right => KeyAction::MoveFocus(Direction::Right),
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::PressFocused,
            KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// Maps a mouse event to an action; only left-button presses count
    #[must_use]
    pub fn handle_mouse(&self, event: MouseEvent) -> KeyAction {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => KeyAction::Click {
                column: event.column,
                row: event.row,
            },
            _ => KeyAction::None,
        }
    }
}
