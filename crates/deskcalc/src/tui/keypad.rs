//! Keypad widget for the terminal UI
//!
//! Draws the [`Keypad`] layout as a grid of bracketed labels and maps
//! mouse positions back to buttons.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::core::{ButtonAction, Keypad};

/// Inner area of the keypad block, inside its border
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Width and height of one button cell, or `None` when the labels do
/// not fit and the keypad is drawn empty
fn cell_size(keypad: &Keypad, inner: Rect) -> Option<(u16, u16)> {
    let (rows, cols) = keypad.dimensions();
    if inner.width < cols as u16 * 4 || inner.height < rows as u16 {
        return None;
    }
    Some((inner.width / cols as u16, inner.height / rows as u16))
}

/// Converts a click position to a button index
///
/// Clicks never land on a keypad too small to show its labels.
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    let inner = inner_area(area);
    if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
        return None;
    }

    let (btn_width, btn_height) = cell_size(keypad, inner)?;

    let col = ((x - inner.x) / btn_width) as usize;
    let row = ((y - inner.y) / btn_height) as usize;
    keypad.index_at(row, col)
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    focused: Option<usize>,
    pressed: Option<usize>,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            focused: None,
            pressed: None,
        }
    }

    /// Highlights the button that has keyboard focus
    #[must_use]
    pub fn focused(mut self, index: Option<usize>) -> Self {
        self.focused = index;
        self
    }

    /// Highlights the most recently pressed button
    #[must_use]
    pub fn pressed(mut self, index: Option<usize>) -> Self {
        self.pressed = index;
        self
    }

    fn style_for(&self, index: usize, action: ButtonAction) -> Style {
        if self.pressed == Some(index) {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        let base = match action {
            ButtonAction::Digit(_) | ButtonAction::Decimal => Style::default().fg(Color::White),
            ButtonAction::Operator(_) => Style::default().fg(Color::Yellow),
            ButtonAction::Equals => Style::default().fg(Color::Green),
            ButtonAction::Clear | ButtonAction::ClearEntry => Style::default().fg(Color::Red),
            ButtonAction::MemoryClear | ButtonAction::MemoryRecall | ButtonAction::MemoryStore => {
                Style::default().fg(Color::Magenta)
            }
        };
        if self.focused == Some(index) {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        let inner = inner_area(area);
        let Some((btn_width, btn_height)) = cell_size(self.keypad, inner) else {
            return; // Too small to render
        };

        for (index, btn) in self.keypad.buttons().enumerate() {
            let x = inner.x + (btn.col as u16 * btn_width);
            let y = inner.y + (btn.row as u16 * btn_height);
            let style = self.style_for(index, btn.action);

            let label = format!("[{:>2}]", btn.label());
            let label_x = x + btn_width.saturating_sub(label.len() as u16) / 2;
            let label_y = y + btn_height / 2;

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, style), btn_width);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        // 4 columns of 5 cells, 6 rows of 2 cells, plus the border
        Rect::new(0, 0, 22, 14)
    }

    fn render_to_string(widget: KeypadWidget<'_>, area: Rect) -> String {
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    // ===== hit_test =====

    #[test]
    fn test_hit_test_first_button() {
        let keypad = Keypad::new();
        let idx = hit_test(&keypad, area(), 1, 1).unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().label(), "MC");
    }

    #[test]
    fn test_hit_test_each_cell_maps_to_grid() {
        let keypad = Keypad::new();
        // Row 1 (y = 3..5), col 2 (x = 11..16) is the 9
        let idx = hit_test(&keypad, area(), 12, 3).unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().label(), "9");
        // Row 5, col 3 is =
        let idx = hit_test(&keypad, area(), 17, 12).unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().label(), "=");
    }

    #[test]
    fn test_hit_test_gap() {
        let keypad = Keypad::new();
        // Row 5, col 0 has no button
        assert!(hit_test(&keypad, area(), 2, 12).is_none());
    }

    #[test]
    fn test_hit_test_border_and_outside() {
        let keypad = Keypad::new();
        assert!(hit_test(&keypad, area(), 0, 0).is_none());
        assert!(hit_test(&keypad, area(), 21, 5).is_none());
        assert!(hit_test(&keypad, area(), 100, 100).is_none());
    }

    #[test]
    fn test_hit_test_offset_area() {
        let keypad = Keypad::new();
        let area = Rect::new(10, 5, 22, 14);
        assert!(hit_test(&keypad, area, 5, 5).is_none());
        let idx = hit_test(&keypad, area, 11, 6).unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().label(), "MC");
    }

    #[test]
    fn test_hit_test_matches_unrendered_keypad() {
        let keypad = Keypad::new();
        // 14 inner columns: one per button would fit, labels would not
        let narrow = Rect::new(0, 0, 16, 14);
        let content = render_to_string(KeypadWidget::new(&keypad), narrow);
        assert!(!content.contains('['));
        for x in 1..15 {
            for y in 1..13 {
                assert!(hit_test(&keypad, narrow, x, y).is_none(), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_hit_test_smallest_rendered_keypad() {
        let keypad = Keypad::new();
        let snug = Rect::new(0, 0, 18, 8);
        let content = render_to_string(KeypadWidget::new(&keypad), snug);
        assert!(content.contains("[MC]"));
        let idx = hit_test(&keypad, snug, 1, 1).unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().label(), "MC");
    }

    #[test]
    fn test_hit_test_tiny_area() {
        let keypad = Keypad::new();
        assert!(hit_test(&keypad, Rect::new(0, 0, 4, 4), 1, 1).is_none());
    }

    // ===== Rendering =====

    #[test]
    fn test_render_labels() {
        let keypad = Keypad::new();
        let content = render_to_string(KeypadWidget::new(&keypad), area());
        assert!(content.contains("Keypad"));
        assert!(content.contains("[ 7]"));
        assert!(content.contains("[MS]"));
        assert!(content.contains("[CE]"));
        assert!(content.contains("[ =]"));
    }

    #[test]
    fn test_render_small_only_draws_border() {
        let keypad = Keypad::new();
        let small = Rect::new(0, 0, 8, 5);
        let content = render_to_string(KeypadWidget::new(&keypad), small);
        assert!(!content.contains("[ 7]"));
    }

    #[test]
    fn test_pressed_button_style() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad).pressed(Some(0));
        let style = widget.style_for(0, ButtonAction::MemoryClear);
        assert_eq!(style.bg, Some(Color::Yellow));
    }

    #[test]
    fn test_focused_button_style() {
        let keypad = Keypad::new();
        let widget = KeypadWidget::new(&keypad).focused(Some(4));
        let style = widget.style_for(4, ButtonAction::Digit(7));
        assert!(style.add_modifier.contains(Modifier::REVERSED));
        let other = widget.style_for(5, ButtonAction::Digit(8));
        assert!(!other.add_modifier.contains(Modifier::REVERSED));
    }
}
