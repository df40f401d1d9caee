//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Width of the calculator column (display, status, keypad)
const CALCULATOR_WIDTH: u16 = 28;

/// Screen regions of the calculator UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Single-line output display
    pub display: Rect,
    /// Memory indicator and pending operation
    pub status: Rect,
    /// Keypad block, border included
    pub keypad: Rect,
    /// Help sidebar, when shown
    pub help: Option<Rect>,
}

/// Splits the frame into the calculator regions
///
/// Rendering and mouse hit-testing both go through here, so a click is
/// always resolved against the layout that was drawn.
#[must_use]
pub fn layout(area: Rect, show_help: bool) -> Areas {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Length(CALCULATOR_WIDTH), Constraint::Min(0)])
        .split(area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Display
            Constraint::Length(3), // Status
            Constraint::Min(8),    // Keypad
        ])
        .split(columns[0]);

    let help = (show_help && columns[1].width > 0).then_some(columns[1]);

    Areas {
        display: rows[0],
        status: rows[1],
        keypad: rows[2],
        help,
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let engine = self.app.engine();
        let style = if engine.is_error() {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(engine.display(), style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }

    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.app.status_line(),
            Style::default().fg(Color::Magenta),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(area, buf);
    }

    fn render_keypad(&self, area: Rect, buf: &mut Buffer) {
        KeypadWidget::new(self.app.keypad())
            .focused(Some(self.app.focused()))
            .pressed(self.app.pressed())
            .render(area, buf);
    }

    fn render_help(&self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .chain(std::iter::once(&("", "")))
            .chain(HELP_BUTTONS.iter())
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:>6}", key), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        List::new(items)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let ui = self.app.ui_config();
        Block::default()
            .title(ui.title.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .render(area, buf);

        let areas = layout(area, ui.show_help);
        self.render_display(areas.display, buf);
        self.render_status(areas.status, buf);
        self.render_keypad(areas.keypad, buf);
        if let Some(help) = areas.help {
            self.render_help(help, buf);
        }
    }
}

/// Interaction shortcuts
pub const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("Click", "Press button"),
    ("Arrows", "Move focus"),
    ("Enter", "Press focused"),
    ("q/Esc", "Quit"),
];

/// What the non-digit buttons do
pub const HELP_BUTTONS: &[(&str, &str)] = &[
    ("C", "Clear all"),
    ("CE", "Clear entry"),
    ("MS", "Memory store"),
    ("MR", "Memory recall"),
    ("MC", "Memory clear"),
];
