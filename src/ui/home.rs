//! Static landing page. No state, no intents.

use crate::ui::theme::{ACCENT, MUTED_TEXT, PANEL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const HEADING: &str = "Home";
pub const WELCOME: &str = "Welcome to the home page";

pub fn render_home(frame: &mut Frame<'_>, area: Rect) {
    let muted = Style::default().fg(MUTED_TEXT);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            HEADING,
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(Span::styled(WELCOME, Style::default().fg(TEXT))),
        Line::from(""),
        Line::from(Span::styled("F2 / Tab: Counter", muted)),
        Line::from(Span::styled("F3: Todo List", muted)),
    ];

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PANEL_BORDER)),
        );
    frame.render_widget(widget, area);
}
