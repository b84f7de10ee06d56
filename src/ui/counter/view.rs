use crate::ui::counter::state::CounterState;
use crate::ui::theme::{ACCENT, BUTTON_BORDER, DANGER, MUTED_TEXT, PANEL_BORDER, SUCCESS, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_counter(frame: &mut Frame<'_>, area: Rect, state: &CounterState) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Counter: {}", state.count),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            button("-", DANGER),
            Span::raw("  "),
            button("Reset", TEXT),
            Span::raw("  "),
            button("+", SUCCESS),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Step: {} | Initial: {}", state.step, state.initial_value),
            Style::default().fg(MUTED_TEXT),
        )),
    ];

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Counter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PANEL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn button(label: &'static str, color: Color) -> Span<'static> {
    Span::styled(
        format!("[ {label} ]"),
        Style::default().fg(color).bg(BUTTON_BORDER),
    )
}
