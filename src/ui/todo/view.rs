use crate::ui::theme::{ACCENT, MUTED_TEXT, PANEL_BORDER, SELECTION, SUCCESS, TEXT};
use crate::ui::todo::state::{TodoItem, TodoListState};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub const PLACEHOLDER: &str = "Add a todo...";
pub const EMPTY_MESSAGE: &str = "No todos yet. Add one above!";
const ADD_BUTTON: &str = "[ Add ]";
const DELETE_BUTTON: &str = "[ Delete ]";

/// Render the todo page. When `focused`, the terminal cursor is placed at the
/// end of the pending input.
pub fn render_todo_list(frame: &mut Frame<'_>, area: Rect, state: &TodoListState, focused: bool) {
    let block = Block::default()
        .title(" Todo List ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);
    let (input_area, stats_area, items_area) = (chunks[0], chunks[1], chunks[2]);

    render_input(frame, input_area, state, focused);

    let stats = format!(
        " Total: {} | Completed: {} | Remaining: {}",
        state.total(),
        state.completed_count(),
        state.remaining()
    );
    frame.render_widget(
        Paragraph::new(Span::styled(stats, Style::default().fg(MUTED_TEXT))),
        stats_area,
    );

    let lines = if state.is_empty() {
        vec![Line::from(Span::styled(
            format!(" {EMPTY_MESSAGE}"),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ))]
    } else {
        let visible = items_area.height.max(1) as usize;
        let offset = state.selected().saturating_sub(visible - 1);
        state
            .items()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(idx, item)| item_line(item, idx == state.selected(), items_area.width))
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), items_area);
}

fn render_input(frame: &mut Frame<'_>, area: Rect, state: &TodoListState, focused: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused { ACCENT } else { PANEL_BORDER }));
    let inner = block.inner(area);

    let (text, text_style) = if state.input().is_empty() {
        (PLACEHOLDER, Style::default().fg(MUTED_TEXT))
    } else {
        (state.input(), Style::default().fg(TEXT))
    };
    let text_width = text.chars().count();
    let padding = (inner.width as usize)
        .saturating_sub(text_width)
        .saturating_sub(ADD_BUTTON.len())
        .max(1);
    let line = Line::from(vec![
        Span::styled(text.to_string(), text_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(ADD_BUTTON, Style::default().fg(SUCCESS)),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let typed = state.input().chars().count() as u16;
        let x = inner.x + typed.min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

fn item_line(item: &TodoItem, selected: bool, width: u16) -> Line<'static> {
    let marker = if selected { "›" } else { " " };
    let checkbox = if item.completed { "[x]" } else { "[ ]" };
    let text_style = if item.completed {
        Style::default()
            .fg(MUTED_TEXT)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(TEXT)
    };

    // marker + space + checkbox + space + text + padding + delete
    let used = 1 + 1 + checkbox.len() + 1 + item.text.chars().count() + DELETE_BUTTON.len();
    let padding = (width as usize).saturating_sub(used).max(2);

    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(ACCENT)),
        Span::raw(" "),
        Span::styled(checkbox, Style::default().fg(SUCCESS)),
        Span::raw(" "),
        Span::styled(item.text.clone(), text_style),
        Span::raw(" ".repeat(padding)),
        Span::styled(DELETE_BUTTON, Style::default().fg(MUTED_TEXT)),
    ]);
    if selected {
        line.style(Style::default().bg(SELECTION))
    } else {
        line
    }
}
