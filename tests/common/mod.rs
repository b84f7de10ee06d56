//! Shared test utilities.

#![allow(dead_code)]

use component_lab::ui::app::{App, Page};
use component_lab::ui::counter::CounterState;
use component_lab::ui::input::handle_key;
use component_lab::ui::render::draw;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

// -- App helpers --------------------------------------------------------------

pub fn make_app(page: Page) -> App {
    App::new(CounterState::default(), page)
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Type `text` key by key, like a user would.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press(KeyCode::Char(ch)));
    }
}

/// Type `text` and press Enter.
pub fn add_todo(app: &mut App, text: &str) {
    type_text(app, text);
    handle_key(app, press(KeyCode::Enter));
}

// -- Render helpers -----------------------------------------------------------

/// Render the whole app into an in-memory terminal and return its rows.
pub fn render_app(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    buffer_lines(terminal.backend().buffer())
}

pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

pub fn screen_contains(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

/// Row index of the first line containing `needle`.
pub fn row_of(lines: &[String], needle: &str) -> Option<usize> {
    lines.iter().position(|line| line.contains(needle))
}
