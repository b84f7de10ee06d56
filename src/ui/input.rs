use crate::ui::app::{App, Page};
use crate::ui::todo::TodoIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Route one key event to the shell or the active page.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.next_page();
            return;
        }
        KeyCode::BackTab => {
            app.previous_page();
            return;
        }
        KeyCode::F(1) => {
            app.set_page(Page::Home);
            return;
        }
        KeyCode::F(2) => {
            app.set_page(Page::Counter);
            return;
        }
        KeyCode::F(3) => {
            app.set_page(Page::Todo);
            return;
        }
        _ => {}
    }

    match app.page() {
        Page::Home => {
            if key.code == KeyCode::Char('q') {
                app.request_quit();
            }
        }
        Page::Counter => handle_counter_key(app, key),
        Page::Todo => handle_todo_key(app, key),
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => app.counter_mut().increment(),
        KeyCode::Char('-') | KeyCode::Down => app.counter_mut().decrement(),
        KeyCode::Char('r') | KeyCode::Char('0') => app.counter_mut().reset(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_todo_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 't') {
        app.dispatch_todo(TodoIntent::ToggleSelected);
        return;
    }

    let intent = match key.code {
        KeyCode::Enter => TodoIntent::Submit,
        KeyCode::Backspace => TodoIntent::Backspace,
        KeyCode::Esc => TodoIntent::ClearInput,
        KeyCode::Up => TodoIntent::SelectPrevious,
        KeyCode::Down => TodoIntent::SelectNext,
        KeyCode::Delete => TodoIntent::DeleteSelected,
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            TodoIntent::InputChar(ch)
        }
        _ => return,
    };
    app.dispatch_todo(intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
