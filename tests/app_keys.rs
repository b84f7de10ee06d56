//! Keyboard-driven flows through the application shell.

mod common;

use common::*;
use component_lab::ui::app::{App, Page};
use component_lab::ui::counter::CounterState;
use component_lab::ui::input::handle_key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// -- navigation ---------------------------------------------------------------

#[test]
fn tab_cycles_pages() {
    let mut app = make_app(Page::Home);
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.page(), Page::Counter);
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.page(), Page::Todo);
    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.page(), Page::Home);
}

#[test]
fn back_tab_cycles_backwards() {
    let mut app = make_app(Page::Home);
    handle_key(&mut app, KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    assert_eq!(app.page(), Page::Todo);
}

#[test]
fn function_keys_jump_to_pages() {
    let mut app = make_app(Page::Home);
    handle_key(&mut app, press(KeyCode::F(3)));
    assert_eq!(app.page(), Page::Todo);
    handle_key(&mut app, press(KeyCode::F(2)));
    assert_eq!(app.page(), Page::Counter);
    handle_key(&mut app, press(KeyCode::F(1)));
    assert_eq!(app.page(), Page::Home);
}

#[test]
fn q_quits_outside_todo_page() {
    for page in [Page::Home, Page::Counter] {
        let mut app = make_app(page);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit(), "page {page:?}");
    }
}

// -- counter ------------------------------------------------------------------

#[test]
fn counter_keys() {
    let mut app = App::new(CounterState::new(10, 2), Page::Counter);
    handle_key(&mut app, press(KeyCode::Char('+')));
    handle_key(&mut app, press(KeyCode::Up));
    assert_eq!(app.counter().count(), 14);
    handle_key(&mut app, press(KeyCode::Char('-')));
    assert_eq!(app.counter().count(), 12);
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Down));
    assert_eq!(app.counter().count(), 8);
    handle_key(&mut app, press(KeyCode::Char('r')));
    assert_eq!(app.counter().count(), 10);
    assert_eq!(app.last_counter_change(), Some(10));
}

#[test]
fn counter_keys_ignored_on_other_pages() {
    let mut app = make_app(Page::Home);
    handle_key(&mut app, press(KeyCode::Char('+')));
    assert_eq!(app.counter().count(), 0);
    assert_eq!(app.last_counter_change(), None);
}

// -- todo ---------------------------------------------------------------------

#[test]
fn typing_and_enter_adds_todo() {
    let mut app = make_app(Page::Todo);
    type_text(&mut app, "Learn Jest");
    assert_eq!(app.todo().input(), "Learn Jest");
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.todo().total(), 1);
    assert_eq!(app.todo().items()[0].text, "Learn Jest");
    assert_eq!(app.todo().input(), "");
}

#[test]
fn enter_on_empty_input_adds_nothing() {
    let mut app = make_app(Page::Todo);
    handle_key(&mut app, press(KeyCode::Enter));
    type_text(&mut app, "   ");
    handle_key(&mut app, press(KeyCode::Enter));
    assert!(app.todo().is_empty());
}

#[test]
fn shifted_characters_are_typed() {
    let mut app = make_app(Page::Todo);
    handle_key(&mut app, KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT));
    type_text(&mut app, "odo");
    assert_eq!(app.todo().input(), "Todo");
}

#[test]
fn escape_clears_input() {
    let mut app = make_app(Page::Todo);
    type_text(&mut app, "draft");
    handle_key(&mut app, press(KeyCode::Esc));
    assert_eq!(app.todo().input(), "");
    assert!(!app.should_quit());
}

#[test]
fn end_to_end_scenario() {
    let mut app = make_app(Page::Todo);
    add_todo(&mut app, "Todo 1");
    add_todo(&mut app, "Todo 2");
    add_todo(&mut app, "Todo 3");
    assert_eq!(app.todo().total(), 3);

    // Selection starts on the first row.
    handle_key(&mut app, ctrl('t'));
    assert_eq!(app.todo().completed_count(), 1);
    assert_eq!(app.todo().remaining(), 2);

    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Delete));
    assert_eq!(app.todo().total(), 2);

    let rows: Vec<(&str, bool)> = app
        .todo()
        .items()
        .iter()
        .map(|item| (item.text.as_str(), item.completed))
        .collect();
    assert_eq!(rows, vec![("Todo 1", true), ("Todo 3", false)]);
}

#[test]
fn first_then_second_scenario() {
    let mut app = make_app(Page::Todo);
    add_todo(&mut app, "First");
    add_todo(&mut app, "Second");
    handle_key(&mut app, ctrl('t'));
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Delete));

    assert_eq!(app.todo().total(), 1);
    assert_eq!(app.todo().completed_count(), 1);
    assert_eq!(app.todo().items()[0].text, "First");
}
