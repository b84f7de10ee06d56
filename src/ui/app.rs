use crate::config::Config;
use crate::ui::counter::{Counter, CounterState};
use crate::ui::mvi::Reducer;
use crate::ui::todo::{TodoIntent, TodoListState, TodoReducer};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Counter,
    Todo,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::Counter, Page::Todo];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Counter => "Counter",
            Page::Todo => "Todo List",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::Counter => 1,
            Page::Todo => 2,
        }
    }

    pub fn next(self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Application shell: owns every page's state for the life of the process.
pub struct App {
    should_quit: bool,
    page: Page,
    counter: Counter,
    todo: TodoListState,
    /// Written by the counter's change callback, shown in the footer.
    last_counter_change: Rc<Cell<Option<i64>>>,
}

impl App {
    pub fn new(counter: CounterState, page: Page) -> Self {
        let last_counter_change = Rc::new(Cell::new(None));
        let observer = Rc::clone(&last_counter_change);
        let counter = Counter::new(counter).with_on_change(move |count| {
            tracing::info!(count, "counter changed");
            observer.set(Some(count));
        });

        Self {
            should_quit: false,
            page,
            counter,
            todo: TodoListState::default(),
            last_counter_change,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CounterState::new(config.counter.initial_value, config.counter.step),
            config.ui.start_page,
        )
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::debug!("quit requested");
        self.should_quit = true;
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            tracing::debug!(from = ?self.page, to = ?page, "page switch");
            self.page = page;
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.next());
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.previous());
    }

    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    pub fn counter_mut(&mut self) -> &mut Counter {
        &mut self.counter
    }

    /// Most recent value reported by the counter's change notification.
    pub fn last_counter_change(&self) -> Option<i64> {
        self.last_counter_change.get()
    }

    pub fn todo(&self) -> &TodoListState {
        &self.todo
    }

    /// Dispatch an intent to the todo reducer.
    pub fn dispatch_todo(&mut self, intent: TodoIntent) {
        tracing::debug!(?intent, "todo dispatch");
        dispatch_mvi!(self, todo, TodoReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        App::new(CounterState::default(), Page::Home)
    }

    #[test]
    fn page_cycle_wraps() {
        assert_eq!(Page::Todo.next(), Page::Home);
        assert_eq!(Page::Home.previous(), Page::Todo);
        assert_eq!(Page::Counter.next(), Page::Todo);
    }

    #[test]
    fn no_counter_change_before_first_action() {
        let app = make_app();
        assert_eq!(app.last_counter_change(), None);
    }

    #[test]
    fn counter_change_is_recorded() {
        let mut app = make_app();
        app.counter_mut().increment();
        app.counter_mut().increment();
        assert_eq!(app.last_counter_change(), Some(2));
        app.counter_mut().reset();
        assert_eq!(app.last_counter_change(), Some(0));
    }

    #[test]
    fn from_config_uses_counter_section() {
        let mut config = Config::default();
        config.counter.initial_value = 5;
        config.counter.step = 2;
        config.ui.start_page = Page::Counter;
        let app = App::from_config(&config);
        assert_eq!(app.page(), Page::Counter);
        assert_eq!(*app.counter().state(), CounterState::new(5, 2));
    }

    #[test]
    fn page_state_survives_switching() {
        let mut app = make_app();
        app.dispatch_todo(TodoIntent::Add {
            text: "keep me".to_string(),
        });
        app.next_page();
        app.next_page();
        app.next_page();
        assert_eq!(app.page(), Page::Home);
        assert_eq!(app.todo().total(), 1);
    }
}
