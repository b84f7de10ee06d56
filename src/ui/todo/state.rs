use crate::ui::mvi::UiState;
use std::fmt;

/// Identifier of a todo record, unique for the lifetime of its list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(pub u64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    /// Trimmed and never empty.
    pub text: String,
    pub completed: bool,
}

/// Todo list state.
///
/// Fields are private so records can only enter through the reducer, which
/// enforces the trimming rule and hands out identifiers from `next_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoListState {
    pub(super) items: Vec<TodoItem>,
    pub(super) input: String,
    pub(super) next_id: u64,
    pub(super) selected: usize,
}

impl Default for TodoListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            input: String::new(),
            next_id: 1,
            selected: 0,
        }
    }
}

impl UiState for TodoListState {}

impl TodoListState {
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Pending text of the input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Index of the highlighted record. Meaningless while the list is empty.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.items.get(self.selected)
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn remaining(&self) -> usize {
        self.total() - self.completed_count()
    }
}
