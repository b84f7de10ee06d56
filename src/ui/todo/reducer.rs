use crate::ui::mvi::Reducer;
use crate::ui::todo::intent::TodoIntent;
use crate::ui::todo::state::{TodoId, TodoItem, TodoListState};

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Intent = TodoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TodoIntent::Add { text } => add(state, &text),
            TodoIntent::Submit => {
                let pending = state.input.clone();
                add(state, &pending)
            }
            TodoIntent::Toggle { id } => toggle(state, id),
            TodoIntent::Delete { id } => delete(state, id),
            TodoIntent::InputChar(ch) => {
                let mut state = state;
                state.input.push(ch);
                state
            }
            TodoIntent::Backspace => {
                let mut state = state;
                state.input.pop();
                state
            }
            TodoIntent::ClearInput => {
                let mut state = state;
                state.input.clear();
                state
            }
            TodoIntent::SelectNext => {
                let mut state = state;
                state.selected = if state.selected + 1 >= state.items.len() {
                    0
                } else {
                    state.selected + 1
                };
                state
            }
            TodoIntent::SelectPrevious => {
                let mut state = state;
                state.selected = if state.selected == 0 {
                    state.items.len().saturating_sub(1)
                } else {
                    state.selected - 1
                };
                state
            }
            TodoIntent::ToggleSelected => match state.selected_item().map(|item| item.id) {
                Some(id) => toggle(state, id),
                None => state,
            },
            TodoIntent::DeleteSelected => match state.selected_item().map(|item| item.id) {
                Some(id) => delete(state, id),
                None => state,
            },
        }
    }
}

fn add(mut state: TodoListState, text: &str) -> TodoListState {
    let text = text.trim();
    if text.is_empty() {
        return state;
    }
    let id = TodoId(state.next_id);
    state.next_id += 1;
    state.items.push(TodoItem {
        id,
        text: text.to_string(),
        completed: false,
    });
    state.input.clear();
    state
}

fn toggle(mut state: TodoListState, id: TodoId) -> TodoListState {
    if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
        item.completed = !item.completed;
    }
    state
}

fn delete(mut state: TodoListState, id: TodoId) -> TodoListState {
    state.items.retain(|item| item.id != id);
    // Keep the highlight on a live row.
    state.selected = state.selected.min(state.items.len().saturating_sub(1));
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_items(texts: &[&str]) -> TodoListState {
        texts.iter().fold(TodoListState::default(), |state, text| {
            TodoReducer::reduce(
                state,
                TodoIntent::Add {
                    text: text.to_string(),
                },
            )
        })
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let state = with_items(&["a", "b", "c"]);
        let ids: Vec<u64> = state.items().iter().map(|item| item.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let state = with_items(&["a", "b"]);
        let state = TodoReducer::reduce(state, TodoIntent::Delete { id: TodoId(2) });
        let state = TodoReducer::reduce(
            state,
            TodoIntent::Add {
                text: "c".to_string(),
            },
        );
        assert_eq!(state.items()[1].id, TodoId(3));
    }

    #[test]
    fn submit_with_blank_input_keeps_input() {
        let state = TodoReducer::reduce(TodoListState::default(), TodoIntent::InputChar(' '));
        let state = TodoReducer::reduce(state, TodoIntent::Submit);
        assert!(state.is_empty());
        assert_eq!(state.input(), " ");
    }

    #[test]
    fn select_wraps_both_ways() {
        let state = with_items(&["a", "b", "c"]);
        let state = TodoReducer::reduce(state, TodoIntent::SelectPrevious);
        assert_eq!(state.selected(), 2);
        let state = TodoReducer::reduce(state, TodoIntent::SelectNext);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn select_on_empty_list_stays_at_zero() {
        let state = TodoReducer::reduce(TodoListState::default(), TodoIntent::SelectNext);
        assert_eq!(state.selected(), 0);
        let state = TodoReducer::reduce(state, TodoIntent::SelectPrevious);
        assert_eq!(state.selected(), 0);
    }

    #[test]
    fn deleting_last_row_clamps_selection() {
        let state = with_items(&["a", "b", "c"]);
        let state = TodoReducer::reduce(state, TodoIntent::SelectPrevious);
        let state = TodoReducer::reduce(state, TodoIntent::DeleteSelected);
        assert_eq!(state.total(), 2);
        assert_eq!(state.selected(), 1);
        assert_eq!(state.selected_item().map(|item| item.text.as_str()), Some("b"));
    }

    #[test]
    fn selected_intents_on_empty_list_are_noops() {
        let state = TodoReducer::reduce(TodoListState::default(), TodoIntent::ToggleSelected);
        let state = TodoReducer::reduce(state, TodoIntent::DeleteSelected);
        assert_eq!(state, TodoListState::default());
    }
}
