use crate::ui::mvi::Intent;
use crate::ui::todo::state::TodoId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoIntent {
    /// Add a record from arbitrary text. Whitespace-only text is ignored.
    Add { text: String },
    /// Add a record from the pending input (Add button / Enter).
    Submit,
    Toggle { id: TodoId },
    Delete { id: TodoId },
    InputChar(char),
    Backspace,
    ClearInput,
    SelectNext,
    SelectPrevious,
    ToggleSelected,
    DeleteSelected,
}

impl Intent for TodoIntent {}
