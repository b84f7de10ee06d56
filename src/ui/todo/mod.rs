//! Todo list page.
//!
//! Ordered records with add / toggle / delete, a pending-input line and a
//! keyboard selection. Counts are derived on read, never stored.

mod intent;
mod reducer;
mod state;
pub mod view;

pub use intent::TodoIntent;
pub use reducer::TodoReducer;
pub use state::{TodoId, TodoItem, TodoListState};
