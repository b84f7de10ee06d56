//! Counter page.
//!
//! A single signed integer with increment / decrement / reset actions.
//!
//! - `state.rs` - count plus the configured initial value and step
//! - `intent.rs` - the three button actions
//! - `reducer.rs` - wrapping arithmetic, pure
//! - `component.rs` - owns the state and fires the change notification
//! - `view.rs` - ratatui rendering

mod component;
mod intent;
mod reducer;
mod state;
pub mod view;

pub use component::{ChangeCallback, Counter};
pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::{CounterState, DEFAULT_INITIAL_VALUE, DEFAULT_STEP};
