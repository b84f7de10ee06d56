//! Model-View-Intent (MVI) primitives shared by every page.
//!
//! ```text
//! Key ──→ Intent ──→ Reducer ──→ State ──→ View
//!  ↑                                        │
//!  └────────────────────────────────────────┘
//! ```
//!
//! - **State**: owned snapshot of everything a page renders
//! - **Intent**: one user action (key press, button)
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
