use crate::ui::mvi::UiState;

pub const DEFAULT_INITIAL_VALUE: i64 = 0;
pub const DEFAULT_STEP: i64 = 1;

/// Counter value and the configuration it was mounted with.
///
/// `count` is always `initial_value + k * step` for some integer `k`
/// (modulo wrapping). No bounds are enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub count: i64,
    pub initial_value: i64,
    pub step: i64,
}

impl CounterState {
    pub fn new(initial_value: i64, step: i64) -> Self {
        Self {
            count: initial_value,
            initial_value,
            step,
        }
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_VALUE, DEFAULT_STEP)
    }
}

impl UiState for CounterState {}
