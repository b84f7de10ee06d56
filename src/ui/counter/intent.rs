use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// `count += step`
    Increment,
    /// `count -= step`. Negative results are fine.
    Decrement,
    /// Back to the initial value, not to zero.
    Reset,
}

impl Intent for CounterIntent {}
