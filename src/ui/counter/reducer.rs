use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

/// Pure counter transitions.
///
/// Arithmetic wraps on overflow so every intent is total.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let count = match intent {
            CounterIntent::Increment => state.count.wrapping_add(state.step),
            CounterIntent::Decrement => state.count.wrapping_sub(state.step),
            CounterIntent::Reset => state.initial_value,
        };
        CounterState { count, ..state }
    }
}
