use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::reducer::CounterReducer;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

/// Observer invoked with the new count after every counter action.
pub type ChangeCallback = Box<dyn FnMut(i64)>;

/// Counter component: reducer-owned state plus an optional change callback.
///
/// The callback fires exactly once per action, after the state has been
/// replaced, and never on construction.
pub struct Counter {
    state: CounterState,
    on_change: Option<ChangeCallback>,
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(CounterState::default())
    }
}

impl Counter {
    pub fn new(state: CounterState) -> Self {
        Self {
            state,
            on_change: None,
        }
    }

    pub fn with_on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(i64) + 'static,
    {
        self.set_on_change(callback);
        self
    }

    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: FnMut(i64) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    pub fn count(&self) -> i64 {
        self.state.count
    }

    pub fn increment(&mut self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&mut self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn reset(&mut self) {
        self.dispatch(CounterIntent::Reset);
    }

    /// Run the reducer, then notify the observer with the resulting count.
    pub fn dispatch(&mut self, intent: CounterIntent) {
        self.state = CounterReducer::reduce(std::mem::take(&mut self.state), intent);
        tracing::debug!(?intent, count = self.state.count, "counter dispatch");
        if let Some(callback) = self.on_change.as_mut() {
            callback(self.state.count);
        }
    }
}
