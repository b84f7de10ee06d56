//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent describes a single user action against one page, for example
/// "increment the counter" or "add the pending todo". Reducers consume them.
pub trait Intent: Send + 'static {}
