//! Base trait for page state.

/// Marker trait for page state objects.
///
/// States are plain values: cloneable, comparable (tests assert on whole
/// snapshots) and with a `Default` that matches a freshly mounted page.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
