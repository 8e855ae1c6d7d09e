//! Base trait for view state.

/// Marker trait for state objects.
///
/// States should be:
/// - Cloneable snapshots handed to the view
/// - Self-contained (all data needed to render)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable to their initial value
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
