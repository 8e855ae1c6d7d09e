//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - Timer events (score animation ticks)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
