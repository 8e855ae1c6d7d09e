//! Model-View-Intent (MVI) primitives.
//!
//! Unidirectional data flow between the quiz core and whatever renders it:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of everything the view needs
//! - **Intent**: user actions or timer events
//! - **Reducer**: pure transition `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
