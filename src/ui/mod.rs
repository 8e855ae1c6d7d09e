//! Terminal presentation of the quiz.
//!
//! A passive renderer: keys become controller calls, and the screen is
//! redrawn from the controller's state snapshot whenever it changes.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
