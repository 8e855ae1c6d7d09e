//! Quiz core: question bank, state machine, scoring and score animation.
//!
//! Nothing in here knows about the terminal. The TUI in [`crate::ui`] is one
//! consumer; tests drive [`QuizController`] directly.

mod animation;
mod controller;
mod error;
mod intent;
mod question;
mod reducer;
mod score;
mod state;

pub use animation::{AnimationHandle, ScoreAnimator, ScoreTick, TickSink, DEFAULT_TICK};
pub use controller::{QuizController, Transition};
pub use error::QuizError;
pub use intent::QuizIntent;
pub use question::{Question, QuestionBank, QuestionFile, OPTIONS_PER_QUESTION};
pub use reducer::QuizReducer;
pub use score::{final_percentage, percentage, raw_score};
pub use state::{AnswerLog, QuizState};
