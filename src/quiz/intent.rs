//! Intents accepted by the quiz reducer.

use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizIntent {
    /// Highlight an option on the current question without committing it.
    SelectOption { option: String },

    /// Commit the selection and advance, or finish on the last question.
    Next,

    /// Go back one question. Ignored on the first question.
    Previous,

    /// Throw away the attempt and start over.
    Restart,

    /// Score animation step. The controller filters stale generations
    /// before this reaches the reducer.
    ScoreTick { value: u8 },
}

impl Intent for QuizIntent {}
