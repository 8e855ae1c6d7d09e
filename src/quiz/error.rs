use thiserror::Error;

/// Errors raised by the quiz core.
///
/// `InvalidOption` and `Unanswered` reject a single intent and leave the
/// quiz state untouched. `InvalidConfiguration` is only produced while
/// building a [`QuestionBank`](crate::quiz::QuestionBank) and is fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Option '{option}' is not one of the choices for question {}", .index + 1)]
    InvalidOption { option: String, index: usize },

    #[error("Question {} has no answer selected", .index + 1)]
    Unanswered { index: usize },

    #[error("Invalid question configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl QuizError {
    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        QuizError::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Short message for the status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            QuizError::InvalidOption { .. } => "That is not one of the options",
            QuizError::Unanswered { .. } => "Pick an answer first",
            QuizError::InvalidConfiguration { .. } => "The question set is invalid",
        }
    }
}
