//! State of one quiz attempt.

use crate::mvi::UiState;
use std::collections::BTreeMap;

/// Committed answers keyed by 0-based question index.
pub type AnswerLog = BTreeMap<usize, String>;

/// Snapshot of a quiz attempt.
///
/// `Default` is the freshly started quiz: first question, nothing selected,
/// nothing answered, not finished, score display at 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizState {
    pub current_index: usize,
    /// Option highlighted on the current question. Not committed until Next.
    pub selected_option: Option<String>,
    pub answers: AnswerLog,
    pub finished: bool,
    /// Animated score shown on the result view. Only meaningful when finished.
    pub display_score: u8,
}

impl UiState for QuizState {}

impl QuizState {
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.finished && self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.finished && self.selected_option.is_some()
    }

    pub fn answer_for(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    /// Whether the current question has anything that Next could commit.
    pub fn has_answer_for_current(&self) -> bool {
        self.selected_option.is_some() || self.answers.contains_key(&self.current_index)
    }

    /// One entry per question; filled up to and including the current one.
    pub fn progress_segments(&self, total: usize) -> Vec<bool> {
        (0..total)
            .map(|index| self.finished || index <= self.current_index)
            .collect()
    }
}
