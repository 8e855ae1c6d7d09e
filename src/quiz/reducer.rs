use std::sync::Arc;

use crate::mvi::Reducer;
use crate::quiz::intent::QuizIntent;
use crate::quiz::question::QuestionBank;
use crate::quiz::score::final_percentage;
use crate::quiz::state::QuizState;

/// Quiz state machine: `Active(i)` for every question index, then `Finished`.
pub struct QuizReducer {
    bank: Arc<QuestionBank>,
    require_answer: bool,
}

impl QuizReducer {
    pub fn new(bank: Arc<QuestionBank>, require_answer: bool) -> Self {
        Self {
            bank,
            require_answer,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn require_answer(&self) -> bool {
        self.require_answer
    }

    fn is_valid_option(&self, state: &QuizState, option: &str) -> bool {
        self.bank
            .get(state.current_index)
            .is_some_and(|question| question.has_option(option))
    }
}

impl Reducer for QuizReducer {
    type State = QuizState;
    type Intent = QuizIntent;

    fn reduce(&self, state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QuizIntent::SelectOption { option } => {
                if state.finished || !self.is_valid_option(&state, &option) {
                    return state;
                }
                QuizState {
                    selected_option: Some(option),
                    ..state
                }
            }

            QuizIntent::Next => {
                if state.finished {
                    return state;
                }
                if self.require_answer && !state.has_answer_for_current() {
                    return state;
                }

                let QuizState {
                    current_index,
                    selected_option,
                    mut answers,
                    ..
                } = state;

                if let Some(option) = selected_option {
                    answers.insert(current_index, option);
                }

                if current_index < self.bank.last_index() {
                    let next = current_index + 1;
                    QuizState {
                        current_index: next,
                        selected_option: answers.get(&next).cloned(),
                        answers,
                        finished: false,
                        display_score: 0,
                    }
                } else {
                    QuizState {
                        current_index,
                        selected_option: answers.get(&current_index).cloned(),
                        answers,
                        finished: true,
                        display_score: 0,
                    }
                }
            }

            QuizIntent::Previous => {
                if state.finished || state.current_index == 0 {
                    return state;
                }
                let previous = state.current_index - 1;
                QuizState {
                    current_index: previous,
                    selected_option: state.answers.get(&previous).cloned(),
                    ..state
                }
            }

            QuizIntent::Restart => QuizState::default(),

            QuizIntent::ScoreTick { value } => {
                if !state.finished
                    || value <= state.display_score
                    || value > final_percentage(&self.bank, &state.answers)
                {
                    return state;
                }
                QuizState {
                    display_score: value,
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reducer() -> QuizReducer {
        QuizReducer::new(Arc::new(QuestionBank::default()), true)
    }

    fn select(option: &str) -> QuizIntent {
        QuizIntent::SelectOption {
            option: option.to_string(),
        }
    }

    #[test]
    fn select_sets_selection_without_committing() {
        let state = reducer().reduce(QuizState::default(), select("Meow-Meow"));
        assert_eq!(state.selected_option.as_deref(), Some("Meow-Meow"));
        assert!(state.answers.is_empty());
    }

    #[test]
    fn select_is_idempotent() {
        let r = reducer();
        let once = r.reduce(QuizState::default(), select("Oink-Oink"));
        let twice = r.reduce(once.clone(), select("Oink-Oink"));
        assert_eq!(once, twice);
    }

    #[test]
    fn select_unknown_option_is_ignored() {
        let r = reducer();
        let state = r.reduce(QuizState::default(), select("Meow-Meow"));
        let after = r.reduce(state.clone(), select("Woof"));
        assert_eq!(after, state);
    }

    #[test]
    fn next_commits_and_advances() {
        let r = reducer();
        let state = r.reduce(QuizState::default(), select("Meow-Meow"));
        let state = r.reduce(state, QuizIntent::Next);
        assert_eq!(state.current_index, 1);
        assert_eq!(state.answer_for(0), Some("Meow-Meow"));
        assert!(state.selected_option.is_none());
    }

    #[test]
    fn next_without_answer_is_rejected_when_required() {
        let state = reducer().reduce(QuizState::default(), QuizIntent::Next);
        assert!(state.is_initial());
    }

    #[test]
    fn next_without_answer_advances_when_allowed() {
        let r = QuizReducer::new(Arc::new(QuestionBank::default()), false);
        let state = r.reduce(QuizState::default(), QuizIntent::Next);
        assert_eq!(state.current_index, 1);
        assert!(state.answers.is_empty());
    }

    #[test]
    fn previous_at_first_question_is_noop() {
        let state = reducer().reduce(QuizState::default(), QuizIntent::Previous);
        assert!(state.is_initial());
    }

    #[test]
    fn previous_discards_uncommitted_selection() {
        let r = reducer();
        let state = r.reduce(QuizState::default(), select("Meow-Meow"));
        let state = r.reduce(state, QuizIntent::Next);
        let state = r.reduce(state, select("Books"));
        let state = r.reduce(state, QuizIntent::Previous);
        assert_eq!(state.current_index, 0);
        assert_eq!(state.selected_option.as_deref(), Some("Meow-Meow"));
        assert!(state.answer_for(1).is_none());
    }

    #[test]
    fn last_next_finishes() {
        let r = reducer();
        let mut state = QuizState::default();
        for answer in ["Meow-Meow", "Ice Cream", "Yellow", "Infinite"] {
            state = r.reduce(state, select(answer));
            state = r.reduce(state, QuizIntent::Next);
        }
        assert!(state.finished);
        assert_eq!(state.current_index, 3);
        assert_eq!(state.display_score, 0);
        assert_eq!(state.answers.len(), 4);
    }

    #[test]
    fn intents_after_finish_are_ignored() {
        let r = reducer();
        let finished = QuizState {
            current_index: 3,
            finished: true,
            ..QuizState::default()
        };
        for intent in [select("Two"), QuizIntent::Next, QuizIntent::Previous] {
            assert_eq!(r.reduce(finished.clone(), intent), finished);
        }
    }

    #[test]
    fn score_tick_only_counts_up_to_final_percentage() {
        let r = reducer();
        let mut state = QuizState {
            current_index: 3,
            finished: true,
            ..QuizState::default()
        };
        state.answers.insert(0, "Meow-Meow".into());
        state.answers.insert(1, "Shoes".into());
        state.answers.insert(2, "Blue".into());
        state.answers.insert(3, "Two".into());

        let state = r.reduce(state, QuizIntent::ScoreTick { value: 25 });
        assert_eq!(state.display_score, 25);
        let state = r.reduce(state, QuizIntent::ScoreTick { value: 26 });
        assert_eq!(state.display_score, 25);
        let state = r.reduce(state, QuizIntent::ScoreTick { value: 3 });
        assert_eq!(state.display_score, 25);
    }

    #[test]
    fn score_tick_while_active_is_ignored() {
        let state = reducer().reduce(QuizState::default(), QuizIntent::ScoreTick { value: 1 });
        assert!(state.is_initial());
    }

    #[test]
    fn restart_returns_initial_state() {
        let r = reducer();
        let state = r.reduce(QuizState::default(), select("Meow-Meow"));
        let state = r.reduce(state, QuizIntent::Next);
        let state = r.reduce(state, QuizIntent::Restart);
        assert!(state.is_initial());
    }
}
