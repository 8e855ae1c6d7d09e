//! Quiz controller: owns the attempt state and everything that mutates it.

use std::sync::Arc;

use tokio::sync::watch;

use crate::mvi::Reducer;
use crate::quiz::animation::{AnimationHandle, ScoreAnimator, ScoreTick};
use crate::quiz::error::QuizError;
use crate::quiz::intent::QuizIntent;
use crate::quiz::question::{Question, QuestionBank};
use crate::quiz::reducer::QuizReducer;
use crate::quiz::score;
use crate::quiz::state::QuizState;

/// What an accepted intent did to the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Intent was meaningless in the current state (e.g. Previous on the first question).
    Ignored,
    Selected,
    Moved { index: usize },
    Finished { final_percentage: u8 },
    Restarted,
    ScoreShown { value: u8 },
}

/// Owns the [`QuizState`] of one quiz and publishes every change.
///
/// Intents are applied strictly in call order. Views subscribe with
/// [`QuizController::subscribe`] and re-render when the snapshot changes.
pub struct QuizController {
    reducer: QuizReducer,
    state: QuizState,
    publisher: watch::Sender<QuizState>,
    animator: Option<ScoreAnimator>,
    animation: Option<AnimationHandle>,
    /// Bumped on every entry into Finished and every restart.
    generation: u64,
}

impl QuizController {
    /// Controller without a score animation: the final score shows at once.
    pub fn new(bank: Arc<QuestionBank>, require_answer: bool) -> Self {
        let state = QuizState::default();
        let (publisher, _) = watch::channel(state.clone());
        Self {
            reducer: QuizReducer::new(bank, require_answer),
            state,
            publisher,
            animator: None,
            animation: None,
            generation: 0,
        }
    }

    pub fn with_animator(mut self, animator: ScoreAnimator) -> Self {
        self.animator = Some(animator);
        self
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<QuizState> {
        self.publisher.subscribe()
    }

    pub fn bank(&self) -> &QuestionBank {
        self.reducer.bank()
    }

    pub fn total(&self) -> usize {
        self.bank().len()
    }

    pub fn require_answer(&self) -> bool {
        self.reducer.require_answer()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.bank().get(self.state.current_index)
    }

    /// `(current_index, total)` for the header.
    pub fn progress(&self) -> (usize, usize) {
        (self.state.current_index, self.total())
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_index == self.bank().last_index()
    }

    pub fn raw_score(&self) -> usize {
        score::raw_score(self.bank(), &self.state.answers)
    }

    pub fn final_percentage(&self) -> u8 {
        score::final_percentage(self.bank(), &self.state.answers)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generation of the running score animation, if one is in flight.
    pub fn animation_generation(&self) -> Option<u64> {
        self.animation.as_ref().map(AnimationHandle::generation)
    }

    /// True while the result view is still counting up.
    pub fn is_animating(&self) -> bool {
        self.state.finished && self.state.display_score < self.final_percentage()
    }

    pub fn select_option(&mut self, option: &str) -> Result<Transition, QuizError> {
        if self.state.finished {
            return Ok(Transition::Ignored);
        }
        let index = self.state.current_index;
        let valid = self
            .current_question()
            .is_some_and(|question| question.has_option(option));
        if !valid {
            tracing::warn!(index, option, "Rejected option not offered by question");
            return Err(QuizError::InvalidOption {
                option: option.to_string(),
                index,
            });
        }

        tracing::debug!(index, option, "Option selected");
        self.dispatch(QuizIntent::SelectOption {
            option: option.to_string(),
        });
        Ok(Transition::Selected)
    }

    /// Select by 0-based position in the current question's option list.
    pub fn select_position(&mut self, position: usize) -> Result<Transition, QuizError> {
        if self.state.finished {
            return Ok(Transition::Ignored);
        }
        let option = self
            .current_question()
            .and_then(|question| question.options.get(position))
            .cloned();
        match option {
            Some(option) => self.select_option(&option),
            None => Err(QuizError::InvalidOption {
                option: format!("#{}", position + 1),
                index: self.state.current_index,
            }),
        }
    }

    pub fn next(&mut self) -> Result<Transition, QuizError> {
        if self.state.finished {
            return Ok(Transition::Ignored);
        }
        let index = self.state.current_index;
        if self.reducer.require_answer() && !self.state.has_answer_for_current() {
            tracing::warn!(index, "Rejected Next on unanswered question");
            return Err(QuizError::Unanswered { index });
        }

        self.dispatch(QuizIntent::Next);

        if self.state.finished {
            let final_percentage = self.final_percentage();
            tracing::info!(
                correct = self.raw_score(),
                total = self.total(),
                final_percentage,
                "Quiz finished"
            );
            self.start_animation(final_percentage);
            Ok(Transition::Finished { final_percentage })
        } else {
            tracing::debug!(index = self.state.current_index, "Moved to next question");
            Ok(Transition::Moved {
                index: self.state.current_index,
            })
        }
    }

    pub fn previous(&mut self) -> Transition {
        if !self.state.can_go_previous() {
            return Transition::Ignored;
        }
        self.dispatch(QuizIntent::Previous);
        tracing::debug!(index = self.state.current_index, "Moved to previous question");
        Transition::Moved {
            index: self.state.current_index,
        }
    }

    /// Reset to a fresh attempt, cancelling any score animation in flight.
    pub fn restart(&mut self) -> Transition {
        if let Some(animation) = self.animation.take() {
            animation.cancel();
        }
        self.generation += 1;
        self.dispatch(QuizIntent::Restart);
        tracing::info!(generation = self.generation, "Quiz restarted");
        Transition::Restarted
    }

    /// Apply a tick from the score animation. Ticks from an older generation
    /// are dropped.
    pub fn apply_score_tick(&mut self, tick: ScoreTick) -> Transition {
        if tick.generation != self.generation || !self.state.finished {
            tracing::trace!(
                tick_generation = tick.generation,
                generation = self.generation,
                "Dropped stale score tick"
            );
            return Transition::Ignored;
        }

        let before = self.state.display_score;
        self.dispatch(QuizIntent::ScoreTick { value: tick.value });
        if self.state.display_score == before {
            return Transition::Ignored;
        }
        if !self.is_animating() {
            self.animation = None;
        }
        Transition::ScoreShown {
            value: self.state.display_score,
        }
    }

    fn start_animation(&mut self, final_percentage: u8) {
        self.generation += 1;
        match &self.animator {
            Some(animator) => {
                let handle = animator.start(self.generation, final_percentage);
                tracing::debug!(
                    generation = handle.generation(),
                    period_ms = animator.period().as_millis() as u64,
                    target = final_percentage,
                    "Score animation started"
                );
                // Replacing the handle drops, and so cancels, any previous task.
                if let Some(previous) = self.animation.replace(handle) {
                    tracing::trace!(generation = previous.generation(), "Replaced score animation");
                }
            }
            None => {
                self.dispatch(QuizIntent::ScoreTick {
                    value: final_percentage,
                });
            }
        }
    }

    fn dispatch(&mut self, intent: QuizIntent) {
        let next = self
            .reducer
            .reduce(std::mem::take(&mut self.state), intent);
        if next != *self.publisher.borrow() {
            self.publisher.send_replace(next.clone());
        }
        self.state = next;
    }
}
