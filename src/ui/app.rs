use crate::quiz::{QuizController, QuizError, QuizState, ScoreTick, Transition};
use std::time::{Duration, Instant};

/// How long a rejection message stays in the footer.
const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: &'static str,
    pub shown_at: Instant,
}

/// TUI-side application state wrapped around the quiz controller.
pub struct App {
    should_quit: bool,
    controller: QuizController,
    status: Option<StatusMessage>,
}

impl App {
    pub fn new(controller: QuizController) -> Self {
        Self {
            should_quit: false,
            controller,
            status: None,
        }
    }

    pub fn controller(&self) -> &QuizController {
        &self.controller
    }

    pub fn state(&self) -> &QuizState {
        self.controller.state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn status(&self) -> Option<&'static str> {
        self.status.as_ref().map(|status| status.text)
    }

    /// Expires the status line. Returns true when something changed on screen.
    pub fn on_tick(&mut self) -> bool {
        let expired = self
            .status
            .as_ref()
            .is_some_and(|status| status.shown_at.elapsed() >= STATUS_TTL);
        if expired {
            self.status = None;
        }
        expired
    }

    pub fn on_score_tick(&mut self, tick: ScoreTick) {
        self.controller.apply_score_tick(tick);
    }

    pub fn select_position(&mut self, position: usize) {
        let result = self.controller.select_position(position);
        self.record(result);
    }

    /// Move the highlighted option up (negative) or down, wrapping around.
    pub fn move_selection(&mut self, delta: isize) {
        let Some(question) = self.controller.current_question() else {
            return;
        };
        if self.state().finished {
            return;
        }
        let count = question.options.len() as isize;
        let current = self
            .state()
            .selected_option
            .as_deref()
            .and_then(|option| question.position_of(option));
        let target = match current {
            Some(position) => (position as isize + delta).rem_euclid(count),
            None if delta < 0 => count - 1,
            None => 0,
        };
        self.select_position(target as usize);
    }

    pub fn next(&mut self) {
        let result = self.controller.next();
        self.record(result);
    }

    pub fn previous(&mut self) {
        self.controller.previous();
        self.status = None;
    }

    pub fn restart(&mut self) {
        self.controller.restart();
        self.status = None;
    }

    fn record(&mut self, result: Result<Transition, QuizError>) {
        match result {
            Ok(_) => self.status = None,
            Err(err) => {
                self.status = Some(StatusMessage {
                    text: err.user_message(),
                    shown_at: Instant::now(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuestionBank;
    use std::sync::Arc;

    fn app() -> App {
        App::new(QuizController::new(Arc::new(QuestionBank::default()), true))
    }

    #[test]
    fn rejected_next_sets_status() {
        let mut app = app();
        app.next();
        assert_eq!(app.status(), Some("Pick an answer first"));

        app.select_position(0);
        assert_eq!(app.status(), None);
    }

    #[test]
    fn move_selection_wraps() {
        let mut app = app();
        app.move_selection(1);
        assert_eq!(app.state().selected_option.as_deref(), Some("Bhau-Bhau"));
        app.move_selection(-1);
        assert_eq!(app.state().selected_option.as_deref(), Some("Oink-Oink"));
        app.move_selection(1);
        assert_eq!(app.state().selected_option.as_deref(), Some("Bhau-Bhau"));
    }

    #[test]
    fn move_selection_up_from_nothing_picks_last() {
        let mut app = app();
        app.move_selection(-1);
        assert_eq!(app.state().selected_option.as_deref(), Some("Oink-Oink"));
    }

    #[test]
    fn tick_keeps_fresh_status() {
        let mut app = app();
        app.next();
        assert!(!app.on_tick());
        assert!(app.status().is_some());
    }
}
