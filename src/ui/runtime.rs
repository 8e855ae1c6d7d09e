use crate::config::Config;
use crate::quiz::{QuestionBank, QuizController, ScoreAnimator};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the interactive quiz until the user quits.
///
/// Score animation tasks are spawned on `runtime`; everything else happens on
/// the calling thread, one event at a time.
pub fn run(bank: Arc<QuestionBank>, config: &Config, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownHandle::new();
    let events = EventHandler::new(TICK_RATE, shutdown.clone());

    let animator = ScoreAnimator::new(runtime, config.tick(), Arc::new(events.sender()));
    let controller =
        QuizController::new(bank, config.quiz.require_answer).with_animator(animator);
    let mut snapshots = controller.subscribe();
    let mut app = App::new(controller);

    tracing::info!(
        questions = app.controller().total(),
        require_answer = config.quiz.require_answer,
        tick_ms = config.animation.tick_ms,
        "Quiz started"
    );

    let mut dirty = true;
    loop {
        if dirty || snapshots.has_changed().unwrap_or(true) {
            snapshots.mark_unchanged();
            terminal.draw(|frame| draw(frame, &app))?;
            dirty = false;
        }
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                // Status line may change without the quiz state changing
                dirty = true;
            }
            Ok(AppEvent::Tick) => dirty |= app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::trace!(cols, rows, "Terminal resized");
                dirty = true;
            }
            Ok(AppEvent::ScoreTick(tick)) => app.on_score_tick(tick),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    tracing::info!("Quiz closed");
    Ok(())
}
