//! Score reveal animation.
//!
//! Counting the score up is a cancellable background task that only emits
//! [`ScoreTick`]s. It never touches quiz state; the controller applies a tick
//! only if its generation still matches the current Finished episode, so a
//! tick queued before a restart is dropped on arrival.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Cadence of the reference animation.
pub const DEFAULT_TICK: Duration = Duration::from_millis(20);

/// One step of the score animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTick {
    pub generation: u64,
    pub value: u8,
}

/// Destination for animation ticks.
pub trait TickSink: Send + Sync + 'static {
    /// Deliver a tick. Returns `false` once nobody is listening anymore.
    fn send_tick(&self, tick: ScoreTick) -> bool;
}

impl TickSink for UnboundedSender<ScoreTick> {
    fn send_tick(&self, tick: ScoreTick) -> bool {
        self.send(tick).is_ok()
    }
}

/// Spawns score animations on a tokio runtime.
#[derive(Clone)]
pub struct ScoreAnimator {
    runtime: Handle,
    period: Duration,
    sink: Arc<dyn TickSink>,
}

impl ScoreAnimator {
    pub fn new(runtime: Handle, period: Duration, sink: Arc<dyn TickSink>) -> Self {
        Self {
            runtime,
            period,
            sink,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start counting from 1 up to `target`, one value per period.
    ///
    /// The first tick fires one period after the start. A target of 0 emits
    /// nothing and the task completes immediately.
    pub fn start(&self, generation: u64, target: u8) -> AnimationHandle {
        let sink = Arc::clone(&self.sink);
        let period = self.period;

        let task = self.runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            for value in 1..=target {
                ticker.tick().await;
                if !sink.send_tick(ScoreTick { generation, value }) {
                    tracing::debug!(generation, value, "Score animation receiver gone");
                    return;
                }
            }
            tracing::trace!(generation, target, "Score animation complete");
        });

        AnimationHandle { generation, task }
    }
}

/// Running score animation. Dropping the handle cancels the task.
pub struct AnimationHandle {
    generation: u64,
    task: JoinHandle<()>,
}

impl AnimationHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Stop the task. No tick is emitted after this returns.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// True once every tick was emitted or the task was cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
