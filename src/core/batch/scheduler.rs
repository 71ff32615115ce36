//! Task scheduling backends
//!
//! Delayed status resets and notification pushes are fire-and-forget. They
//! go through [`TaskScheduler`] so hosts can pick the timer backend.

use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::error;

/// A unit of deferred work
pub type ScheduledTask = BoxFuture<'static, ()>;

/// Backend running tasks after a delay, detached from the caller
pub trait TaskScheduler: Send + Sync + std::fmt::Debug {
    /// Run `task` once `delay` has elapsed
    fn schedule_after(&self, delay: Duration, task: ScheduledTask);

    /// Run `task` as soon as possible
    fn spawn(&self, task: ScheduledTask) {
        self.schedule_after(Duration::ZERO, task);
    }
}

/// Scheduler backed by a tokio runtime
///
/// A scheduler built with [`TokioScheduler::current`] or
/// [`TokioScheduler::with_handle`] keeps spawning on that runtime even when
/// called from outside it. The default scheduler looks the runtime up on
/// every call and drops tasks scheduled with no runtime entered.
#[derive(Debug, Default, Clone)]
pub struct TokioScheduler {
    handle: Option<Handle>,
}

impl TokioScheduler {
    /// Bind to the runtime entered by the caller, if any
    pub fn current() -> Self {
        Self {
            handle: Handle::try_current().ok(),
        }
    }

    /// Bind to an explicit runtime
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    fn runtime(&self) -> Option<Handle> {
        match &self.handle {
            Some(handle) => Some(handle.clone()),
            None => match Handle::try_current() {
                Ok(handle) => Some(handle),
                Err(e) => {
                    error!("Dropping scheduled task, no tokio runtime: {}", e);
                    None
                }
            },
        }
    }
}

impl TaskScheduler for TokioScheduler {
    fn schedule_after(&self, delay: Duration, task: ScheduledTask) {
        if let Some(handle) = self.runtime() {
            handle.spawn(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                task.await;
            });
        }
    }
}

struct QueuedTask {
    due: Duration,
    seq: u64,
    task: ScheduledTask,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    queue: Vec<QueuedTask>,
}

/// Scheduler driven by an explicit virtual clock
///
/// Nothing runs until [`ManualScheduler::advance`] moves the clock past a
/// task's due time. Suits hosts with their own tick loop and deterministic
/// tests.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.queue.len())
            .finish()
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed so far
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Tasks waiting to run
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Move the clock forward by `by`, running every task that falls due
    ///
    /// Tasks run one at a time in due order, ties in scheduling order. Tasks
    /// scheduled while advancing run too if they fall due before the target.
    /// Returns how many tasks ran.
    pub async fn advance(&self, by: Duration) -> usize {
        let target = self.state.lock().now + by;
        let mut ran = 0;

        while let Some(task) = self.pop_due(target) {
            task.await;
            ran += 1;
        }

        let mut state = self.state.lock();
        state.now = state.now.max(target);
        ran
    }

    /// Run the tasks already due without moving the clock
    pub async fn run_pending(&self) -> usize {
        self.advance(Duration::ZERO).await
    }

    fn pop_due(&self, target: Duration) -> Option<ScheduledTask> {
        let mut state = self.state.lock();
        let index = state
            .queue
            .iter()
            .enumerate()
            .filter(|(_, queued)| queued.due <= target)
            .min_by_key(|(_, queued)| (queued.due, queued.seq))
            .map(|(index, _)| index)?;

        let queued = state.queue.swap_remove(index);
        state.now = state.now.max(queued.due);
        Some(queued.task)
    }
}

impl TaskScheduler for ManualScheduler {
    fn schedule_after(&self, delay: Duration, task: ScheduledTask) {
        let mut state = self.state.lock();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.queue.push(QueuedTask { due, seq, task });
    }
}
