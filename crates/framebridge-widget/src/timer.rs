use std::time::{Duration, Instant};

use crate::error::Result;

/// Delay between a lifecycle trigger and the height report it schedules,
/// giving layout time to settle.
pub const LAYOUT_SETTLE_DELAY: Duration = Duration::from_millis(100);

type Task = Box<dyn FnOnce() -> Result<()>>;

struct Entry {
    due: Instant,
    task: Task,
}

/// Deferred one-shot tasks, driven by the frame's event loop.
///
/// Entries are fire-and-forget: once scheduled they cannot be cancelled and
/// nothing awaits them. Due tasks run in scheduling order.
#[derive(Default)]
pub struct TimerQueue {
    entries: Vec<Entry>,
}

impl TimerQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a task to run `delay` after `now`.
    pub fn schedule(
        &mut self,
        now: Instant,
        delay: Duration,
        task: impl FnOnce() -> Result<()> + 'static,
    ) {
        self.entries.push(Entry {
            due: now + delay,
            task: Box::new(task),
        });
    }

    /// Number of tasks not yet fired.
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Remove and return every task due at `now`, in scheduling order.
    ///
    /// Callers run the returned tasks outside the queue borrow, so a task may
    /// schedule follow-up work.
    pub fn take_due(&mut self, now: Instant) -> Vec<Task> {
        let mut due = Vec::new();
        let mut index = 0;
        while index < self.entries.len() {
            if self.entries[index].due <= now {
                due.push(self.entries.remove(index).task);
            } else {
                index += 1;
            }
        }
        due
    }

    /// Run every task due at `now`. Returns the number of tasks run; a task
    /// error propagates and abandons the remaining due tasks.
    pub fn run_due(&mut self, now: Instant) -> Result<usize> {
        let due = self.take_due(now);
        let count = due.len();
        for task in due {
            task()?;
        }
        Ok(count)
    }
}
