//! Deferred task queue with an explicit clock
//!
//! Time only moves when the owner advances it, which keeps the terminal UI
//! and the tests deterministic. The terminal feeds it wall-clock elapsed
//! time; tests fast-forward by hand.

use std::collections::HashMap;
use std::time::Duration;

use tracing::trace;

use crate::surface::{DeferredTask, Scheduler};

/// Pending cosmetic tasks keyed by task, one deadline each
#[derive(Debug, Clone, Default)]
pub struct DeferredQueue {
    now: Duration,
    pending: HashMap<DeferredTask, Duration>,
}

impl DeferredQueue {
    /// Creates an empty queue at time zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current queue time
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Whether `task` is still waiting to fire
    #[must_use]
    pub fn is_pending(&self, task: DeferredTask) -> bool {
        self.pending.contains_key(&task)
    }

    /// Number of pending tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Time left until the earliest deadline
    #[must_use]
    pub fn time_until_next(&self) -> Option<Duration> {
        self.pending
            .values()
            .min()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    /// Moves the clock forward by `elapsed` and returns the tasks now due
    pub fn advance(&mut self, elapsed: Duration) -> Vec<DeferredTask> {
        self.advance_to(self.now + elapsed)
    }

    /// Moves the clock to `now` and returns the tasks now due, earliest
    /// first. The clock never runs backwards.
    pub fn advance_to(&mut self, now: Duration) -> Vec<DeferredTask> {
        self.now = self.now.max(now);

        let mut due: Vec<(Duration, DeferredTask)> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= self.now)
            .map(|(task, deadline)| (*deadline, *task))
            .collect();
        due.sort_unstable();

        for (_, task) in &due {
            self.pending.remove(task);
        }
        due.into_iter().map(|(_, task)| task).collect()
    }

    /// Fast-forwards past every pending deadline and returns all tasks
    pub fn drain_all(&mut self) -> Vec<DeferredTask> {
        let last = self.pending.values().max().copied().unwrap_or(self.now);
        self.advance_to(last)
    }
}

impl Scheduler for DeferredQueue {
    fn schedule(&mut self, task: DeferredTask, delay: Duration) {
        let deadline = self.now + delay;
        if self.pending.insert(task, deadline).is_some() {
            trace!(?task, ?deadline, "superseded pending task");
        } else {
            trace!(?task, ?deadline, "scheduled task");
        }
    }
}
