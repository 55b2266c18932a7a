//! Next-tick scheduler

use crate::domain::value_objects::DeferredTask;
use crate::ports::outbound::TickScheduler;
use shared_types::Tick;
use std::collections::VecDeque;
use tracing::debug;

/// Queues deferred tasks for a later tick.
///
/// Tasks deferred during tick `n` become due at `n + delay`; each is handed
/// out by `drain_due` exactly once.
#[derive(Debug, Clone)]
pub struct NextTickScheduler {
    now: Tick,
    delay: u64,
    queue: VecDeque<(Tick, DeferredTask)>,
}

impl NextTickScheduler {
    pub fn new() -> Self {
        Self::with_delay(1)
    }

    /// A delay below one tick is raised to one.
    pub fn with_delay(delay: u64) -> Self {
        Self {
            now: Tick::default(),
            delay: delay.max(1),
            queue: VecDeque::new(),
        }
    }

    pub fn now(&self) -> Tick {
        self.now
    }

    /// Move to the next tick.
    pub fn advance(&mut self) -> Tick {
        self.now = self.now.next();
        self.now
    }

    /// Remove and return every task due at or before the current tick.
    pub fn drain_due(&mut self) -> Vec<DeferredTask> {
        let mut due = Vec::new();
        let mut kept = VecDeque::with_capacity(self.queue.len());
        for (at, task) in self.queue.drain(..) {
            if at <= self.now {
                due.push(task);
            } else {
                kept.push_back((at, task));
            }
        }
        self.queue = kept;
        due
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Default for NextTickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler for NextTickScheduler {
    fn defer(&mut self, task: DeferredTask) {
        let at = Tick(self.now.0.saturating_add(self.delay));
        debug!(?task, %at, "[orr-02] Deferred task");
        self.queue.push_back((at, task));
    }
}
