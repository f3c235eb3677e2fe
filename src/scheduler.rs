//! Deterministic single-threaded timer queue.
//!
//! The widget never sleeps. Deferred work (zero-delay notifications,
//! reveal/conceal timers) is queued here against a virtual clock and only
//! runs when the owner advances time. A task scheduled with a zero delay
//! therefore always runs on a later `advance`, never inside the call that
//! scheduled it.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Handle returned by [`Scheduler::schedule`], used to cancel a pending task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Queue of tasks ordered by due time, then by insertion order.
#[derive(Debug)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    queue: BTreeMap<(Duration, TimerId), T>,
    due_at: HashMap<TimerId, Duration>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            queue: BTreeMap::new(),
            due_at: HashMap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to run once `delay` has elapsed.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now + delay;
        self.queue.insert((due, id), task);
        self.due_at.insert(id, due);
        id
    }

    /// Drop a pending task. Returns `false` if it already ran or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.due_at.remove(&id) {
            Some(due) => self.queue.remove(&(due, id)).is_some(),
            None => false,
        }
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.due_at.contains_key(&id)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Remove and return the earliest task due at or before `until`.
    ///
    /// The clock moves forward to the task's due time so tasks scheduled
    /// while handling it are timed relative to that moment.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, T)> {
        let (&(due, id), _) = self.queue.iter().next()?;
        if due > until {
            return None;
        }
        let task = self.queue.remove(&(due, id))?;
        self.due_at.remove(&id);
        if due > self.now {
            self.now = due;
        }
        Some((id, task))
    }

    /// Move the clock to `until` once every due task has been popped.
    pub fn settle_at(&mut self, until: Duration) {
        if until > self.now {
            self.now = until;
        }
    }
}
