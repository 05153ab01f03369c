//! Single-slot deferred task.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

/// Identifier of a scheduled task, unique per slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending<T> {
    id: TaskId,
    due: Duration,
    task: T,
}

/// A slot holding at most one task due at a point on a caller-driven clock.
///
/// Scheduling replaces whatever was pending, so a stale task can never fire
/// after a newer one was scheduled or after the slot was cancelled.
///
/// ```
/// use std::time::Duration;
/// use tarik_tambang::schedule::DeferredSlot;
///
/// let mut slot = DeferredSlot::new();
/// slot.schedule("old", Duration::ZERO, Duration::from_millis(800));
/// slot.schedule("new", Duration::ZERO, Duration::from_millis(800));
///
/// assert_eq!(slot.poll(Duration::from_millis(799)), None);
/// assert_eq!(slot.poll(Duration::from_millis(800)), Some("new"));
/// assert_eq!(slot.poll(Duration::from_millis(2000)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeferredSlot<T> {
    pending: Option<Pending<T>>,
    next_id: u64,
}

impl<T> Default for DeferredSlot<T> {
    fn default() -> Self {
        Self {
            pending: None,
            next_id: 0,
        }
    }
}

impl<T> DeferredSlot<T> {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to be due `delay` after `now`, cancelling any
    /// previously pending task.
    pub fn schedule(&mut self, task: T, now: Duration, delay: Duration) -> TaskId {
        if let Some(old) = self.pending.take() {
            debug!("replaced pending task {:?}", old.id);
        }
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending = Some(Pending {
            id,
            due: now.saturating_add(delay),
            task,
        });
        id
    }

    /// Drop the pending task, returning it if there was one.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| {
            debug!("cancelled pending task {:?}", p.id);
            p.task
        })
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the pending task.
    #[must_use]
    pub fn pending_id(&self) -> Option<TaskId> {
        self.pending.as_ref().map(|p| p.id)
    }

    /// When the pending task becomes due.
    #[must_use]
    pub fn due_at(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Take the pending task if it is due at `now`.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| p.due <= now) {
            self.pending.take().map(|p| p.task)
        } else {
            None
        }
    }
}
