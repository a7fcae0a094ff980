//! Virtual-time task scheduler.
//!
//! Stands in for the host event loop's timers.  Tasks are plain data
//! (the engine decides what a fired task means), so the scheduler knows
//! nothing about rotation or notifications and is driven entirely by
//! advancing virtual time.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Task Sources                             │
//! │                                                              │
//! │  ┌──────────────┐   ┌──────────────────┐                     │
//! │  │ Rotation     │   │ Notification     │                     │
//! │  │ (repeating)  │   │ expiry (one-shot)│                     │
//! │  └──────┬───────┘   └────────┬─────────┘                     │
//! │         │                    │                               │
//! │         ▼                    ▼                               │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │     Queue ordered by (due_ms, scheduling sequence)     │  │
//! │  └───────────────────────┬────────────────────────────────┘  │
//! │                          │ pop_due(until)                    │
//! │                          ▼                                   │
//! │              InteractionController::advance()                │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks due at the same instant fire in the order they were scheduled.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::error::{Error, Result};

// ═══════════════════════════════════════════════════════════════
//  Task types
// ═══════════════════════════════════════════════════════════════

/// Handle to a scheduled task.  Stable across re-arms of a repeating task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A task popped from the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub id: TaskId,
    pub task: T,
    /// Virtual time the task was due at.
    pub due_ms: u64,
}

/// Internal bookkeeping for a queued task.
#[derive(Debug, Clone)]
struct Pending<T> {
    id: TaskId,
    task: T,
    /// `Some` for repeating tasks.
    period_ms: Option<u64>,
}

// ═══════════════════════════════════════════════════════════════
//  Scheduler engine
// ═══════════════════════════════════════════════════════════════

/// Cooperative single-threaded scheduler over virtual milliseconds.
#[derive(Debug)]
pub struct Scheduler<T> {
    /// Keyed by `(due_ms, sequence)` so iteration order is dispatch order.
    queue: BTreeMap<(u64, u64), Pending<T>>,
    now_ms: u64,
    next_seq: u64,
    next_id: u64,
}

impl<T: Clone> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            queue: BTreeMap::new(),
            now_ms: 0,
            next_seq: 0,
            next_id: 0,
        }
    }

    /// Current virtual time.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Run `task` once, `delay_ms` after the current virtual time.
    pub fn schedule_once(&mut self, delay_ms: u64, task: T) -> TaskId {
        let id = self.alloc_id();
        let due = self.now_ms.saturating_add(delay_ms);
        self.insert(due, Pending { id, task, period_ms: None });
        id
    }

    /// Run `task` every `period_ms`, first firing one period from now.
    pub fn schedule_repeating(&mut self, period_ms: u64, task: T) -> Result<TaskId> {
        if period_ms == 0 {
            return Err(Error::InvalidConfiguration("repeating task period must be > 0"));
        }
        let id = self.alloc_id();
        let due = self.now_ms.saturating_add(period_ms);
        self.insert(
            due,
            Pending {
                id,
                task,
                period_ms: Some(period_ms),
            },
        );
        Ok(id)
    }

    /// Remove a pending task.  Returns `false` if it was not queued
    /// (already fired one-shot, already cancelled, or never existed).
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let key = self
            .queue
            .iter()
            .find(|(_, pending)| pending.id == id)
            .map(|(key, _)| *key);
        match key {
            Some(key) => {
                self.queue.remove(&key);
                debug!("Scheduler: cancelled task {:?}", id);
                true
            }
            None => false,
        }
    }

    /// Drop every pending task.  Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let n = self.queue.len();
        self.queue.clear();
        n
    }

    /// Pop the earliest task due at or before `until_ms`.
    ///
    /// Moves the virtual clock to the task's due time.  Repeating tasks are
    /// re-armed one period later before being returned, so a callback may
    /// cancel its own task by id.  A repeating task whose next due time
    /// would pass `u64::MAX` is retired instead.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired<T>> {
        let (&(due, _), _) = self.queue.first_key_value()?;
        if due > until_ms {
            return None;
        }
        let ((due, _), pending) = self.queue.pop_first()?;
        self.now_ms = self.now_ms.max(due);

        if let Some(period) = pending.period_ms {
            match due.checked_add(period) {
                Some(next) => self.insert(
                    next,
                    Pending {
                        id: pending.id,
                        task: pending.task.clone(),
                        period_ms: Some(period),
                    },
                ),
                None => warn!("Scheduler: task {:?} retired at end of time", pending.id),
            }
        }

        Some(Fired {
            id: pending.id,
            task: pending.task,
            due_ms: due,
        })
    }

    /// Move the virtual clock forward without dispatching.  Call after
    /// draining [`pop_due`](Self::pop_due) up to the same instant.
    pub fn advance_clock(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }

    /// Number of queued tasks.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest queued task.
    pub fn next_due(&self) -> Option<u64> {
        self.queue.first_key_value().map(|(&(due, _), _)| due)
    }

    // ── Internal ──────────────────────────────────────────────

    fn alloc_id(&mut self) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, due: u64, pending: Pending<T>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((due, seq), pending);
    }
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
