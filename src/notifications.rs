//! Ephemeral notification registry.
//!
//! Each notification gets its own one-shot expiry task on the
//! [`Scheduler`].  Removal goes through a single path regardless of
//! whether it was triggered by expiry or by the user, so a dismissal
//! racing an expiry removes the entry exactly once.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::scheduler::{Scheduler, TaskId};

/// Opaque notification handle, unique for the lifetime of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A live notification, as handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub body: String,
    pub duration_ms: u64,
    /// Virtual time of creation.
    pub created_at_ms: u64,
}

impl Notification {
    /// First instant at which the notification is no longer live.
    pub fn expires_at_ms(&self) -> u64 {
        self.created_at_ms.saturating_add(self.duration_ms)
    }

    /// Live during `[created_at, created_at + duration)`.
    pub fn is_live_at(&self, now_ms: u64) -> bool {
        now_ms >= self.created_at_ms && now_ms < self.expires_at_ms()
    }
}

#[derive(Debug)]
struct Entry {
    notification: Notification,
    expiry: TaskId,
}

/// Registry of notifications in creation order.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    entries: Vec<Entry>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notification and schedule its expiry.
    ///
    /// `expiry_task` builds the scheduler payload for the new id; the
    /// owner routes that task back into [`expire`](Self::expire).
    pub fn enqueue<T: Clone>(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        duration_ms: u64,
        sched: &mut Scheduler<T>,
        expiry_task: impl FnOnce(NotificationId) -> T,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let expiry = sched.schedule_once(duration_ms, expiry_task(id));
        let notification = Notification {
            id,
            title: title.into(),
            body: body.into(),
            duration_ms,
            created_at_ms: sched.now_ms(),
        };
        info!(
            "Notify: #{} '{}' ({}ms)",
            id.0, notification.title, duration_ms
        );
        self.entries.push(Entry {
            notification,
            expiry,
        });
        id
    }

    /// Remove a notification and cancel its expiry.  Unknown or already
    /// removed ids are a no-op returning `false`.
    pub fn dismiss<T: Clone>(&mut self, id: NotificationId, sched: &mut Scheduler<T>) -> bool {
        match self.remove(id) {
            Some(entry) => {
                sched.cancel(entry.expiry);
                debug!("Notify: #{} dismissed", id.0);
                true
            }
            None => false,
        }
    }

    /// Remove a notification whose expiry task fired.  Returns `false`
    /// if it had already been dismissed.
    pub fn expire(&mut self, id: NotificationId) -> bool {
        let removed = self.remove(id).is_some();
        if removed {
            debug!("Notify: #{} expired", id.0);
        }
        removed
    }

    /// Drop every notification and cancel every pending expiry.
    pub fn clear<T: Clone>(&mut self, sched: &mut Scheduler<T>) -> usize {
        let n = self.entries.len();
        for entry in self.entries.drain(..) {
            sched.cancel(entry.expiry);
        }
        n
    }

    /// Live notifications at `now_ms`, in creation order.
    pub fn list(&self, now_ms: u64) -> Vec<Notification> {
        self.entries
            .iter()
            .map(|e| &e.notification)
            .filter(|n| n.is_live_at(now_ms))
            .cloned()
            .collect()
    }

    /// Number of registered notifications, including any zero-length
    /// ones whose expiry has not been dispatched yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── Internal ──────────────────────────────────────────────

    fn remove(&mut self, id: NotificationId) -> Option<Entry> {
        let pos = self.entries.iter().position(|e| e.notification.id == id)?;
        Some(self.entries.remove(pos))
    }
}
