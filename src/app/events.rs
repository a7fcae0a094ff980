//! Outbound engine events and the render snapshot.
//!
//! The [`InteractionController`](super::service::InteractionController)
//! emits these through the [`EventSink`](super::ports::EventSink) port
//! after every state change.  Subscribers on the other side decide what
//! to do with them (re-render, log).

use serde::Serialize;

use crate::notifications::{Notification, NotificationId};
use crate::selection::Panel;

/// Structured events emitted by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Rotation armed; the engine is live.
    Started,

    /// The caption advanced to a new fact.
    RotationAdvanced { index: usize },

    RotationPaused,
    RotationResumed,

    Liked { like_count: u64, happiness: i64 },
    Petted { happiness: i64 },
    Rated { stars: u8, happiness: i64 },

    VolumeChanged(u8),

    /// `changed` is false when the panel was already active.
    PanelSelected { panel: Panel, changed: bool },

    /// Carries the confirmation notification's id.
    AdoptionSubmitted(NotificationId),

    NotificationExpired(NotificationId),
    NotificationDismissed(NotificationId),

    /// Teardown finished; no further events follow.
    Stopped,
}

/// A point-in-time copy of all engine state, suitable for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Virtual engine clock.
    pub now_ms: u64,
    pub current_fact_index: usize,
    pub current_fact: String,
    pub like_count: u64,
    pub happiness: i64,
    pub volume: u8,
    pub active_panel: Panel,
    /// Live notifications in creation order.
    pub notifications: Vec<Notification>,
}
