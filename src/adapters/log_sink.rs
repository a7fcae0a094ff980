//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing every engine event to the `log`
//! facade.  A renderer would implement the same trait.

use log::{debug, info};

use crate::app::events::{EngineEvent, Snapshot};
use crate::app::ports::EventSink;

/// Adapter that logs every [`EngineEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &EngineEvent, snap: &Snapshot) {
        match event {
            EngineEvent::RotationAdvanced { index } => {
                debug!("FACT  | #{} {}", index, snap.current_fact);
            }
            EngineEvent::Liked {
                like_count,
                happiness,
            } => {
                info!("LIKE  | likes={} happiness={}", like_count, happiness);
            }
            EngineEvent::Petted { happiness } => {
                info!("PET   | happiness={}", happiness);
            }
            EngineEvent::Rated { stars, happiness } => {
                info!("RATE  | stars={} happiness={}", stars, happiness);
            }
            EngineEvent::VolumeChanged(volume) => {
                info!("VOL   | {}%", volume);
            }
            EngineEvent::PanelSelected { panel, changed } => {
                info!("PANEL | {} (changed={})", panel, changed);
            }
            EngineEvent::AdoptionSubmitted(id) => {
                info!("ADOPT | confirmation #{}", id.get());
            }
            EngineEvent::NotificationExpired(id) | EngineEvent::NotificationDismissed(id) => {
                debug!(
                    "TOAST | #{} closed, {} live",
                    id.get(),
                    snap.notifications.len()
                );
            }
            EngineEvent::Started
            | EngineEvent::RotationPaused
            | EngineEvent::RotationResumed
            | EngineEvent::Stopped => {
                info!("STATE | {:?} at {}ms", event, snap.now_ms);
            }
        }
    }
}
