//! Interaction controller, the hexagonal core.
//!
//! [`InteractionController`] owns the scheduler, rotation timer,
//! notification registry, gauges and panel selection.  It exposes the
//! action API, a command dispatcher, subscriptions, and a read-only
//! [`Snapshot`].  Nothing outside holds a mutable reference to engine
//! state.
//!
//! ```text
//!  EngineCommand ──▶ ┌──────────────────────────────┐ ──▶ EventSink(s)
//!                    │     InteractionController    │
//!  advance(ms)   ──▶ │ Rotation · Notify · Metrics  │ ──▶ Snapshot
//!                    │ Selection · Scheduler        │
//!                    └──────────────────────────────┘
//! ```
//!
//! Every action validates before it mutates anything; a rejected action
//! leaves state and notifications untouched and emits nothing.

use log::{info, warn};

use crate::config::EngineConfig;
use crate::content::StaticContent;
use crate::error::{Error, Result};
use crate::metrics::{HAPPINESS, LIKE_COUNT, MetricStore};
use crate::notifications::{NotificationCenter, NotificationId};
use crate::rotation::RotationTimer;
use crate::scheduler::{Fired, Scheduler};
use crate::selection::{Panel, SelectionState};

use super::commands::{AdoptionForm, EngineCommand};
use super::events::{EngineEvent, Snapshot};
use super::ports::EventSink;

/// Happiness gained per like.
const LIKE_HAPPINESS: i64 = 10;
/// Happiness gained per pet.
const PET_HAPPINESS: i64 = 5;
/// Happiness gained from a rating of [`GOOD_RATING`] or better.
const GOOD_RATING_HAPPINESS: i64 = 15;
const GOOD_RATING: u8 = 4;
const MAX_STARS: u8 = 5;
const MAX_VOLUME: i32 = 100;

/// Payload of every task the engine puts on its scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineTask {
    RotateFact,
    ExpireNotification(NotificationId),
}

/// Handle returned by [`InteractionController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

// ───────────────────────────────────────────────────────────────
// InteractionController
// ───────────────────────────────────────────────────────────────

/// The interaction controller composes all engine state.
pub struct InteractionController {
    content: StaticContent,
    scheduler: Scheduler<EngineTask>,
    rotation: RotationTimer,
    notifications: NotificationCenter,
    metrics: MetricStore,
    selection: SelectionState,
    volume: u8,
    notification_duration_ms: u64,
    subscribers: Vec<(SubscriptionId, Box<dyn EventSink>)>,
    next_subscription: u64,
}

impl InteractionController {
    /// Build the engine from configuration.
    ///
    /// Does **not** start rotation; call [`start`](Self::start) next.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let content = config.content.unwrap_or_default();
        let rotation = RotationTimer::new(content.facts.len(), config.rotation_period_ms)?;

        let mut metrics = MetricStore::new();
        metrics.define(
            HAPPINESS,
            config.initial_happiness,
            config.happiness_min,
            config.happiness_max,
        )?;
        metrics.define(LIKE_COUNT, 0, 0, i64::MAX)?;

        Ok(Self {
            content,
            scheduler: Scheduler::new(),
            rotation,
            notifications: NotificationCenter::new(),
            metrics,
            selection: SelectionState::new(config.default_panel),
            volume: config.initial_volume,
            notification_duration_ms: config.notification_duration_ms,
            subscribers: Vec::new(),
            next_subscription: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Arm the caption rotation.
    pub fn start(&mut self) -> Result<()> {
        self.rotation.start(&mut self.scheduler, EngineTask::RotateFact)?;
        info!("Engine started on panel '{}'", self.selection.current());
        self.emit(EngineEvent::Started);
        Ok(())
    }

    /// Stop the rotation; the current fact stays on screen.
    pub fn pause_rotation(&mut self) -> bool {
        let stopped = self.rotation.stop(&mut self.scheduler);
        if stopped {
            self.emit(EngineEvent::RotationPaused);
        }
        stopped
    }

    /// Restart the rotation from the current fact.
    pub fn resume_rotation(&mut self) -> Result<()> {
        if self.rotation.is_running() {
            return Ok(());
        }
        self.rotation.start(&mut self.scheduler, EngineTask::RotateFact)?;
        self.emit(EngineEvent::RotationResumed);
        Ok(())
    }

    /// Cancel the rotation and every pending expiry, drop live
    /// notifications, and release all subscribers after a final
    /// [`EngineEvent::Stopped`].
    ///
    /// Consumes the engine; the returned snapshot is its final state.
    pub fn shutdown(mut self) -> Snapshot {
        self.rotation.stop(&mut self.scheduler);
        let dropped = self.notifications.clear(&mut self.scheduler);
        let leftover = self.scheduler.cancel_all();
        if leftover > 0 {
            warn!("Engine shutdown cancelled {} stray task(s)", leftover);
        }
        info!("Engine stopped ({} notification(s) dropped)", dropped);
        self.emit(EngineEvent::Stopped);
        self.snapshot()
    }

    // ── Host loop ─────────────────────────────────────────────

    /// Let `elapsed_ms` of time pass, dispatching every scheduled task
    /// that falls due, in order.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let until = self.scheduler.now_ms().saturating_add(elapsed_ms);
        while let Some(fired) = self.scheduler.pop_due(until) {
            self.dispatch(fired);
        }
        self.scheduler.advance_clock(until);
    }

    fn dispatch(&mut self, fired: Fired<EngineTask>) {
        match fired.task {
            EngineTask::RotateFact => {
                let index = self.rotation.tick();
                self.emit(EngineEvent::RotationAdvanced { index });
            }
            EngineTask::ExpireNotification(id) => {
                if self.notifications.expire(id) {
                    self.emit(EngineEvent::NotificationExpired(id));
                }
            }
        }
    }

    // ── Actions ───────────────────────────────────────────────

    /// "Love Cats!": one more like and a happiness boost.
    pub fn like_cat(&mut self) -> Result<NotificationId> {
        self.metrics.get(HAPPINESS)?;
        let like_count = self.metrics.adjust(LIKE_COUNT, 1)? as u64;
        let happiness = self.metrics.adjust(HAPPINESS, LIKE_HAPPINESS)?;
        let id = self.notify("Purr-fect!", "You showed the cat some love.");
        self.emit(EngineEvent::Liked {
            like_count,
            happiness,
        });
        Ok(id)
    }

    pub fn pet_cat(&mut self) -> Result<NotificationId> {
        let happiness = self.metrics.adjust(HAPPINESS, PET_HAPPINESS)?;
        let id = self.notify("Purrr...", "The cat enjoyed the pets.");
        self.emit(EngineEvent::Petted { happiness });
        Ok(id)
    }

    /// Rate the cat 1-5 stars.  Four or more stars also raise happiness.
    pub fn rate(&mut self, stars: i64) -> Result<NotificationId> {
        let stars = u8::try_from(stars)
            .ok()
            .filter(|s| (1..=MAX_STARS).contains(s))
            .ok_or(Error::InvalidInput(stars))?;
        let happiness = if stars >= GOOD_RATING {
            self.metrics.adjust(HAPPINESS, GOOD_RATING_HAPPINESS)?
        } else {
            self.metrics.get(HAPPINESS)?
        };
        let id = self.notify(
            "Thanks for rating!",
            format!("You gave the cat {stars} out of 5 stars."),
        );
        self.emit(EngineEvent::Rated { stars, happiness });
        Ok(id)
    }

    /// Clamp into 0-100 and store.  Returns the stored volume.
    pub fn set_volume(&mut self, volume: i32) -> u8 {
        self.volume = volume.clamp(0, MAX_VOLUME) as u8;
        self.emit(EngineEvent::VolumeChanged(self.volume));
        self.volume
    }

    /// Returns whether the active panel changed.
    pub fn select_panel(&mut self, panel: Panel) -> bool {
        let changed = self.selection.select(panel);
        self.emit(EngineEvent::PanelSelected { panel, changed });
        changed
    }

    /// Select by panel id; unknown ids fail with `InvalidPanel`.
    pub fn select_panel_id(&mut self, id: &str) -> Result<bool> {
        let changed = self.selection.select_id(id)?;
        self.emit(EngineEvent::PanelSelected {
            panel: self.selection.current(),
            changed,
        });
        Ok(changed)
    }

    pub fn submit_adoption_form(&mut self, form: &AdoptionForm) -> Result<NotificationId> {
        form.validate()?;
        let id = self.notify(
            "Application received",
            format!(
                "Thanks, {}! We'll reach out at {} soon.",
                form.name.trim(),
                form.email.trim()
            ),
        );
        info!("Adoption form submitted by '{}'", form.name.trim());
        self.emit(EngineEvent::AdoptionSubmitted(id));
        Ok(id)
    }

    /// Close a notification early.  Unknown or already removed ids are a
    /// no-op returning `false`.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let removed = self.notifications.dismiss(id, &mut self.scheduler);
        if removed {
            self.emit(EngineEvent::NotificationDismissed(id));
        }
        removed
    }

    // ── Command handling ──────────────────────────────────────

    /// Process a command from the presentation layer.
    pub fn handle_command(&mut self, cmd: EngineCommand) -> Result<()> {
        match cmd {
            EngineCommand::LikeCat => {
                self.like_cat()?;
            }
            EngineCommand::PetCat => {
                self.pet_cat()?;
            }
            EngineCommand::Rate(stars) => {
                self.rate(stars)?;
            }
            EngineCommand::SetVolume(volume) => {
                self.set_volume(volume);
            }
            EngineCommand::SelectPanel(id) => {
                self.select_panel_id(&id)?;
            }
            EngineCommand::SubmitAdoptionForm(form) => {
                self.submit_adoption_form(&form)?;
            }
            EngineCommand::Dismiss(id) => {
                self.dismiss(id);
            }
        }
        Ok(())
    }

    // ── Subscriptions ─────────────────────────────────────────

    /// Register a sink invoked after every state change.
    pub fn subscribe(&mut self, sink: impl EventSink + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(sink)));
        id
    }

    /// Remove a sink.  It receives no further events.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    // ── Queries ───────────────────────────────────────────────

    /// Copy of all engine state at the current virtual time.
    pub fn snapshot(&self) -> Snapshot {
        let now_ms = self.scheduler.now_ms();
        let index = self.rotation.current_index();
        Snapshot {
            now_ms,
            current_fact_index: index,
            current_fact: self.content.fact(index).unwrap_or_default().to_owned(),
            like_count: self.gauge(LIKE_COUNT) as u64,
            happiness: self.gauge(HAPPINESS),
            volume: self.volume,
            active_panel: self.selection.current(),
            notifications: self.notifications.list(now_ms),
        }
    }

    pub fn content(&self) -> &StaticContent {
        &self.content
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_running()
    }

    /// Tasks still queued (rotation tick plus one per live notification).
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    // ── Internal ──────────────────────────────────────────────

    fn notify(&mut self, title: &str, body: impl Into<String>) -> NotificationId {
        self.notifications.enqueue(
            title,
            body,
            self.notification_duration_ms,
            &mut self.scheduler,
            EngineTask::ExpireNotification,
        )
    }

    /// Gauges are all defined in `new`, so a miss is a defect.  Panics in
    /// debug builds; reads as 0 in release.
    fn gauge(&self, name: &str) -> i64 {
        match self.metrics.get(name) {
            Ok(value) => value,
            Err(e) => {
                debug_assert!(false, "gauge '{name}': {e}");
                0
            }
        }
    }

    fn emit(&mut self, event: EngineEvent) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, sink) in &mut self.subscribers {
            sink.emit(&event, &snapshot);
        }
    }
}
