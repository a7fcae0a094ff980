//! Engine configuration parameters
//!
//! All tunable parameters for the interaction engine.
//! Values can be overridden from a JSON file via a [`ConfigPort`](crate::app::ports::ConfigPort).

use serde::{Deserialize, Serialize};

use crate::content::StaticContent;
use crate::error::{Error, Result};
use crate::selection::Panel;

/// Core engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // --- Rotation ---
    /// Caption rotation period (milliseconds)
    pub rotation_period_ms: u64,

    // --- Notifications ---
    /// Lifetime of every action notification (milliseconds)
    pub notification_duration_ms: u64,

    // --- Gauges ---
    /// Happiness at startup
    pub initial_happiness: i64,
    /// Lower happiness bound
    pub happiness_min: i64,
    /// Upper happiness bound
    pub happiness_max: i64,

    // --- Settings ---
    /// Volume at startup (0-100%)
    pub initial_volume: u8,
    /// Panel shown at startup
    pub default_panel: Panel,

    // --- Host loop ---
    /// Host event loop tick (milliseconds)
    pub host_tick_ms: u64,

    /// Replaces the built-in page content when present
    pub content: Option<StaticContent>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Rotation
            rotation_period_ms: 5000,

            // Notifications
            notification_duration_ms: 3000,

            // Gauges
            initial_happiness: 50,
            happiness_min: 0,
            happiness_max: 100,

            // Settings
            initial_volume: 50,
            default_panel: Panel::Facts,

            // Host loop
            host_tick_ms: 100, // 10 Hz
            content: None,
        }
    }
}

impl EngineConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<()> {
        if self.rotation_period_ms == 0 {
            return Err(Error::InvalidConfiguration("rotation_period_ms must be > 0"));
        }
        if self.notification_duration_ms == 0 {
            return Err(Error::InvalidConfiguration("notification_duration_ms must be > 0"));
        }
        if self.happiness_min > self.happiness_max {
            return Err(Error::InvalidConfiguration("happiness_min exceeds happiness_max"));
        }
        if !(self.happiness_min..=self.happiness_max).contains(&self.initial_happiness) {
            return Err(Error::InvalidConfiguration("initial_happiness out of bounds"));
        }
        if self.initial_volume > 100 {
            return Err(Error::InvalidConfiguration("initial_volume must be 0-100"));
        }
        if self.host_tick_ms == 0 {
            return Err(Error::InvalidConfiguration("host_tick_ms must be > 0"));
        }
        if self.content.as_ref().is_some_and(|c| c.facts.is_empty()) {
            return Err(Error::InvalidConfiguration("content.facts must not be empty"));
        }
        Ok(())
    }
}
