//! Port traits: the boundary between engine logic and the host.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ InteractionController (domain)
//! ```
//!
//! Host adapters (renderers, loggers, config files, clocks) implement
//! these traits.  The controller only ever sees the traits, so the
//! whole engine runs under test with in-memory fakes.

use crate::config::EngineConfig;

use super::events::{EngineEvent, Snapshot};

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → renderer / log)
// ───────────────────────────────────────────────────────────────

/// Receives every [`EngineEvent`] together with a snapshot taken right
/// after the change.  Registered through
/// [`InteractionController::subscribe`](super::service::InteractionController::subscribe).
pub trait EventSink {
    fn emit(&mut self, event: &EngineEvent, snapshot: &Snapshot);
}

impl<F> EventSink for F
where
    F: FnMut(&EngineEvent, &Snapshot),
{
    fn emit(&mut self, event: &EngineEvent, snapshot: &Snapshot) {
        self(event, snapshot);
    }
}

// ───────────────────────────────────────────────────────────────
// Configuration port (host → domain)
// ───────────────────────────────────────────────────────────────

/// Loads engine configuration.
///
/// Implementations MUST run [`EngineConfig::validate`] before returning
/// and map a failure to [`ConfigError::ValidationFailed`].
pub trait ConfigPort {
    /// Returns [`ConfigError::NotFound`] when no stored config exists.
    fn load(&self) -> Result<EngineConfig, ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (host → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock driving the host loop.
pub trait ClockPort {
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found at the configured location.
    NotFound,
    /// Stored config could not be deserialized.
    Corrupted,
    /// A config field failed range validation.
    ValidationFailed(&'static str),
    /// Generic I/O error reading the backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for ConfigError {}
