//! Unified error types for the interaction engine.
//!
//! A single `Error` enum that every subsystem returns, keeping the
//! controller's error handling uniform.  All variants are `Copy` so they
//! can be passed back through the action API without allocation.
//!
//! Only [`Error::InvalidConfiguration`] and [`Error::UnknownGauge`] point
//! at a programming defect; every other variant is a rejected user action
//! that left engine state untouched.

use core::fmt;

/// Every fallible operation in the engine funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Construction-time contract violation; the engine cannot start.
    InvalidConfiguration(&'static str),
    /// A rating outside `1..=5`.
    InvalidInput(i64),
    /// A panel id outside the fixed enumeration.
    InvalidPanel,
    /// A gauge was queried or adjusted before being defined.
    UnknownGauge,
    /// A gauge name was defined twice.
    DuplicateGauge,
    /// A required adoption form field was empty.  Carries the field name.
    ValidationFailed(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            Self::InvalidInput(stars) => write!(f, "invalid rating {stars}, expected 1-5"),
            Self::InvalidPanel => write!(f, "unknown panel"),
            Self::UnknownGauge => write!(f, "unknown gauge"),
            Self::DuplicateGauge => write!(f, "gauge already defined"),
            Self::ValidationFailed(field) => write!(f, "validation failed: {field} is required"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// True for errors that indicate a defect rather than a rejected action.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_) | Self::UnknownGauge)
    }
}

/// Engine-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
