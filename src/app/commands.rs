//! Inbound commands to the interaction controller.
//!
//! These represent actions requested by the presentation layer (button
//! clicks, slider moves, form submits) that the
//! [`InteractionController`](super::service::InteractionController)
//! interprets and acts upon.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::notifications::NotificationId;

/// Commands that the presentation layer can send into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// "Love Cats!" button.
    LikeCat,

    /// Pet the cat picture.
    PetCat,

    /// Star rating, valid range 1-5.  Anything else is parsed and
    /// rejected by the controller.
    Rate(i64),

    /// Volume slider.  Out-of-range values are clamped.
    SetVolume(i32),

    /// Switch tabs by panel id (`facts`, `breeds`, `care`).
    SelectPanel(String),

    /// Adoption form submit.
    SubmitAdoptionForm(AdoptionForm),

    /// Close a notification before it expires.
    Dismiss(NotificationId),
}

/// Fields of the adoption form.  All are required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdoptionForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl AdoptionForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Fails on the first blank field, in form order.  Whitespace-only
    /// counts as blank.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(Error::ValidationFailed(field));
            }
        }
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// Text form, used by the host binary
// ───────────────────────────────────────────────────────────────

/// A command string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCommandError(String);

impl fmt::Display for ParseCommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised command: {}", self.0)
    }
}

impl std::error::Error for ParseCommandError {}

impl FromStr for EngineCommand {
    type Err = ParseCommandError;

    /// `like`, `pet`, `rate:N`, `volume:N`, `panel:ID`,
    /// `adopt:NAME|EMAIL|MESSAGE`, `dismiss:ID`.
    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        let err = || ParseCommandError(s.to_owned());
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };

        match (verb.trim().to_ascii_lowercase().as_str(), arg) {
            ("like", None) => Ok(Self::LikeCat),
            ("pet", None) => Ok(Self::PetCat),
            ("rate", Some(n)) => n.trim().parse::<i64>().map(Self::Rate).map_err(|_| err()),
            ("volume", Some(n)) => n.trim().parse::<i32>().map(Self::SetVolume).map_err(|_| err()),
            ("panel", Some(id)) => Ok(Self::SelectPanel(id.trim().to_owned())),
            ("adopt", Some(fields)) => {
                let mut parts = fields.splitn(3, '|');
                let name = parts.next().unwrap_or_default();
                let email = parts.next().unwrap_or_default();
                let message = parts.next().unwrap_or_default();
                Ok(Self::SubmitAdoptionForm(AdoptionForm::new(name, email, message)))
            }
            ("dismiss", Some(n)) => n
                .trim()
                .parse::<u64>()
                .map(|raw| Self::Dismiss(NotificationId::new(raw)))
                .map_err(|_| err()),
            _ => Err(err()),
        }
    }
}
