//! Active content panel.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The mutually exclusive content sections of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Facts,
    Breeds,
    Care,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Facts, Panel::Breeds, Panel::Care];

    /// Stable id used by renderers and the command parser.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Facts => "facts",
            Self::Breeds => "breeds",
            Self::Care => "care",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Panel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.id().eq_ignore_ascii_case(s.trim()))
            .ok_or(Error::InvalidPanel)
    }
}

/// Holds exactly one active panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionState {
    active: Panel,
}

impl SelectionState {
    pub fn new(initial: Panel) -> Self {
        Self { active: initial }
    }

    /// Set the active panel.  Returns whether it changed.
    pub fn select(&mut self, panel: Panel) -> bool {
        let changed = self.active != panel;
        self.active = panel;
        changed
    }

    /// Parse a panel id and select it.  Unknown ids leave state unchanged.
    pub fn select_id(&mut self, id: &str) -> Result<bool> {
        let panel = id.parse::<Panel>()?;
        Ok(self.select(panel))
    }

    pub fn current(&self) -> Panel {
        self.active
    }
}
