//! Roster configuration.

use serde::{Deserialize, Serialize};

use crate::domain::Roster;

/// Who may bet and who may be backed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Names allowed to place wagers.
    #[serde(default)]
    pub bettors: Vec<String>,
    /// Names that can be backed. Defaults to `bettors`.
    #[serde(default)]
    pub contestants: Option<Vec<String>>,
}

impl RosterConfig {
    /// Effective contestant list.
    #[must_use]
    pub fn contestants(&self) -> &[String] {
        self.contestants.as_deref().unwrap_or(&self.bettors)
    }

    /// Build the domain roster.
    #[must_use]
    pub fn to_roster(&self) -> Roster {
        Roster::new(
            self.bettors.iter().map(String::as_str),
            self.contestants().iter().map(String::as_str),
        )
    }
}
