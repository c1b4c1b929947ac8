//! Domain identifier types with proper encapsulation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ledger-assigned wager identifier.
///
/// The inner u64 is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WagerId(u64);

impl WagerId {
    /// Create a new `WagerId` from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for WagerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for WagerId {
    type Err = std::num::ParseIntError;

    /// Accepts both `7` and `#7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// Roster member identifier, used for both bettors and contestants.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Create a new `ParticipantId`, trimming surrounding whitespace.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.len() == id.len() {
            Self(id)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the identifier is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ParticipantId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ParticipantId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wager_id_parses_with_or_without_hash() {
        assert_eq!("7".parse::<WagerId>().unwrap(), WagerId::new(7));
        assert_eq!("#12".parse::<WagerId>().unwrap(), WagerId::new(12));
        assert!("seven".parse::<WagerId>().is_err());
    }

    #[test]
    fn wager_id_display() {
        assert_eq!(WagerId::new(3).to_string(), "#3");
    }

    #[test]
    fn participant_id_trims_whitespace() {
        let id = ParticipantId::new("  Chris Brown ");
        assert_eq!(id.as_str(), "Chris Brown");
        assert_eq!(id, ParticipantId::from("Chris Brown"));
    }

    #[test]
    fn participant_id_serializes_as_plain_string() {
        let id = ParticipantId::new("Joe Canavan");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"Joe Canavan\"");
    }
}
