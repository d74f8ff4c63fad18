//! Station identity types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Identifier of a station as issued by the station registry.
///
/// The core never allocates identifiers; it only compares and hashes them.
///
/// # Examples
///
/// ```
/// use subway_path::domain::StationId;
///
/// let id = StationId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(u64);

impl StationId {
    /// Wrap a raw registry identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StationId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// A station in the network.
///
/// Stations are immutable once created. Two sections on different lines
/// that mention the same `StationId` refer to the same interchange station.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    /// Create a station.
    ///
    /// The name is trimmed and must not be empty.
    pub fn new(id: StationId, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::BlankStationName(id));
        }

        Ok(Self {
            id,
            name: if trimmed.len() == name.len() {
                name
            } else {
                trimmed.to_string()
            },
        })
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any name with a visible character is accepted and keeps that content
        #[test]
        fn non_blank_names_accepted(name in "[A-Za-z][A-Za-z ]{0,20}") {
            let station = Station::new(StationId::new(1), name.clone()).unwrap();
            prop_assert_eq!(station.name(), name.trim());
        }

        /// Whitespace-only names are always rejected
        #[test]
        fn blank_names_rejected(name in "[ \t]{0,8}") {
            prop_assert!(Station::new(StationId::new(1), name).is_err());
        }

        #[test]
        fn id_roundtrip(raw in any::<u64>()) {
            prop_assert_eq!(StationId::new(raw).get(), raw);
        }
    }
}
