//! JSON network snapshot format.
//!
//! A snapshot is the full station list plus every line's sections, as
//! exported by whatever system owns the network data:
//!
//! ```json
//! {
//!   "stations": [{ "id": 1, "name": "Gangnam" }, { "id": 2, "name": "Yangjae" }],
//!   "lines": [
//!     { "name": "Shinbundang", "sections": [
//!       { "up_station_id": 1, "down_station_id": 2, "distance": 10 }
//!     ] }
//!   ]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::StationId;

use super::error::NetworkError;

/// A station entry in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationDto {
    pub id: StationId,
    pub name: String,
}

/// A section entry in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDto {
    pub up_station_id: StationId,
    pub down_station_id: StationId,
    pub distance: u64,
}

/// A line entry in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDto {
    pub name: String,
    #[serde(default)]
    pub sections: Vec<SectionDto>,
}

/// Serialized form of a whole network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    #[serde(default)]
    pub stations: Vec<StationDto>,
    #[serde(default)]
    pub lines: Vec<LineDto>,
}

impl NetworkSnapshot {
    /// Parse a snapshot from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a snapshot file.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
