//! Network loading error types.

use std::path::PathBuf;

use crate::domain::{DomainError, StationId};

/// Errors that can occur while assembling an in-memory network.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Snapshot file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot JSON is malformed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two stations share an id
    #[error("station {0} is registered more than once")]
    DuplicateStation(StationId),

    /// A section mentions a station the registry does not know
    #[error("line {line:?} references unregistered station {station}")]
    UnregisteredStation { line: String, station: StationId },

    /// Station or line data violates a domain invariant
    #[error(transparent)]
    Domain(#[from] DomainError),
}
