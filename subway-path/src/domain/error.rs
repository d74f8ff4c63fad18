//! Domain error types.
//!
//! These errors represent malformed network data handed over by the
//! station and line collaborators. They are distinct from query outcomes.

use super::StationId;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Station name is empty or whitespace
    #[error("station {0} has a blank name")]
    BlankStationName(StationId),

    /// Section starts and ends at the same station
    #[error("section cannot connect station {0} to itself")]
    SelfLoop(StationId),

    /// Section has a zero distance
    #[error("section {up} -> {down} must have a positive distance")]
    NonPositiveDistance { up: StationId, down: StationId },

    /// Line has no sections
    #[error("line {0:?} has no sections")]
    EmptyLine(String),

    /// Sections of a line do not form one unbranched chain
    #[error("sections of line {line:?} do not form a single chain: {reason}")]
    BrokenChain { line: String, reason: &'static str },

    /// Route has no stations
    #[error("route must visit at least one station")]
    EmptyRoute,
}
