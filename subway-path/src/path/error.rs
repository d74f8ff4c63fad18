//! Path query outcomes that are not a route.

use crate::domain::StationId;

/// Why a shortest path query produced no route.
///
/// None of these is an internal fault: each is a deterministic answer for
/// the given network and endpoints, so retrying will not help. Callers
/// should map them to a rejected-request response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Station is unknown to the registry, or lies on no line
    #[error("station {0} not found")]
    UnknownStation(StationId),

    /// Source and target are the same station
    #[error("source and target are the same station ({0})")]
    IdenticalEndpoints(StationId),

    /// No sequence of sections connects source to target
    #[error("no path from station {from} to station {to}")]
    Unreachable { from: StationId, to: StationId },
}

impl PathError {
    /// Stable machine-readable code for this outcome.
    pub fn code(&self) -> &'static str {
        match self {
            PathError::UnknownStation(_) => "unknown_station",
            PathError::IdenticalEndpoints(_) => "identical_endpoints",
            PathError::Unreachable { .. } => "unreachable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PathError::UnknownStation(StationId::new(7));
        assert_eq!(err.to_string(), "station 7 not found");

        let err = PathError::IdenticalEndpoints(StationId::new(3));
        assert_eq!(err.to_string(), "source and target are the same station (3)");

        let err = PathError::Unreachable {
            from: StationId::new(1),
            to: StationId::new(2),
        };
        assert_eq!(err.to_string(), "no path from station 1 to station 2");
    }

    #[test]
    fn codes_are_distinct() {
        let codes = [
            PathError::UnknownStation(StationId::new(1)).code(),
            PathError::IdenticalEndpoints(StationId::new(1)).code(),
            PathError::Unreachable {
                from: StationId::new(1),
                to: StationId::new(2),
            }
            .code(),
        ];
        assert_eq!(codes, ["unknown_station", "identical_endpoints", "unreachable"]);
    }
}
