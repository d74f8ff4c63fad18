//! Externally visible path results.

use serde::{Deserialize, Serialize};

use crate::domain::{Distance, Station, StationId};

use super::error::PathError;
use super::finder::Route;

/// A station in a path response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationResponse {
    pub id: StationId,
    pub name: String,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            id: station.id(),
            name: station.name().to_string(),
        }
    }
}

/// The answer to a shortest path query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathResponse {
    /// Stations from source to target, both inclusive
    pub stations: Vec<StationResponse>,

    /// Total distance travelled
    pub distance: Distance,
}

impl PathResponse {
    /// Station ids in travel order.
    pub fn station_ids(&self) -> Vec<StationId> {
        self.stations.iter().map(|s| s.id).collect()
    }
}

impl From<Route> for PathResponse {
    fn from(route: Route) -> Self {
        let (stations, distance) = route.into_parts();
        Self {
            stations: stations.into_iter().map(StationResponse::from).collect(),
            distance,
        }
    }
}

/// Turn a finder outcome into a response.
///
/// Failures pass through untouched so the caller can tell them apart.
pub fn assemble(outcome: Result<Route, PathError>) -> Result<PathResponse, PathError> {
    outcome.map(PathResponse::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: u64, name: &str) -> Station {
        Station::new(StationId::new(id), name).unwrap()
    }

    #[test]
    fn assemble_route() {
        let route = Route::new(
            vec![station(3, "Gyodae"), station(4, "Nambu Bus Terminal"), station(2, "Yangjae")],
            Distance::new(5),
        )
        .unwrap();

        let response = assemble(Ok(route)).unwrap();
        assert_eq!(
            response.station_ids(),
            vec![StationId::new(3), StationId::new(4), StationId::new(2)]
        );
        assert_eq!(response.stations[1].name, "Nambu Bus Terminal");
        assert_eq!(response.distance, Distance::new(5));
    }

    #[test]
    fn assemble_propagates_each_failure() {
        let failures = [
            PathError::UnknownStation(StationId::new(1)),
            PathError::IdenticalEndpoints(StationId::new(1)),
            PathError::Unreachable {
                from: StationId::new(1),
                to: StationId::new(2),
            },
        ];
        for failure in failures {
            assert_eq!(assemble(Err(failure.clone())), Err(failure));
        }
    }

    #[test]
    fn serializes_to_json() {
        let response = PathResponse {
            stations: vec![
                StationResponse {
                    id: StationId::new(1),
                    name: "Gangnam".into(),
                },
                StationResponse {
                    id: StationId::new(2),
                    name: "Yangjae".into(),
                },
            ],
            distance: Distance::new(10),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "stations": [
                    { "id": 1, "name": "Gangnam" },
                    { "id": 2, "name": "Yangjae" }
                ],
                "distance": 10
            })
        );
    }
}
