//! In-memory station registry and line supplier.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::domain::{Distance, Line, Section, Station, StationId};

use super::error::NetworkError;
use super::snapshot::{LineDto, NetworkSnapshot, SectionDto, StationDto};
use super::{LineSupplier, StationRegistry};

/// An immutable network held in memory.
///
/// Cloning is cheap: stations and lines live behind `Arc`s and are shared
/// between clones, so one network can serve any number of concurrent
/// queries.
#[derive(Debug, Clone)]
pub struct InMemoryNetwork {
    stations: Arc<HashMap<StationId, Station>>,
    lines: Arc<[Line]>,
}

impl InMemoryNetwork {
    /// Start building a network by hand.
    pub fn builder() -> NetworkBuilder {
        NetworkBuilder::new()
    }

    /// Load a network from a JSON snapshot file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let network = Self::from_snapshot(NetworkSnapshot::read(path)?)?;
        info!(
            path = %path.display(),
            stations = network.station_count(),
            lines = network.line_count(),
            "Loaded network snapshot"
        );
        Ok(network)
    }

    /// Validate a parsed snapshot and convert it to domain types.
    ///
    /// Fails on duplicate station ids, sections that mention stations
    /// missing from the station list, and any invalid station, section or
    /// line.
    pub fn from_snapshot(snapshot: NetworkSnapshot) -> Result<Self, NetworkError> {
        let mut stations = HashMap::with_capacity(snapshot.stations.len());
        for dto in snapshot.stations {
            let station = Station::new(dto.id, dto.name)?;
            if stations.insert(dto.id, station).is_some() {
                return Err(NetworkError::DuplicateStation(dto.id));
            }
        }

        let lines = snapshot
            .lines
            .into_iter()
            .map(|dto| convert_line(dto, &stations))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            stations: Arc::new(stations),
            lines: lines.into(),
        })
    }

    /// Number of registered stations, including ones on no line.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl StationRegistry for InMemoryNetwork {
    fn resolve(&self, id: StationId) -> Option<Station> {
        self.stations.get(&id).cloned()
    }
}

impl LineSupplier for InMemoryNetwork {
    fn list_all_lines(&self) -> Arc<[Line]> {
        Arc::clone(&self.lines)
    }
}

fn convert_line(dto: LineDto, stations: &HashMap<StationId, Station>) -> Result<Line, NetworkError> {
    let lookup = |id: StationId| {
        stations
            .get(&id)
            .cloned()
            .ok_or_else(|| NetworkError::UnregisteredStation {
                line: dto.name.clone(),
                station: id,
            })
    };

    let sections = dto
        .sections
        .iter()
        .map(|s| {
            let up = lookup(s.up_station_id)?;
            let down = lookup(s.down_station_id)?;
            Ok(Section::new(up, down, Distance::new(s.distance))?)
        })
        .collect::<Result<Vec<_>, NetworkError>>()?;

    Ok(Line::new(dto.name, sections)?)
}

/// Builder for creating in-memory networks.
///
/// Provides a fluent API for adding stations and lines. Validation is
/// deferred to [`NetworkBuilder::build`].
///
/// # Example
///
/// ```
/// use subway_path::network::{InMemoryNetwork, LineSupplier, StationRegistry};
/// use subway_path::domain::StationId;
///
/// let network = InMemoryNetwork::builder()
///     .station(1, "Gangnam")
///     .station(2, "Yangjae")
///     .line("Shinbundang", &[(1, 2, 10)])
///     .build()
///     .unwrap();
///
/// assert_eq!(network.resolve(StationId::new(1)).unwrap().name(), "Gangnam");
/// assert_eq!(network.list_all_lines().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    snapshot: NetworkSnapshot,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station.
    pub fn station(mut self, id: u64, name: &str) -> Self {
        self.snapshot.stations.push(StationDto {
            id: StationId::new(id),
            name: name.to_string(),
        });
        self
    }

    /// Add a line given as `(up, down, distance)` section triples.
    pub fn line(mut self, name: &str, sections: &[(u64, u64, u64)]) -> Self {
        self.snapshot.lines.push(LineDto {
            name: name.to_string(),
            sections: sections
                .iter()
                .map(|&(up, down, distance)| SectionDto {
                    up_station_id: StationId::new(up),
                    down_station_id: StationId::new(down),
                    distance,
                })
                .collect(),
        });
        self
    }

    /// Build the network.
    pub fn build(self) -> Result<InMemoryNetwork, NetworkError> {
        InMemoryNetwork::from_snapshot(self.snapshot)
    }
}
