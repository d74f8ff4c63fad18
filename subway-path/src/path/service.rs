//! The shortest path query entry point.

use tracing::debug;

use crate::domain::{Station, StationId};
use crate::network::{InMemoryNetwork, LineSupplier, StationRegistry};

use super::config::PathConfig;
use super::error::PathError;
use super::finder::{Dijkstra, PathFinder};
use super::graph::SubwayGraph;
use super::response::{PathResponse, assemble};

/// Answers shortest path queries against a station registry and line supplier.
///
/// The service holds no per-query state: every call fetches the current
/// lines, builds its own graph and drops it afterwards. It can be shared
/// freely between threads when its collaborators can.
#[derive(Debug, Clone)]
pub struct PathService<R, L, F = Dijkstra> {
    registry: R,
    lines: L,
    finder: F,
    config: PathConfig,
}

impl<R: StationRegistry, L: LineSupplier> PathService<R, L> {
    /// Create a service using Dijkstra's algorithm.
    pub fn new(registry: R, lines: L, config: PathConfig) -> Self {
        Self::with_finder(registry, lines, Dijkstra, config)
    }
}

impl PathService<InMemoryNetwork, InMemoryNetwork> {
    /// Serve queries from one in-memory network.
    pub fn from_network(network: InMemoryNetwork, config: PathConfig) -> Self {
        Self::new(network.clone(), network, config)
    }
}

impl<R: StationRegistry, L: LineSupplier, F: PathFinder> PathService<R, L, F> {
    /// Create a service with a custom search strategy.
    pub fn with_finder(registry: R, lines: L, finder: F, config: PathConfig) -> Self {
        Self {
            registry,
            lines,
            finder,
            config,
        }
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Find the shortest path from `source` to `target`.
    ///
    /// Checks run in this order: registry lookup of source then target,
    /// identical endpoints, graph membership, connectivity. Lines are only
    /// fetched once both endpoints are known and distinct.
    pub fn find_shortest_path(
        &self,
        source: StationId,
        target: StationId,
    ) -> Result<PathResponse, PathError> {
        let from = self.resolve(source)?;
        let to = self.resolve(target)?;

        if from.id() == to.id() {
            debug!(%source, "Rejected query with identical endpoints");
            return Err(PathError::IdenticalEndpoints(source));
        }

        let lines = self.lines.list_all_lines();
        let graph = SubwayGraph::build(&lines, self.config.traversal);

        let outcome = self.finder.find(&graph, from.id(), to.id());
        match &outcome {
            Ok(route) => debug!(
                source = %from,
                target = %to,
                distance = %route.distance(),
                hops = route.hop_count(),
                "Found shortest path"
            ),
            Err(e) => debug!(
                source = %from,
                target = %to,
                reason = e.code(),
                "No shortest path"
            ),
        }

        assemble(outcome)
    }

    fn resolve(&self, id: StationId) -> Result<Station, PathError> {
        self.registry.resolve(id).ok_or_else(|| {
            debug!(station = %id, "Station not in registry");
            PathError::UnknownStation(id)
        })
    }
}
