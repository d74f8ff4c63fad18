//! Shortest path search strategies.

use petgraph::algo::astar;
use tracing::trace;

use crate::domain::{Distance, DomainError, Station, StationId};

use super::error::PathError;
use super::graph::SubwayGraph;

/// A found route: stations from source to target, both inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    stations: Vec<Station>,
    distance: Distance,
}

impl Route {
    /// Create a route from stations in travel order.
    ///
    /// Fails if `stations` is empty.
    pub fn new(stations: Vec<Station>, distance: Distance) -> Result<Self, DomainError> {
        if stations.is_empty() {
            return Err(DomainError::EmptyRoute);
        }
        Ok(Self { stations, distance })
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Total distance of the traversed edges.
    pub fn distance(&self) -> Distance {
        self.distance
    }

    pub fn source(&self) -> Option<&Station> {
        self.stations.first()
    }

    pub fn target(&self) -> Option<&Station> {
        self.stations.last()
    }

    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    pub fn into_parts(self) -> (Vec<Station>, Distance) {
        (self.stations, self.distance)
    }
}

/// A shortest path strategy over a built [`SubwayGraph`].
///
/// Implementations must reject identical endpoints, endpoints missing from
/// the graph, and unconnected endpoints with the matching [`PathError`],
/// and must report a distance equal to the sum of the edges they traverse.
pub trait PathFinder {
    fn find(
        &self,
        graph: &SubwayGraph,
        source: StationId,
        target: StationId,
    ) -> Result<Route, PathError>;
}

impl<F: PathFinder + ?Sized> PathFinder for &F {
    fn find(
        &self,
        graph: &SubwayGraph,
        source: StationId,
        target: StationId,
    ) -> Result<Route, PathError> {
        (**self).find(graph, source, target)
    }
}

impl<F: PathFinder + ?Sized> PathFinder for Box<F> {
    fn find(
        &self,
        graph: &SubwayGraph,
        source: StationId,
        target: StationId,
    ) -> Result<Route, PathError> {
        (**self).find(graph, source, target)
    }
}

/// Dijkstra's algorithm over the section distances.
///
/// Runs petgraph's A* with a zero heuristic, which is exactly Dijkstra and
/// also yields the node path. Among parallel edges the lightest is taken.
/// Ties between equally short routes are broken arbitrarily.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl PathFinder for Dijkstra {
    fn find(
        &self,
        graph: &SubwayGraph,
        source: StationId,
        target: StationId,
    ) -> Result<Route, PathError> {
        if source == target {
            return Err(PathError::IdenticalEndpoints(source));
        }
        let start = graph
            .node(source)
            .ok_or(PathError::UnknownStation(source))?;
        let goal = graph
            .node(target)
            .ok_or(PathError::UnknownStation(target))?;

        let inner = graph.inner();
        let (distance, nodes) = astar(
            inner,
            start,
            |n| n == goal,
            |e| *e.weight(),
            |_| Distance::ZERO,
        )
        .ok_or(PathError::Unreachable {
            from: source,
            to: target,
        })?;

        trace!(
            %source,
            %target,
            %distance,
            hops = nodes.len().saturating_sub(1),
            "Dijkstra found route"
        );

        // astar paths always start with `start`, so the route is never empty
        Ok(Route {
            stations: nodes.into_iter().map(|n| inner[n].clone()).collect(),
            distance,
        })
    }
}
