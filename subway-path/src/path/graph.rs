//! Weighted multigraph built from every line's sections.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::domain::{Distance, Line, Station, StationId};

use super::config::Traversal;

/// The transient graph a single path query searches.
///
/// Vertices are the distinct stations mentioned by any section; a station
/// shared by several lines is one vertex. Every section contributes its own
/// edge (two under [`Traversal::Bidirectional`]), so overlapping sections
/// from different lines stay as parallel edges with independent weights.
#[derive(Debug, Clone, Default)]
pub struct SubwayGraph {
    graph: DiGraph<Station, Distance>,
    nodes: HashMap<StationId, NodeIndex>,
}

impl SubwayGraph {
    /// Build the graph for `lines` under the given direction policy.
    ///
    /// An empty line set gives an empty graph. The input is not modified.
    pub fn build(lines: &[Line], traversal: Traversal) -> Self {
        let mut built = Self::default();

        for line in lines {
            for section in line.sections() {
                debug_assert_ne!(section.up().id(), section.down().id());
                debug_assert!(!section.distance().is_zero());

                let up = built.vertex(section.up());
                let down = built.vertex(section.down());
                built.graph.add_edge(up, down, section.distance());
                if traversal == Traversal::Bidirectional {
                    built.graph.add_edge(down, up, section.distance());
                }
            }
        }

        debug!(
            lines = lines.len(),
            stations = built.station_count(),
            edges = built.edge_count(),
            traversal = %traversal,
            "Built subway graph"
        );

        built
    }

    fn vertex(&mut self, station: &Station) -> NodeIndex {
        let graph = &mut self.graph;
        *self
            .nodes
            .entry(station.id())
            .or_insert_with(|| graph.add_node(station.clone()))
    }

    /// Whether the station lies on at least one section.
    pub fn contains(&self, id: StationId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// The station entity for a vertex, if present.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.node(id).map(|n| &self.graph[n])
    }

    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Weights of every edge running directly from `from` to `to`.
    pub fn edges_between(&self, from: StationId, to: StationId) -> Vec<Distance> {
        match (self.node(from), self.node(to)) {
            (Some(a), Some(b)) => self
                .graph
                .edges_connecting(a, b)
                .map(|e| *e.weight())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub(crate) fn node(&self, id: StationId) -> Option<NodeIndex> {
        self.nodes.get(&id).copied()
    }

    pub(crate) fn inner(&self) -> &DiGraph<Station, Distance> {
        &self.graph
    }
}
