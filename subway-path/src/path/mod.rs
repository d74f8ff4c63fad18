//! Shortest path search over the subway network.
//!
//! This module answers: "what is the shortest way from this station to
//! that one, across every line?"
//!
//! Each query merges all lines' sections into a fresh weighted multigraph,
//! validates the endpoints, and runs a Dijkstra search. Nothing is cached
//! between queries, so concurrent queries never share mutable state.

mod config;
mod error;
mod finder;
mod graph;
mod response;
mod service;


pub use config::{ConfigError, PathConfig, TRAVERSAL_ENV, Traversal};
pub use error::PathError;
pub use finder::{Dijkstra, PathFinder, Route};
pub use graph::SubwayGraph;
pub use response::{PathResponse, StationResponse, assemble};
pub use service::PathService;
