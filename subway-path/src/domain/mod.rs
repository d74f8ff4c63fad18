//! Domain types for the subway path finder.
//!
//! This module contains the validated network model: stations, distances,
//! sections and lines. All types enforce their invariants at construction
//! time, so the graph builder and path finder can trust their validity.

mod distance;
mod error;
mod line;
mod station;

pub use distance::Distance;
pub use error::DomainError;
pub use line::{Line, Section};
pub use station::{Station, StationId};
