//! Station and line suppliers.
//!
//! The path finder does not own stations or lines. It reads them through
//! the [`StationRegistry`] and [`LineSupplier`] traits, which keeps the
//! search testable against in-memory data and independent of how the
//! network is stored.

mod error;
mod memory;
mod snapshot;

use std::sync::Arc;

use crate::domain::{Line, Station, StationId};

pub use error::NetworkError;
pub use memory::{InMemoryNetwork, NetworkBuilder};
pub use snapshot::{LineDto, NetworkSnapshot, SectionDto, StationDto};

/// Resolves station identifiers to stations.
pub trait StationRegistry {
    /// Look up a station by id. Returns `None` if the registry has never
    /// heard of it.
    fn resolve(&self, id: StationId) -> Option<Station>;
}

/// Supplies every line of the network.
///
/// Stations inside the supplied lines must agree with the
/// [`StationRegistry`] serving the same queries: same id, same name. Path
/// responses take station names from the line data.
pub trait LineSupplier {
    /// Returns an immutable snapshot of all lines.
    ///
    /// Called once per path query; implementations should make this cheap.
    fn list_all_lines(&self) -> Arc<[Line]>;
}

impl<T: StationRegistry + ?Sized> StationRegistry for Arc<T> {
    fn resolve(&self, id: StationId) -> Option<Station> {
        (**self).resolve(id)
    }
}

impl<T: LineSupplier + ?Sized> LineSupplier for Arc<T> {
    fn list_all_lines(&self) -> Arc<[Line]> {
        (**self).list_all_lines()
    }
}
