//! The in-memory stop list.

use tracing::{info, warn};

use super::search::search;
use crate::backend::TransitBackend;
use crate::domain::{Stop, StopId};

/// Where the loaded stops came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopSource {
    Backend,
    Fallback,
}

/// Stops available for selection. Read-only once loaded.
#[derive(Debug, Clone)]
pub struct StopDirectory {
    stops: Vec<Stop>,
    source: StopSource,
}

impl StopDirectory {
    pub fn new(stops: Vec<Stop>, source: StopSource) -> Self {
        Self { stops, source }
    }

    /// Fetch stops from the backend, or use `fallback` if that fails.
    pub async fn load<B: TransitBackend>(backend: &B, fallback: Vec<Stop>) -> Self {
        match backend.fetch_stops().await {
            Ok(stops) => {
                info!(count = stops.len(), "loaded stops from backend");
                Self::new(stops, StopSource::Backend)
            }
            Err(e) => {
                warn!(error = %e, count = fallback.len(), "failed to fetch stops, using fallback list");
                Self::new(fallback, StopSource::Fallback)
            }
        }
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn source(&self) -> StopSource {
        self.source
    }

    /// Look up a stop by id.
    pub fn get(&self, id: StopId) -> Option<&Stop> {
        self.stops.iter().find(|s| s.id == id)
    }

    /// Autocomplete over stop names. See [`search`].
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Stop> {
        search(query, &self.stops, limit)
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
