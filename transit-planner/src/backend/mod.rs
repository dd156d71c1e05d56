//! Client for the trip-planning backend.
//!
//! The backend owns stops and route computation. This module fetches stops
//! and raw itineraries over HTTP; it never interprets itineraries beyond
//! reading their summary fields.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod types;

use std::future::Future;

pub use client::{BackendClient, BackendConfig, DEFAULT_API_BASE};
pub use error::BackendError;
pub use types::{RawItinerary, decode_itineraries};

use crate::domain::Stop;

/// Source of stops and itineraries.
///
/// Implemented by [`BackendClient`]; tests substitute in-memory fakes.
pub trait TransitBackend: Send + Sync {
    /// Fetch every stop the backend knows.
    fn fetch_stops(&self) -> impl Future<Output = Result<Vec<Stop>, BackendError>> + Send;

    /// Ask the backend for itineraries between two stops.
    ///
    /// `Ok(None)` means the backend answered with something other than a
    /// JSON array.
    fn plan(
        &self,
        origin: &Stop,
        destination: &Stop,
    ) -> impl Future<Output = Result<Option<Vec<RawItinerary>>, BackendError>> + Send;
}
