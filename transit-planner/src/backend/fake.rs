//! In-memory backend for unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::Value;
use tokio::sync::Notify;

use super::{BackendError, RawItinerary, TransitBackend, decode_itineraries};
use crate::domain::Stop;

/// Backend that answers from fixed data and counts plan requests.
#[derive(Debug, Default)]
pub(crate) struct FakeBackend {
    stops: Option<Vec<Stop>>,
    plan_body: Option<Value>,
    plan_calls: AtomicUsize,
    gate: Option<Arc<Notify>>,
}

impl FakeBackend {
    /// Serve these stops; plan requests fail.
    pub(crate) fn with_stops(stops: Vec<Stop>) -> Self {
        Self {
            stops: Some(stops),
            ..Self::default()
        }
    }

    /// Answer plan requests with this JSON body.
    pub(crate) fn planning(mut self, body: Value) -> Self {
        self.plan_body = Some(body);
        self
    }

    /// Hold each plan request until the returned handle is notified.
    pub(crate) fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub(crate) fn plan_calls(&self) -> usize {
        self.plan_calls.load(Ordering::SeqCst)
    }
}

fn unavailable() -> BackendError {
    BackendError::Status {
        status: 503,
        message: "unavailable".to_string(),
    }
}

impl TransitBackend for FakeBackend {
    async fn fetch_stops(&self) -> Result<Vec<Stop>, BackendError> {
        self.stops.clone().ok_or_else(unavailable)
    }

    async fn plan(
        &self,
        _origin: &Stop,
        _destination: &Stop,
    ) -> Result<Option<Vec<RawItinerary>>, BackendError> {
        self.plan_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let body = self.plan_body.as_ref().ok_or_else(unavailable)?;
        Ok(decode_itineraries(body))
    }
}
