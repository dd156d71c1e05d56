//! Application state and the operations the UI drives.
//!
//! A [`Controller`] owns the loaded stops, the user's selection, the latest
//! route options and the status line. Handlers share it by cloning; there is
//! no global state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::backend::{BackendError, TransitBackend};
use crate::domain::{RouteOption, Stop, StopId};
use crate::itinerary::normalize;
use crate::selection::{Role, Selection, SelectionError, SelectionState};
use crate::stops::{StopDirectory, StopSource};

/// Status shown when stops could not be fetched.
pub const STOPS_FALLBACK_MESSAGE: &str = "Failed to load stop data from backend.";
/// Status shown while a plan request is outstanding.
pub const SEARCHING_MESSAGE: &str = "Finding the best routes for you...";
/// Status shown when a plan request fails.
pub const PLAN_FAILED_MESSAGE: &str = "Failed to find routes. Please try again.";
/// Status shown when the backend found nothing.
pub const NO_ROUTES_MESSAGE: &str = "No routes found matching your criteria.";

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Info,
    Error,
    Loading,
}

/// The user-visible status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Loading,
            message: message.into(),
        }
    }
}

/// Errors from controller operations. All of them end up as a status message.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("no stop with id {0}")]
    UnknownStop(StopId),

    #[error("a route search is already in progress")]
    Busy,

    #[error("Failed to find routes. Please try again.")]
    Backend(#[source] BackendError),
}

/// Mutable per-user state.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub selection: Selection,
    pub routes: Vec<RouteOption>,
    pub status: Status,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            selection: Selection::new(),
            routes: Vec::new(),
            status: Status::info(SelectionState::None.prompt()),
        }
    }
}

/// Clears the busy flag when dropped, including when the request is cancelled.
struct BusyGuard<'a>(&'a AtomicBool);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Owns application state and talks to the backend.
#[derive(Debug)]
pub struct Controller<B> {
    backend: Arc<B>,
    stops: Arc<StopDirectory>,
    session: Arc<RwLock<Session>>,
    busy: Arc<AtomicBool>,
}

impl<B> Clone for Controller<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            stops: Arc::clone(&self.stops),
            session: Arc::clone(&self.session),
            busy: Arc::clone(&self.busy),
        }
    }
}

impl<B: TransitBackend> Controller<B> {
    /// Load stops from the backend (or `fallback`) and start an empty session.
    pub async fn start(backend: B, fallback: Vec<Stop>) -> Self {
        let stops = StopDirectory::load(&backend, fallback).await;
        Self::with_stops(backend, stops)
    }

    /// Build a controller around an already-loaded stop list.
    pub fn with_stops(backend: B, stops: StopDirectory) -> Self {
        let mut session = Session::default();
        if stops.source() == StopSource::Fallback {
            session.status = Status::error(STOPS_FALLBACK_MESSAGE);
        }

        Self {
            backend: Arc::new(backend),
            stops: Arc::new(stops),
            session: Arc::new(RwLock::new(session)),
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn stops(&self) -> &StopDirectory {
        &self.stops
    }

    /// Whether a plan request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// A copy of the current session.
    pub async fn session(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Select the stop with `id` for `role`.
    pub async fn select(&self, role: Role, id: StopId) -> Result<Session, ControllerError> {
        let stop = self
            .stops
            .get(id)
            .cloned()
            .ok_or(ControllerError::UnknownStop(id))?;

        let mut session = self.session.write().await;
        session.selection.set(role, stop);
        session.status = Status::info(session.selection.state().prompt());
        Ok(session.clone())
    }

    /// Request routes for the current selection.
    ///
    /// Validation failures are reported before any network call. A second
    /// request while one is outstanding is rejected, not queued. On success
    /// the new routes replace the previous ones. The returned session is
    /// taken under the same lock that stored the outcome.
    pub async fn find_routes(&self) -> Result<Session, ControllerError> {
        let Some(_busy) = BusyGuard::acquire(&self.busy) else {
            warn!("route search already in progress");
            return Err(ControllerError::Busy);
        };

        let (origin, destination) = {
            let mut session = self.session.write().await;
            let pair = session
                .selection
                .validate()
                .map(|(o, d)| (o.clone(), d.clone()));
            match pair {
                Ok(pair) => {
                    session.status = Status::loading(SEARCHING_MESSAGE);
                    pair
                }
                Err(e) => {
                    session.status = Status::error(e.to_string());
                    return Err(e.into());
                }
            }
        };

        let result = self.backend.plan(&origin, &destination).await;

        let mut session = self.session.write().await;
        match result {
            Ok(raw) => {
                let routes = normalize(raw.as_deref(), &origin, &destination);
                info!(
                    origin = %origin.id,
                    destination = %destination.id,
                    count = routes.len(),
                    "planned routes"
                );
                session.status = if routes.is_empty() {
                    Status::info(NO_ROUTES_MESSAGE)
                } else {
                    Status::info(format!("Found {} route options.", routes.len()))
                };
                session.routes = routes;
                Ok(session.clone())
            }
            Err(e) => {
                warn!(error = %e, "route planning failed");
                session.routes.clear();
                session.status = Status::error(PLAN_FAILED_MESSAGE);
                Err(ControllerError::Backend(e))
            }
        }
    }
}
