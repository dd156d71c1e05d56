//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use super::overlay::MapOverlay;
use crate::controller::Status;
use crate::domain::{RouteOption, Stop};
use crate::selection::Role;

/// Query for stop autocomplete.
#[derive(Debug, Deserialize)]
pub struct StopSearchRequest {
    /// Text typed so far
    #[serde(default)]
    pub q: String,

    /// Maximum suggestions (default 10, capped at 50)
    pub limit: Option<usize>,

    /// Which input the suggestions are for (HTML fragments only). Defaults
    /// to the start input when omitted.
    pub role: Option<Role>,
}

/// Stops matching a search, or the full list.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    pub stops: Vec<Stop>,
}

/// Request to select a stop for a role.
#[derive(Debug, Deserialize)]
pub struct SelectStopRequest {
    pub stop_id: i64,
}

/// Selection after a change.
#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub start: Option<Stop>,
    pub end: Option<Stop>,

    /// Both roles are filled
    pub ready: bool,

    pub status: Status,
    pub overlay: MapOverlay,
}

/// Current route options.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub routes: Vec<RouteOption>,
    pub status: Status,
    pub overlay: MapOverlay,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Message suitable for the status line
    pub error: String,
}
