//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::backend::TransitBackend;
use crate::controller::{ControllerError, Session};
use crate::domain::StopId;
use crate::selection::{Role, SelectionState};
use crate::stops::DEFAULT_SEARCH_LIMIT;

use super::dto::*;
use super::overlay::{highlight_overlay, routes_overlay, selection_overlay};
use super::state::AppState;
use super::templates::*;

/// Upper bound on suggestions per request.
const MAX_SEARCH_LIMIT: usize = 50;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router<B: TransitBackend + 'static>(state: AppState<B>, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page::<B>))
        .route("/health", get(health))
        .route("/api/stops", get(list_stops::<B>))
        .route("/api/stops/search", get(search_stops::<B>))
        .route("/api/selection/start", post(select_start::<B>))
        .route("/api/selection/end", post(select_end::<B>))
        .route("/api/routes", get(current_routes::<B>).post(find_routes::<B>))
        .route("/api/routes/:id/overlay", get(route_overlay::<B>))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page.
async fn index_page<B: TransitBackend>(State(state): State<AppState<B>>) -> IndexTemplate {
    let session = state.controller.session().await;
    IndexTemplate {
        status: StatusView::from_status(&session.status),
        stop_count: state.controller.stops().len(),
    }
}

/// All loaded stops.
async fn list_stops<B: TransitBackend>(State(state): State<AppState<B>>) -> Json<StopsResponse> {
    Json(StopsResponse {
        stops: state.controller.stops().stops().to_vec(),
    })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Stop autocomplete.
async fn search_stops<B: TransitBackend>(
    State(state): State<AppState<B>>,
    headers: HeaderMap,
    Query(req): Query<StopSearchRequest>,
) -> Result<Response, AppError> {
    let limit = req.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_SEARCH_LIMIT);
    let matches = state.controller.stops().search(&req.q, limit);

    if accepts_html(&headers) {
        let template = SuggestionsTemplate {
            role: req.role.unwrap_or(Role::Start),
            stops: matches.into_iter().map(SuggestionView::from_stop).collect(),
        };
        Ok(render(&template)?.into_response())
    } else {
        let stops = matches.into_iter().cloned().collect();
        Ok(Json(StopsResponse { stops }).into_response())
    }
}

async fn select_start<B: TransitBackend>(
    State(state): State<AppState<B>>,
    Json(req): Json<SelectStopRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    select(&state, Role::Start, req).await
}

async fn select_end<B: TransitBackend>(
    State(state): State<AppState<B>>,
    Json(req): Json<SelectStopRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    select(&state, Role::End, req).await
}

async fn select<B: TransitBackend>(
    state: &AppState<B>,
    role: Role,
    req: SelectStopRequest,
) -> Result<Json<SelectionResponse>, AppError> {
    let session = state.controller.select(role, StopId(req.stop_id)).await?;
    Ok(Json(selection_response(&session)))
}

fn selection_response(session: &Session) -> SelectionResponse {
    let selection = &session.selection;
    SelectionResponse {
        start: selection.start().cloned(),
        end: selection.end().cloned(),
        ready: selection.state() == SelectionState::Both,
        status: session.status.clone(),
        overlay: selection_overlay(selection),
    }
}

/// Run a route search for the current selection.
async fn find_routes<B: TransitBackend>(
    State(state): State<AppState<B>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let session = state.controller.find_routes().await?;

    if accepts_html(&headers) {
        let template = RouteResultsTemplate {
            cards: RouteCardView::from_routes(&session.routes),
            status: StatusView::from_status(&session.status),
        };
        Ok(render(&template)?.into_response())
    } else {
        Ok(Json(routes_response(session)).into_response())
    }
}

/// The routes from the last search.
async fn current_routes<B: TransitBackend>(State(state): State<AppState<B>>) -> Json<RoutesResponse> {
    let session = state.controller.session().await;
    Json(routes_response(session))
}

fn routes_response(session: Session) -> RoutesResponse {
    let overlay = routes_overlay(&session.routes, &session.selection);
    RoutesResponse {
        routes: session.routes,
        status: session.status,
        overlay,
    }
}

/// Map overlay with one route emphasised.
async fn route_overlay<B: TransitBackend>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<Json<super::overlay::MapOverlay>, AppError> {
    let session = state.controller.session().await;
    let (index, route) = session
        .routes
        .iter()
        .enumerate()
        .find(|(_, r)| r.id == id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("No route {id}"),
        })?;

    Ok(Json(highlight_overlay(route, index, &session.selection)))
}

fn render(template: &impl Template) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    BadGateway { message: String },
    Internal { message: String },
}

impl From<ControllerError> for AppError {
    fn from(e: ControllerError) -> Self {
        let message = e.to_string();
        match e {
            ControllerError::Selection(_) => AppError::BadRequest { message },
            ControllerError::UnknownStop(_) => AppError::NotFound { message },
            ControllerError::Busy => AppError::Conflict { message },
            ControllerError::Backend(_) => AppError::BadGateway { message },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
