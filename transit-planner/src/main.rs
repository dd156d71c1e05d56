use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use transit_planner::backend::BackendClient;
use transit_planner::config::ServerConfig;
use transit_planner::controller::Controller;
use transit_planner::stops::{load_fallback_stops, sample_stops};
use transit_planner::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("transit_planner=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env().expect("Invalid configuration");

    // Fallback stops, used only if the backend's stop list is unavailable
    let fallback = match &config.fallback_stops {
        Some(path) => load_fallback_stops(path).unwrap_or_else(|e| {
            warn!(error = %e, "ignoring fallback stop file");
            sample_stops()
        }),
        None => sample_stops(),
    };

    let backend = BackendClient::new(config.backend.clone()).expect("Failed to create backend client");
    info!(api = backend.base_url(), "loading stops");
    let controller = Controller::start(backend, fallback).await;
    info!(
        count = controller.stops().len(),
        source = ?controller.stops().source(),
        "stops ready"
    );

    let app = create_router(AppState::new(controller), &config.static_dir);

    info!("Transit planner listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}
