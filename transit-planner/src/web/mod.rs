//! Web layer for the trip planner.
//!
//! Renders already-computed stops and route options as JSON, HTML fragments
//! and map overlays. Business rules live in the controller.

mod dto;
pub mod overlay;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
