//! Turning backend itineraries into route options for display.
//!
//! The backend only supplies summary numbers today. Everything else a route
//! card or map needs (steps, path, eco score, features) comes from the
//! explicit placeholders in [`Placeholders`] until the backend provides it.

mod normalize;
mod placeholders;
mod steps;

pub use normalize::{normalize, normalize_with};
pub use placeholders::Placeholders;
pub use steps::build_steps;
