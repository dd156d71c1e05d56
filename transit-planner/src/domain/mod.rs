//! Domain types for the transit trip planner.
//!
//! Stops are fetched once and are read-only afterwards. Route options are
//! derived fresh for every search and replaced by the next one.

mod route;
mod stop;

pub use route::{Feature, RouteOption, RouteStep, StepKind};
pub use stop::{Coordinate, Stop, StopId};
