//! Stop list, name search, and the built-in fallback stops.
//!
//! Stops are fetched from the backend once at startup. If that fails the
//! directory is seeded with a small fixed sample so the UI stays usable.

mod directory;
mod fallback;
mod search;

pub use directory::{StopDirectory, StopSource};
pub use fallback::{FallbackError, load_fallback_stops, sample_stops};
pub use search::{DEFAULT_SEARCH_LIMIT, search};
