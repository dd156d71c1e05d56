//! Stops used when the backend cannot be reached.

use std::path::Path;

use crate::domain::Stop;

/// Errors reading a fallback stop file.
#[derive(Debug, thiserror::Error)]
pub enum FallbackError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("{path} contains no stops")]
    Empty { path: String },
}

/// The built-in sample stops (Guelph, ON).
pub fn sample_stops() -> Vec<Stop> {
    vec![
        Stop::new(1, "University Centre", 43.5326, -80.2264),
        Stop::new(2, "Gordon at Edinburgh", 43.5189, -80.2401),
        Stop::new(3, "Stone Road Mall", 43.5253, -80.2507),
        Stop::new(4, "Guelph Central Station", 43.5432, -80.2489),
        Stop::new(5, "Imperial at Silvercreek", 43.5512, -80.2734),
    ]
}

/// Load a replacement fallback list from a JSON file shaped like the
/// backend's `/stops/` response.
pub fn load_fallback_stops(path: impl AsRef<Path>) -> Result<Vec<Stop>, FallbackError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let json = std::fs::read_to_string(path).map_err(|source| FallbackError::Io {
        path: display.clone(),
        source,
    })?;
    let stops: Vec<Stop> = serde_json::from_str(&json).map_err(|source| FallbackError::Json {
        path: display.clone(),
        source,
    })?;

    if stops.is_empty() {
        return Err(FallbackError::Empty { path: display });
    }
    Ok(stops)
}
