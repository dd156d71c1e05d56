//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::backend::BackendConfig;

/// Default listen address.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
/// Default static asset directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid TRANSIT_BIND_ADDR {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
}

/// Everything `main` needs to start serving.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: String,
    /// JSON file replacing the built-in fallback stops.
    pub fallback_stops: Option<PathBuf>,
    pub backend: BackendConfig,
}

impl ServerConfig {
    /// Read `TRANSIT_BIND_ADDR`, `TRANSIT_STATIC_DIR`, `TRANSIT_FALLBACK_STOPS`
    /// and the backend variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("TRANSIT_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                value: bind.clone(),
                source,
            })?;

        let mut backend = lookup("TRANSIT_API_BASE")
            .map(BackendConfig::new)
            .unwrap_or_default();
        if let Some(secs) = lookup("TRANSIT_API_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            backend = backend.with_timeout(secs);
        }

        Ok(Self {
            bind_addr,
            static_dir: lookup("TRANSIT_STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            fallback_stops: lookup("TRANSIT_FALLBACK_STOPS")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            backend,
        })
    }
}
