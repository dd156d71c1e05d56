//! Backend client error types.

/// Errors that can occur when talking to the planning backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Network failure, timeout, or body read error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("backend error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Client could not be constructed from its configuration
    #[error("invalid backend configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BackendError::Status {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "backend error 503: Service Unavailable");

        let err = BackendError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        let err = BackendError::Config("empty base URL".into());
        assert_eq!(
            err.to_string(),
            "invalid backend configuration: empty base URL"
        );
    }
}
