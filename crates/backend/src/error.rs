//! Error type for calls to an external backend.

/// Errors from the backend client layer.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request was aborted because it exceeded its time budget.
    #[error("Backend request to {path} timed out")]
    Timeout {
        /// Backend path that timed out.
        path: String,
    },

    /// The backend returned a non-2xx status code.
    #[error("Backend error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Message extracted from the backend's error body.
        message: String,
    },

    /// The backend answered 2xx but the body did not match the expected type.
    #[error("Failed to decode backend response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Build the error for a failed send, separating timeouts from other
    /// transport failures.
    pub fn from_send(err: reqwest::Error, path: &str) -> Self {
        if err.is_timeout() {
            BackendError::Timeout {
                path: path.to_string(),
            }
        } else {
            BackendError::Request(err)
        }
    }

    /// The backend status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
