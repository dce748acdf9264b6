//! Error types for upstream news operations

use thiserror::Error;

/// Errors from talking to the upstream news API
#[derive(Debug, Error)]
pub enum NewsError {
    /// HTTP request failed before a response arrived (DNS, connect, timeout)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream answered with a non-2xx status
    #[error("Upstream error (status {status}): {message}")]
    Upstream {
        /// HTTP status code returned by upstream
        status: u16,
        /// Short description for diagnostics
        message: String,
    },

    /// Upstream body did not match the expected schema
    #[error("Parse error: {0}")]
    Parse(String),
}

impl NewsError {
    /// Status code of the upstream rejection, if this is one
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            NewsError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
