//! Error types for TWSE operations.
//!
//! Only failures that must reach the caller live here. A body that fails to
//! parse is not an error: it is reported as [`Fetched::Malformed`](crate::Fetched)
//! and the tool layer decides what it means for that endpoint.

use thiserror::Error;

/// A specialized Result type for TWSE operations.
pub type TwseResult<T> = Result<T, TwseError>;

/// The main error type for TWSE operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TwseError {
    /// Connection, DNS or protocol failure talking to the upstream API.
    #[error("request to {url} failed: {reason}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Description of the failure.
        reason: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// Requested URL.
        url: String,
    },

    /// The upstream API answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },

    /// An endpoint descriptor that cannot be requested.
    #[error("Invalid endpoint '{path}': {reason}")]
    InvalidEndpoint {
        /// The offending path.
        path: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A tool argument outside its accepted range.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// Argument name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl TwseError {
    /// Creates a transport error.
    #[must_use]
    pub fn transport(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http_status(status: u16, url: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            url: url.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Creates an invalid endpoint error.
    #[must_use]
    pub fn invalid_endpoint(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidEndpoint {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for failures of the outbound request itself.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::HttpStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TwseError::http_status(404, "https://openapi.twse.com.tw/v1/invalid/endpoint");
        assert_eq!(
            err.to_string(),
            "HTTP 404 from https://openapi.twse.com.tw/v1/invalid/endpoint"
        );
    }

    #[test]
    fn test_transport_classification() {
        assert!(TwseError::timeout("u").is_transport());
        assert!(TwseError::transport("u", "connection refused").is_transport());
        assert!(!TwseError::config("bad interval").is_transport());
    }
}
