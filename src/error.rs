//! Error types for the ORCID API client.
//!
//! Every fallible operation in this crate returns [`Error`]. Transient
//! failures (connection errors, retryable HTTP statuses) drive the retry
//! loop internally and only reach the caller wrapped in
//! [`Error::RetriesExhausted`].

use thiserror::Error;

use crate::client::ResponseFormat;

/// A specialized `Result` type for ORCID operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all ORCID API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// No bearer token was configured on the client.
    ///
    /// The ORCID API requires bearer token authentication for all requests;
    /// this is checked before any network I/O.
    #[error("bearer token is required for ORCID API requests; set one with ClientConfig::with_token")]
    MissingCredential,

    /// The caller's cancellation signal fired while the call was waiting
    /// for a pacing permit, sleeping between retries, or in flight.
    #[error("operation cancelled")]
    Cancelled,

    /// The HTTP transport failed before a response was received.
    ///
    /// Retried internally; surfaces only inside [`Error::RetriesExhausted`].
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A retryable HTTP status (429, 408, or 5xx) was returned.
    ///
    /// Retried internally; surfaces only inside [`Error::RetriesExhausted`].
    #[error("HTTP {status}")]
    RetryableStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// Every attempt failed with a transient error.
    #[error("request failed after {attempts} attempts: {source}")]
    RetriesExhausted {
        /// Total number of physical attempts issued.
        attempts: u32,
        /// The last transient cause.
        #[source]
        source: Box<Error>,
    },

    /// The server returned a non-retryable, non-200 status.
    #[error("HTTP {status}: {body}")]
    RemoteRejected {
        /// The HTTP status code.
        status: u16,
        /// The raw response body, kept for diagnostics.
        body: String,
    },

    /// The response body could not be parsed under the configured format.
    #[error("{format} decode error: {message}")]
    Decode {
        /// The format the body was expected to be in.
        format: ResponseFormat,
        /// The underlying parser message.
        message: String,
    },

    /// A request URL could not be constructed.
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A resource path could not be routed to an endpoint.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// An ORCID iD failed structural or checksum validation.
    #[error("invalid ORCID iD: {0}")]
    InvalidId(String),
}

impl Error {
    /// Returns `true` if this error is transient and the attempt that
    /// produced it may be retried.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::RetryableStatus { .. })
    }

    /// Returns `true` if the error was caused by cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// The HTTP status embedded in this error, if any.
    ///
    /// For [`Error::RetriesExhausted`] this is the status of the last
    /// failed attempt.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RetryableStatus { status } | Error::RemoteRejected { status, .. } => {
                Some(*status)
            }
            Error::RetriesExhausted { source, .. } => source.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(Error::RetryableStatus { status: 503 }.is_retryable());
        assert!(!Error::MissingCredential.is_retryable());
        assert!(!Error::RemoteRejected { status: 404, body: String::new() }.is_retryable());
        assert!(!Error::Cancelled.is_retryable());
    }

    #[test]
    fn status_unwraps_through_exhaustion() {
        let err = Error::RetriesExhausted {
            attempts: 4,
            source: Box::new(Error::RetryableStatus { status: 429 }),
        };
        assert_eq!(err.status(), Some(429));
        assert_eq!(Error::Cancelled.status(), None);
    }

    #[test]
    fn rejected_display_includes_body() {
        let err = Error::RemoteRejected {
            status: 404,
            body: "{\"error\":\"not found\"}".into(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("not found"));
    }
}
