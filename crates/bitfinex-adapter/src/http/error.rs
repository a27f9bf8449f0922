/*
[INPUT]:  Error sources (transport, serialization, URL, headers, exchange status)
[OUTPUT]: Structured error types that keep the underlying cause
[POS]:    Error handling layer - unified error type for the adapter
[UPDATE]: When adding new error sources or improving error messages
*/

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Classification of a failure where no HTTP response was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection refused, DNS resolution or TLS handshake failure
    Connect,
    /// Request or connect timeout elapsed
    Timeout,
    /// Request could not be built or sent
    Request,
    /// Response body could not be read
    Body,
    Other,
}

impl TransportErrorKind {
    pub(crate) fn classify(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::Connect
        } else if err.is_body() || err.is_decode() {
            Self::Body
        } else if err.is_request() || err.is_builder() {
            Self::Request
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Connect => "connect",
            Self::Timeout => "timeout",
            Self::Request => "request",
            Self::Body => "body",
            Self::Other => "other",
        };
        f.write_str(label)
    }
}

/// Main error type for the Bitfinex adapter
#[derive(Error, Debug)]
pub enum BitfinexError {
    /// No HTTP response was obtained
    #[error("transport failure ({kind}): {source}")]
    Transport {
        kind: TransportErrorKind,
        #[source]
        source: reqwest::Error,
    },

    /// Exchange answered with a non-200 status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// A credential or payload could not be placed in a header
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Private endpoint called on a client built without credentials
    #[error("API credentials are required for private endpoints")]
    MissingCredentials,

    /// Request parameters rejected before sending
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BitfinexError {
    /// True when no HTTP response exists for the failed call
    pub fn is_transport(&self) -> bool {
        matches!(self, BitfinexError::Transport { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            BitfinexError::Transport {
                kind: TransportErrorKind::Timeout,
                ..
            }
        )
    }

    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            BitfinexError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        BitfinexError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for BitfinexError {
    fn from(source: reqwest::Error) -> Self {
        BitfinexError::Transport {
            kind: TransportErrorKind::classify(&source),
            source,
        }
    }
}

/// Result type alias for Bitfinex operations
pub type Result<T> = std::result::Result<T, BitfinexError>;
