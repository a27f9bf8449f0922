/*
[INPUT]:  HTTP client configuration, credentials and API endpoints
[OUTPUT]: Normalized responses for public and signed API calls
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod public;
pub mod signature;
pub mod trade;
pub mod transport;
pub mod user;

pub use error::{BitfinexError, Result, TransportErrorKind};
pub use signature::{
    API_KEY_HEADER, PAYLOAD_HEADER, RequestSigner, SIGNATURE_HEADER, SignedHeaders,
};

pub use client::{BitfinexClient, ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL, PathParams};
