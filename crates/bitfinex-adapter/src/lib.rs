/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Bitfinex adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credentials, Nonce, NonceGenerator};

// Re-export commonly used types from http
pub use http::{
    BitfinexClient,
    BitfinexError,
    ClientConfig,
    PathParams,
    RequestSigner,
    Result,
    SignedHeaders,
    TransportErrorKind,
};

// Re-export all types
pub use types::*;
