/*
[INPUT]:  API key/secret and wall-clock time
[OUTPUT]: Credentials and monotonic nonces for signed requests
[POS]:    Auth layer - key material and replay protection
[UPDATE]: When credential handling or nonce policy changes
*/

pub mod credentials;
pub mod nonce;

pub use credentials::Credentials;
pub use nonce::{NONCE_TICKS_PER_SECOND, Nonce, NonceGenerator};
