/*
[INPUT]:  API key and API secret supplied by the caller
[OUTPUT]: Immutable credential pair bound to a client
[POS]:    Auth layer - key material for private endpoints
[UPDATE]: When credential sources or validation change
*/

use secrecy::{ExposeSecret, SecretString};

use crate::http::{BitfinexError, Result};

/// API key and secret for signed requests.
///
/// The secret never shows up in `Debug` output.
#[derive(Debug, Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Like `new`, but rejects blank values
    pub fn try_new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.trim().is_empty() {
            return Err(BitfinexError::Config("API key is empty".to_string()));
        }
        if api_secret.trim().is_empty() {
            return Err(BitfinexError::Config("API secret is empty".to_string()));
        }
        Ok(Self::new(api_key, api_secret))
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn secret_bytes(&self) -> &[u8] {
        self.api_secret.expose_secret().as_bytes()
    }
}
