/*
[INPUT]:  Parameter set, credentials and a nonce
[OUTPUT]: Signed request headers (X-BFX-APIKEY / PAYLOAD / SIGNATURE)
[POS]:    HTTP layer - request signing for private endpoints
[UPDATE]: When changing signing algorithm or header format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderValue};
use sha2::Sha384;

use crate::auth::{Credentials, Nonce};
use crate::http::{BitfinexError, Result};
use crate::types::ParameterSet;

type HmacSha384 = Hmac<Sha384>;

pub const API_KEY_HEADER: &str = "X-BFX-APIKEY";
pub const PAYLOAD_HEADER: &str = "X-BFX-PAYLOAD";
pub const SIGNATURE_HEADER: &str = "X-BFX-SIGNATURE";

/// Authentication headers for one private call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub api_key: String,
    /// Base64 of the JSON parameter set, nonce included
    pub payload: String,
    /// Lowercase hex HMAC-SHA384 of `payload`
    pub signature: String,
}

impl SignedHeaders {
    pub fn to_header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(API_KEY_HEADER, HeaderValue::from_str(&self.api_key)?);
        headers.insert(PAYLOAD_HEADER, HeaderValue::from_str(&self.payload)?);
        headers.insert(SIGNATURE_HEADER, HeaderValue::from_str(&self.signature)?);
        Ok(headers)
    }
}

/// Signs parameter sets with the account's API secret
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Sign a parameter set with the given nonce.
    ///
    /// The caller's set is left untouched; `nonce` is written into a copy,
    /// appended last unless the set already has one. Identical inputs give
    /// identical headers.
    pub fn sign(&self, params: &ParameterSet, nonce: Nonce) -> Result<SignedHeaders> {
        let mut payload_params = params.clone();
        payload_params.insert("nonce", nonce.to_string());

        let payload = BASE64.encode(payload_params.to_json_bytes()?);
        let signature = self.hmac_hex(payload.as_bytes())?;

        Ok(SignedHeaders {
            api_key: self.credentials.api_key().to_string(),
            payload,
            signature,
        })
    }

    /// HMAC-SHA384 of `message` keyed by the API secret, hex encoded
    pub fn hmac_hex(&self, message: &[u8]) -> Result<String> {
        let mut mac = HmacSha384::new_from_slice(self.credentials.secret_bytes())
            .map_err(|e| BitfinexError::Config(format!("Failed to create HMAC: {e}")))?;
        mac.update(message);
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}
