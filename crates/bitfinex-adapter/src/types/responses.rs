/*
[INPUT]:  Raw response bytes and HTTP status from the transport
[OUTPUT]: NormalizedResponse (decoded body + error flag)
[POS]:    Data layer - single result shape returned by every endpoint
[UPDATE]: When error tagging or body decoding rules change
*/

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::http::{BitfinexError, Result};

/// Body and status as captured by the transport, before decoding
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Decoded response body tagged with the exchange error flag
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResponse {
    pub status: StatusCode,
    pub error: bool,
    /// `Null` when the body was not valid JSON
    pub body: Value,
}

/// Decode a raw body and tag it. Never fails: undecodable bodies become `Null`.
pub fn normalize(raw: RawResponse) -> NormalizedResponse {
    let body = serde_json::from_slice(&raw.body).unwrap_or(Value::Null);
    NormalizedResponse {
        error: raw.status != StatusCode::OK,
        status: raw.status,
        body,
    }
}

impl From<RawResponse> for NormalizedResponse {
    fn from(raw: RawResponse) -> Self {
        normalize(raw)
    }
}

impl NormalizedResponse {
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Single JSON value carrying the error flag.
    ///
    /// Objects get `"error"` merged in as the last key. Any other body is
    /// wrapped as `{"data": <body>, "error": <flag>}`.
    ///
    /// An `"error"` field sent by the exchange is replaced by the flag; read
    /// `body` before calling this to keep it.
    pub fn into_value(self) -> Value {
        match self.body {
            Value::Object(mut map) => {
                map.insert("error".to_string(), Value::Bool(self.error));
                Value::Object(map)
            }
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map.insert("error".to_string(), Value::Bool(self.error));
                Value::Object(map)
            }
        }
    }

    /// Deserialize the body into a typed model
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.body)?)
    }

    /// Turn an error response into `BitfinexError::Api`
    pub fn error_for_status(self) -> Result<Self> {
        if !self.error {
            return Ok(self);
        }
        let message = ["message", "error"]
            .iter()
            .find_map(|key| self.body.get(*key).and_then(Value::as_str))
            .map_or_else(|| self.body.to_string(), str::to_string);
        Err(BitfinexError::api_error(self.status, message))
    }
}
