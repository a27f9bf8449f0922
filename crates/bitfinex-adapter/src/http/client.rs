/*
[INPUT]:  HTTP configuration (base URL, API version, timeouts) and credentials
[OUTPUT]: Configured reqwest client and endpoint URLs
[POS]:    HTTP layer - core client implementation and URL builder
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::auth::{Credentials, NonceGenerator};
use crate::http::{BitfinexError, RequestSigner, Result};

/// Base URL for the Bitfinex API
pub const DEFAULT_BASE_URL: &str = "https://api.bitfinex.com";
pub const DEFAULT_API_VERSION: &str = "v1";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("bitfinex-adapter/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_version(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Trailing path segment(s) after the resource name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PathParams {
    #[default]
    None,
    Single(String),
    Many(Vec<String>),
}

impl From<()> for PathParams {
    fn from(_: ()) -> Self {
        PathParams::None
    }
}

impl From<&str> for PathParams {
    fn from(segment: &str) -> Self {
        PathParams::Single(segment.to_string())
    }
}

impl From<String> for PathParams {
    fn from(segment: String) -> Self {
        PathParams::Single(segment)
    }
}

impl From<Vec<String>> for PathParams {
    fn from(segments: Vec<String>) -> Self {
        PathParams::Many(segments)
    }
}

impl From<&[&str]> for PathParams {
    fn from(segments: &[&str]) -> Self {
        PathParams::Many(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PathParams {
    fn from(segments: [&str; N]) -> Self {
        PathParams::Many(segments.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<T: Into<PathParams>> From<Option<T>> for PathParams {
    fn from(value: Option<T>) -> Self {
        value.map_or(PathParams::None, Into::into)
    }
}

/// Main HTTP client for the Bitfinex v1 API.
///
/// Clones share the HTTP connection pool and the nonce generator.
#[derive(Debug, Clone)]
pub struct BitfinexClient {
    http_client: Client,
    base_url: String,
    version: String,
    signer: Option<RequestSigner>,
    nonces: Arc<NonceGenerator>,
}

impl BitfinexClient {
    /// Client for public endpoints only
    pub fn public() -> Result<Self> {
        Self::build(ClientConfig::default(), None)
    }

    /// Client with credentials and default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::build(ClientConfig::default(), Some(credentials))
    }

    /// Client with credentials and custom configuration
    pub fn with_config(config: ClientConfig, credentials: Credentials) -> Result<Self> {
        Self::build(config, Some(credentials))
    }

    /// Build from configuration; `credentials` may be absent for public-only use
    pub fn build(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| BitfinexError::Config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;
        if config.version.trim().is_empty() {
            return Err(BitfinexError::Config("API version is empty".to_string()));
        }

        Ok(Self {
            http_client,
            base_url,
            version: config.version,
            signer: credentials.map(RequestSigner::new),
            nonces: Arc::new(NonceGenerator::new()),
        })
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.signer.as_ref().map(RequestSigner::credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn nonces(&self) -> &NonceGenerator {
        &self.nonces
    }

    /// Compose `<base>/<version>/<resource>[/<path>]`.
    ///
    /// `resource` is not validated; a malformed value only fails if the
    /// result cannot be parsed as a URL.
    pub fn build_url(&self, resource: &str, path: impl Into<PathParams>) -> Result<Url> {
        let suffix = match path.into() {
            PathParams::None => String::new(),
            PathParams::Single(segment) => format!("/{segment}"),
            PathParams::Many(segments) => format!("/{}", segments.join("/")),
        };
        let url = format!("{}/{}/{}{}", self.base_url, self.version, resource, suffix);
        Ok(Url::parse(&url)?)
    }

    /// Path of `url` relative to the configured base, e.g. `/v1/balances`
    pub fn request_path(&self, url: &Url) -> String {
        url.as_str()
            .strip_prefix(self.base_url.as_str())
            .map_or_else(|| url.path().to_string(), str::to_string)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http_client
    }

    pub(crate) fn signer(&self) -> Result<&RequestSigner> {
        self.signer.as_ref().ok_or(BitfinexError::MissingCredentials)
    }
}
