/*
[INPUT]:  Request mode, endpoint URL and parameter set
[OUTPUT]: Raw body + HTTP status, or a transport error; normalized results
[POS]:    HTTP layer - request execution and public/private dispatch
[UPDATE]: When transport policy or request-mode handling changes
*/

use reqwest::{Method, Url};
use tracing::debug;

use crate::http::{BitfinexClient, PathParams, Result};
use crate::types::{NormalizedResponse, ParameterSet, RawResponse, RequestMode, normalize};

impl BitfinexClient {
    /// Execute one HTTP call.
    ///
    /// Public: GET, parameters go to the query string, no auth headers.
    /// Private: POST with an empty body and the three signed headers.
    ///
    /// Any HTTP status is returned as-is; only failures that leave no
    /// response (connect, timeout, body read) become errors.
    pub async fn execute(
        &self,
        mode: RequestMode,
        url: Url,
        params: &ParameterSet,
    ) -> Result<RawResponse> {
        let builder = match mode {
            RequestMode::Public => {
                let mut url = url;
                // null-only filters flatten to nothing and must not leave a bare `?`
                let pairs = params.to_query_pairs();
                if !pairs.is_empty() {
                    url.query_pairs_mut().extend_pairs(pairs);
                }
                debug!(
                    mode = mode.as_str(),
                    method = %Method::GET,
                    url = %url,
                    "sending request"
                );
                self.http().get(url)
            }
            RequestMode::Private => {
                let signer = self.signer()?;
                let nonce = self.nonces().next_nonce();
                let headers = signer.sign(params, nonce)?.to_header_map()?;
                debug!(
                    mode = mode.as_str(),
                    method = %Method::POST,
                    url = %url,
                    nonce,
                    "sending request"
                );
                self.http().post(url).headers(headers).body(Vec::<u8>::new())
            }
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!(
            mode = mode.as_str(),
            status = status.as_u16(),
            bytes = body.len(),
            "response received"
        );

        Ok(RawResponse { status, body })
    }

    /// Unsigned GET against `<resource>[/<path>]` with optional query filters
    pub async fn call_public(
        &self,
        resource: &str,
        path: impl Into<PathParams>,
        filters: ParameterSet,
    ) -> Result<NormalizedResponse> {
        let url = self.build_url(resource, path)?;
        let raw = self.execute(RequestMode::Public, url, &filters).await?;
        Ok(normalize(raw))
    }

    /// Signed POST against `<resource>[/<path>]`.
    ///
    /// The payload is `request` (the URL path) first, then `fields` in
    /// order, then `nonce`.
    pub async fn call_private(
        &self,
        resource: &str,
        path: impl Into<PathParams>,
        fields: ParameterSet,
    ) -> Result<NormalizedResponse> {
        let url = self.build_url(resource, path)?;
        let request_path = self.request_path(&url);

        let mut params = ParameterSet::new().with("request", request_path.as_str());
        params.extend(fields);
        // a stray "request" in fields must not change the signed path
        params.insert("request", request_path);

        let raw = self.execute(RequestMode::Private, url, &params).await?;
        Ok(normalize(raw))
    }
}
