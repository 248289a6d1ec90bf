//! Generic REST invoker.
//!
//! One thin layer over reqwest: serialize the body, attach the bearer token
//! on authenticated variants, and sort every failure into the crate's error
//! taxonomy so callers can tell a rejected request from an unreachable
//! server.

use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace, warn};

use nivesh_core::error::{ApiError, TransportError};
use nivesh_core::{ApiUrl, Error};

use crate::endpoints::ErrorBody;

/// Pause before the single transport-level retry.
const RETRY_PAUSE: Duration = Duration::from_millis(200);

/// HTTP client bound to an API base URL.
#[derive(Debug, Clone)]
pub(crate) struct RestClient {
    client: reqwest::Client,
    base: ApiUrl,
}

impl RestClient {
    /// Create a new client for the given base URL.
    pub(crate) fn new(base: ApiUrl) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("nivesh/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { client, base }
    }

    /// Returns the base URL this client is configured for.
    #[allow(dead_code)]
    pub(crate) fn base(&self) -> &ApiUrl {
        &self.base
    }

    /// Unauthenticated POST returning the status and raw body text.
    ///
    /// Used by the login exchange, which classifies the response itself.
    #[instrument(skip(self, body), fields(base = %self.base))]
    pub(crate) async fn post_raw<B>(&self, path: &str, body: &B) -> Result<(u16, String), Error>
    where
        B: Serialize,
    {
        let url = self.base.endpoint_url(path);
        debug!(path, "POST (raw)");

        let response = self.dispatch(self.client.post(&url).json(body)).await?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Transport(transport_error(e)))?;

        trace!(status, "response received");
        Ok((status, text))
    }

    /// Authenticated POST expecting a JSON response body.
    #[instrument(skip(self, body, token), fields(base = %self.base))]
    pub(crate) async fn post_authed<B, R>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint_url(path);
        debug!(path, "POST (authenticated)");

        let response = self
            .dispatch(
                self.client
                    .post(&url)
                    .json(body)
                    .headers(self.auth_headers(token)),
            )
            .await?;

        self.handle_response(response).await
    }

    /// Authenticated POST where only the response status matters.
    #[instrument(skip(self, body, token), fields(base = %self.base))]
    pub(crate) async fn post_authed_status<B>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<u16, Error>
    where
        B: Serialize,
    {
        let url = self.base.endpoint_url(path);
        debug!(path, "POST (authenticated, status only)");

        let response = self
            .dispatch(
                self.client
                    .post(&url)
                    .json(body)
                    .headers(self.auth_headers(token)),
            )
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::Api(parse_error_body(status.as_u16(), body)))
        }
    }

    /// Authenticated GET with query parameters.
    #[instrument(skip(self, query, token), fields(base = %self.base))]
    pub(crate) async fn get_authed<Q, R>(
        &self,
        path: &str,
        query: &Q,
        token: &str,
    ) -> Result<R, Error>
    where
        Q: Serialize,
        R: DeserializeOwned,
    {
        let url = self.base.endpoint_url(path);
        debug!(path, "GET (authenticated)");

        let response = self
            .dispatch(
                self.client
                    .get(&url)
                    .query(query)
                    .headers(self.auth_headers(token)),
            )
            .await?;

        self.handle_response(response).await
    }

    /// Create authorization headers for authenticated requests.
    fn auth_headers(&self, token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let auth_value = format!("Bearer {}", token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value).expect("invalid token characters"),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Send a request, retrying once on a transient transport failure.
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, Error> {
        let retry = request.try_clone();

        match request.send().await {
            Ok(response) => Ok(response),
            Err(err) => {
                let transport = transport_error(err);
                match (transport.is_transient(), retry) {
                    (true, Some(retry)) => {
                        warn!(error = %transport, "transient transport failure, retrying once");
                        tokio::time::sleep(RETRY_PAUSE).await;
                        retry
                            .send()
                            .await
                            .map_err(|e| Error::Transport(transport_error(e)))
                    }
                    _ => Err(Error::Transport(transport)),
                }
            }
        }
    }

    /// Handle a response, parsing the body or surfacing the rejection.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response received");

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(transport_error(e)))?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| {
                Error::Api(ApiError::new(
                    status.as_u16(),
                    None,
                    Some(format!("malformed response body: {}", e)),
                    body,
                ))
            })
        } else {
            Err(Error::Api(parse_error_body(status.as_u16(), body)))
        }
    }
}

/// Parse a rejected response, keeping the raw body for diagnostics.
fn parse_error_body(status: u16, body: String) -> ApiError {
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => ApiError::new(status, parsed.error, parsed.message, body),
        Err(_) => ApiError::new(status, None, None, body),
    }
}

/// Map a reqwest failure onto the transport taxonomy.
fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}
