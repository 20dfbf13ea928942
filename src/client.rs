//! Authenticated business search against the Fusion search endpoint.

use std::fmt;

use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::config::Endpoints;
use crate::encoding::encode_query_component;
use crate::errors::FusionApiError;

/// Client for the Fusion business search API.
///
/// Holds the bearer token obtained by [`crate::connect`] and a dedicated
/// HTTP client. Each search call is an independent single-shot
/// request/response; concurrent calls share no mutable state and resolve in
/// no particular order.
pub struct FusionClient {
    access_token: String,
    endpoints: Endpoints,
    http: reqwest::Client,
}

impl FusionClient {
    /// Create a client from an already-obtained access token, using the
    /// production endpoints.
    ///
    /// Tokens are normally requested through [`crate::connect`] instead.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self::with_endpoints(access_token, Endpoints::default())
    }

    /// Create a client from an access token and custom endpoint locations.
    pub fn with_endpoints(access_token: impl Into<String>, endpoints: Endpoints) -> Self {
        Self::from_parts(access_token.into(), endpoints, reqwest::Client::new())
    }

    pub(crate) fn from_parts(
        access_token: String,
        endpoints: Endpoints,
        http: reqwest::Client,
    ) -> Self {
        Self {
            access_token,
            endpoints,
            http,
        }
    }

    /// The bearer token this client authenticates with.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Search for businesses near a free-text location.
    ///
    /// Both strings are percent-encoded before being embedded as the `term`
    /// and `location` query parameters. On success the decoded response body
    /// is returned opaquely; use [`crate::SearchResponse::from_value`] to
    /// extract the business list.
    ///
    /// # Errors
    ///
    /// - [`FusionApiError::InvalidUrl`] - Request string did not parse as a URL
    /// - [`FusionApiError::Network`] - Transport-layer failure
    /// - [`FusionApiError::EmptyResponse`] - Response carried no body
    /// - [`FusionApiError::InvalidJson`] - Body was not a JSON object
    pub async fn location_search(&self, term: &str, location: &str) -> Result<Value, FusionApiError> {
        let url = self.search_url(term, location)?;
        debug!(endpoint = %self.endpoints.search_url, term, location, "dispatching location search");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| FusionApiError::Network {
                reason: format!("search request failed: {e}"),
            })?;

        let body = read_json_object(response).await?;
        Ok(Value::Object(body))
    }

    /// Build the search request URL for the given term and location.
    ///
    /// Exposed separately so query construction can be checked without a
    /// network round trip.
    ///
    /// # Errors
    ///
    /// - [`FusionApiError::InvalidUrl`] - Assembled string did not parse as a URL
    pub fn search_url(&self, term: &str, location: &str) -> Result<Url, FusionApiError> {
        let request = format!(
            "{}?term={}&location={}",
            self.endpoints.search_url,
            encode_query_component(term),
            encode_query_component(location),
        );
        Url::parse(&request).map_err(|e| FusionApiError::InvalidUrl {
            url: request,
            reason: e.to_string(),
        })
    }
}

impl fmt::Debug for FusionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FusionClient")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

/// Read a response body and decode it as a JSON object.
///
/// Shared by the token and search paths so both report the same failure
/// taxonomy: transport error while reading, empty body, non-JSON body,
/// non-object body.
pub(crate) async fn read_json_object(
    response: reqwest::Response,
) -> Result<Map<String, Value>, FusionApiError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| FusionApiError::Network {
            reason: format!("failed to read response body: {e}"),
        })?;

    if body.is_empty() {
        return Err(FusionApiError::EmptyResponse);
    }
    if !status.is_success() {
        warn!(%status, "server returned an error status");
    }

    let value: Value =
        serde_json::from_slice(&body).map_err(|e| FusionApiError::InvalidJson {
            reason: e.to_string(),
        })?;
    match value {
        Value::Object(object) => Ok(object),
        other => Err(FusionApiError::InvalidJson {
            reason: format!("expected a JSON object, got {other}"),
        }),
    }
}
