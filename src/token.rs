//! OAuth2 client-credentials token exchange.

use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::client::{FusionClient, read_json_object};
use crate::config::{Credentials, Endpoints};
use crate::encoding::encode_query_component;
use crate::errors::FusionApiError;

/// Exchange credentials for an access token and return a ready client.
///
/// Issues a single POST to the production authorization endpoint with
/// `grant_type=client_credentials`. No state is held until a token is
/// obtained; on success the returned [`FusionClient`] fully owns the token.
///
/// # Errors
///
/// - [`FusionApiError::InvalidUrl`] - Request string did not parse as a URL
/// - [`FusionApiError::Network`] - Transport-layer failure
/// - [`FusionApiError::EmptyResponse`] - Response carried no body
/// - [`FusionApiError::InvalidJson`] - Body was not a JSON object
/// - [`FusionApiError::MissingField`] - Decoded body lacked `access_token`
pub async fn connect(credentials: &Credentials) -> Result<FusionClient, FusionApiError> {
    connect_with_endpoints(credentials, Endpoints::default()).await
}

/// [`connect`] against custom endpoint locations.
///
/// The endpoints are carried into the returned client, so a search issued
/// afterwards talks to the same host that granted the token.
///
/// # Errors
///
/// Same failure modes as [`connect`].
pub async fn connect_with_endpoints(
    credentials: &Credentials,
    endpoints: Endpoints,
) -> Result<FusionClient, FusionApiError> {
    let url = auth_url(&endpoints, credentials)?;
    debug!(endpoint = %endpoints.auth_url, client_id = credentials.client_id(), "requesting access token");

    let http = reqwest::Client::new();
    let response = http
        .post(url)
        .send()
        .await
        .map_err(|e| FusionApiError::Network {
            reason: format!("token request failed: {e}"),
        })?;

    let body = read_json_object(response).await?;
    let access_token = body
        .get("access_token")
        .and_then(Value::as_str)
        .ok_or(FusionApiError::MissingField {
            field: "access_token",
        })?;

    Ok(FusionClient::from_parts(
        access_token.to_owned(),
        endpoints,
        http,
    ))
}

/// Build the token request URL with form-encoded grant parameters.
fn auth_url(endpoints: &Endpoints, credentials: &Credentials) -> Result<Url, FusionApiError> {
    let request = format!(
        "{}?grant_type=client_credentials&client_id={}&client_secret={}",
        endpoints.auth_url,
        encode_query_component(credentials.client_id()),
        encode_query_component(credentials.client_secret()),
    );
    Url::parse(&request).map_err(|e| FusionApiError::InvalidUrl {
        url: request,
        reason: e.to_string(),
    })
}
