//! Caller-supplied configuration: API credentials and endpoint locations.

use std::env;
use std::fmt;

/// Production authorization endpoint for the client-credentials exchange.
pub const AUTH_URL: &str = "https://api.yelp.com/oauth2/token";

/// Production business search endpoint.
pub const SEARCH_URL: &str = "https://api.yelp.com/v3/businesses/search";

/// Application identifier and secret for the client-credentials grant.
///
/// Supplied by the caller and held immutably; never persisted by this crate.
/// The secret is redacted from `Debug` output so credentials can appear in
/// logs without leaking.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Create credentials from an explicit identifier and secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read credentials from the `YELP_CLIENT_ID` and `YELP_CLIENT_SECRET`
    /// environment variables.
    ///
    /// Returns `None` unless both variables are set.
    pub fn from_env() -> Option<Self> {
        let client_id = env::var("YELP_CLIENT_ID").ok()?;
        let client_secret = env::var("YELP_CLIENT_SECRET").ok()?;
        Some(Self {
            client_id,
            client_secret,
        })
    }

    /// The application identifier.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Locations of the authorization and search endpoints.
///
/// Defaults to the fixed production URLs; overridable so tests can point the
/// clients at a local mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Token exchange URL
    pub auth_url: String,
    /// Business search URL
    pub search_url: String,
}

impl Endpoints {
    /// Create endpoints with custom locations.
    pub fn new(auth_url: impl Into<String>, search_url: impl Into<String>) -> Self {
        Self {
            auth_url: auth_url.into(),
            search_url: search_url.into(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_url: AUTH_URL.to_string(),
            search_url: SEARCH_URL.to_string(),
        }
    }
}
