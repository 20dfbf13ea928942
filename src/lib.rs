//! Yelp Fusion API client
//!
//! Authenticates against the Yelp Fusion business-listings API using the
//! OAuth2 client-credentials grant, then performs location-based business
//! searches with the obtained bearer token.
//!
//! Usage is strictly sequential: [`connect`] exchanges credentials for an
//! access token and returns a ready [`FusionClient`]; the client then issues
//! single-shot searches. There is no token refresh, no retry, and no caching
//! of results.

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]

pub mod client;
pub mod config;
pub mod encoding;
pub mod errors;
pub mod token;
pub mod types;

// Re-export main types
pub use client::FusionClient;
pub use config::{Credentials, Endpoints};
pub use errors::FusionApiError;
pub use token::{connect, connect_with_endpoints};
pub use types::{Business, SearchResponse};

/// Convenience type alias for Results with FusionApiError.
pub type Result<T> = std::result::Result<T, FusionApiError>;
