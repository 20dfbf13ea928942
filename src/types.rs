//! Typed view of the search response payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::FusionApiError;

/// Decoded search response: the list of matched businesses.
///
/// The presence of the `businesses` array is the one shape invariant this
/// crate enforces on successful search payloads; everything else in the
/// response stays available through the raw [`Value`] returned by
/// [`crate::FusionClient::location_search`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Businesses matched by the search, in server order
    pub businesses: Vec<Business>,
}

/// A single matched business record.
///
/// The remote service treats every field as optional; unknown fields are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    /// Display name of the business
    pub name: Option<String>,
    /// Phone number in the service's canonical format
    pub phone: Option<String>,
}

impl SearchResponse {
    /// Extract the business list from a decoded search payload.
    ///
    /// # Errors
    ///
    /// - [`FusionApiError::MissingField`] - `businesses` absent or not an array
    /// - [`FusionApiError::InvalidJson`] - A list entry is not a business object
    pub fn from_value(value: &Value) -> Result<Self, FusionApiError> {
        let entries = value
            .get("businesses")
            .and_then(Value::as_array)
            .ok_or(FusionApiError::MissingField {
                field: "businesses",
            })?;

        let businesses = entries
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()))
            .collect::<Result<Vec<Business>, _>>()
            .map_err(|e| FusionApiError::InvalidJson {
                reason: e.to_string(),
            })?;

        Ok(Self { businesses })
    }
}
