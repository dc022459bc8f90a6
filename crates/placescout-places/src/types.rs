//! Provider response types for the text-search, details, and autocomplete
//! endpoints.
//!
//! Every response is wrapped in a `{"status": "...", ...}` envelope. Text
//! search returns `OK` or `ZERO_RESULTS` when it has a definitive answer; a
//! continuation token that has not propagated yet comes back as
//! `INVALID_REQUEST` with an empty `results` array.
//!
//! Search hits are kept as raw JSON values so one malformed hit can be skipped
//! without failing the whole page (see [`crate::normalize`]).

use serde::{Deserialize, Serialize};

/// Classified `status` field of a text-search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Ok,
    ZeroResults,
    /// Anything else: `INVALID_REQUEST` (token not ready), `OVER_QUERY_LIMIT`,
    /// `REQUEST_DENIED`, `UNKNOWN_ERROR`, or an unrecognised value.
    Other(String),
}

impl SearchStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "OK" => SearchStatus::Ok,
            "ZERO_RESULTS" => SearchStatus::ZeroResults,
            other => SearchStatus::Other(other.to_owned()),
        }
    }

    /// `true` when the endpoint gave a final answer for this request.
    #[must_use]
    pub fn is_definitive(&self) -> bool {
        matches!(self, SearchStatus::Ok | SearchStatus::ZeroResults)
    }
}

/// Response from `GET textsearch/json`.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl TextSearchResponse {
    #[must_use]
    pub fn search_status(&self) -> SearchStatus {
        SearchStatus::parse(&self.status)
    }
}

/// A single text-search hit.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct PlacePhoto {
    pub photo_reference: String,
}

/// Response from `GET details/json`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetailsRecord>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// The detail record, limited to the requested field list.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceDetailsRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub international_phone_number: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
}

/// Response from `GET autocomplete/json`.
#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    pub status: String,
    #[serde(default)]
    pub predictions: Vec<PlacePrediction>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacePrediction {
    pub description: String,
    pub place_id: String,
    #[serde(default)]
    pub types: Vec<String>,
}
