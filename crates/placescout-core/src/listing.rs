//! Listing records produced by the two-stage search.

use serde::{Deserialize, Serialize};

/// Opaque continuation token issued by the provider's text-search endpoint.
///
/// Only meaningful for the query that produced it, and only after a short
/// propagation delay from issuance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageToken(String);

impl PageToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A coarse hit returned by the search stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub external_id: String,
    pub name: String,
    pub address: String,
    pub types: Vec<String>,
    pub coarse_photo_ref: Option<String>,
    pub coarse_rating: Option<f64>,
    pub coarse_rating_count: Option<u32>,
}

/// A display-ready listing: detail-stage values merged over the summary.
///
/// Every field prefers the detail-stage value and falls back to the summary
/// value when the detail record lacks it or the detail lookup failed.
/// `phone` has no summary-stage equivalent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingDetail {
    pub external_id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub types: Vec<String>,
    pub photo_ref: Option<String>,
    pub rating: Option<f64>,
    pub rating_count: Option<u32>,
}

impl ListingDetail {
    /// Builds a degraded listing from summary data alone (`phone` is `None`).
    #[must_use]
    pub fn from_summary(summary: ListingSummary) -> Self {
        Self {
            external_id: summary.external_id,
            name: summary.name,
            address: summary.address,
            phone: None,
            types: summary.types,
            photo_ref: summary.coarse_photo_ref,
            rating: summary.coarse_rating,
            rating_count: summary.coarse_rating_count,
        }
    }

    /// The first type, humanised for display: `"coffee_shop"` → `"coffee shop"`.
    #[must_use]
    pub fn primary_type_label(&self) -> Option<String> {
        self.types.first().map(|t| t.replace('_', " "))
    }
}
