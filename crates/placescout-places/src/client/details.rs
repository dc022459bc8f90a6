//! Per-listing detail lookup and enrichment for `PlacesClient`.

use placescout_core::{ListingDetail, ListingSummary};

use crate::error::PlacesError;
use crate::normalize::merge_detail;
use crate::types::{DetailsResponse, PlaceDetailsRecord};

use super::{PlacesClient, DETAILS_ENDPOINT};

/// Fields requested from the details endpoint.
pub(crate) const DETAIL_FIELDS: &str = "name,formatted_address,formatted_phone_number,international_phone_number,types,photos,rating,user_ratings_total";

impl PlacesClient {
    /// Looks up the detail record for one place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Status`] if the provider status is not `OK`.
    /// - [`PlacesError::MissingResult`] if an `OK` response has no `result`.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsRecord, PlacesError> {
        let url = self.build_url(
            DETAILS_ENDPOINT,
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;
        let response: DetailsResponse = self
            .request_json(&url, &format!("details(place_id={place_id})"))
            .await?;

        if response.status != "OK" {
            return Err(PlacesError::Status {
                endpoint: "details",
                status: response.status,
                message: response
                    .error_message
                    .unwrap_or_else(|| "no error message".to_owned()),
            });
        }

        response.result.ok_or_else(|| PlacesError::MissingResult {
            place_id: place_id.to_owned(),
        })
    }

    /// Enriches one search hit with its detail record.
    ///
    /// Issues exactly one detail lookup with no retry. On any failure the
    /// listing is built from the summary alone with `phone = None`; the error
    /// is logged, never returned, so a page never loses a row.
    pub async fn enrich(&self, summary: ListingSummary) -> ListingDetail {
        match self.place_details(&summary.external_id).await {
            Ok(record) => merge_detail(summary, record),
            Err(e) => {
                tracing::warn!(
                    place_id = %summary.external_id,
                    error = %e,
                    "detail lookup failed; using summary data"
                );
                ListingDetail::from_summary(summary)
            }
        }
    }
}
