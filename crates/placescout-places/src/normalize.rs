//! Conversion of provider records into listing domain types.

use placescout_core::{ListingDetail, ListingSummary};

use crate::types::{PlaceDetailsRecord, PlacePhoto, PlaceResult};

/// Parses raw text-search hits into summaries, preserving provider order.
///
/// A hit that does not match [`PlaceResult`] (e.g. no `place_id`) is logged
/// and skipped; it cannot be enriched or displayed.
#[must_use]
pub fn summaries_from_results(results: Vec<serde_json::Value>) -> Vec<ListingSummary> {
    results
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| {
            serde_json::from_value::<PlaceResult>(value)
                .map_err(|e| {
                    tracing::warn!(index, error = %e, "skipping malformed text-search hit");
                })
                .ok()
        })
        .map(summary_from_result)
        .collect()
}

/// Maps one text-search hit to a [`ListingSummary`].
#[must_use]
pub fn summary_from_result(result: PlaceResult) -> ListingSummary {
    ListingSummary {
        external_id: result.place_id,
        name: result.name.unwrap_or_default(),
        address: result.formatted_address.unwrap_or_default(),
        types: result.types,
        coarse_photo_ref: first_photo_ref(result.photos),
        coarse_rating: result.rating,
        coarse_rating_count: result.user_ratings_total,
    }
}

/// Merges a detail record over its summary.
///
/// Each field takes the detail value when present and non-empty, otherwise
/// the summary value. `phone` takes the local-format number, then the
/// international one; it has no summary fallback.
#[must_use]
pub fn merge_detail(summary: ListingSummary, record: PlaceDetailsRecord) -> ListingDetail {
    let types = if record.types.is_empty() {
        summary.types
    } else {
        record.types
    };

    ListingDetail {
        external_id: summary.external_id,
        name: non_empty(record.name).unwrap_or(summary.name),
        address: non_empty(record.formatted_address).unwrap_or(summary.address),
        phone: non_empty(record.formatted_phone_number)
            .or_else(|| non_empty(record.international_phone_number)),
        types,
        photo_ref: first_photo_ref(record.photos).or(summary.coarse_photo_ref),
        rating: record.rating.or(summary.coarse_rating),
        rating_count: record.user_ratings_total.or(summary.coarse_rating_count),
    }
}

fn first_photo_ref(photos: Vec<PlacePhoto>) -> Option<String> {
    photos
        .into_iter()
        .next()
        .map(|p| p.photo_reference)
        .filter(|r| !r.is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
