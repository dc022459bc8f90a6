//! Display ordering for a page of merged listings.
//!
//! Ranking is a pure function of one page. Every policy is a stable sort, so
//! entries that compare equal keep the provider's order, and the output is
//! always a permutation of the input.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::listing::ListingDetail;

/// Inclusive digit-count range of a "mobile-shaped" phone number.
const MOBILE_DIGITS_MIN: usize = 9;
const MOBILE_DIGITS_MAX: usize = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingPolicy {
    /// Listings with a phone first, mobile-shaped numbers ahead of others,
    /// then case-insensitive name.
    #[default]
    PhoneFirst,
    /// Listings with a phone first, then higher rating, then name.
    PhoneAndRating,
    /// Higher rating first; ties keep provider order.
    RatingOnly,
    /// Case-insensitive name ascending.
    Alphabetical,
    /// Provider order.
    None,
}

impl RankingPolicy {
    pub const ALL: [RankingPolicy; 5] = [
        RankingPolicy::PhoneFirst,
        RankingPolicy::PhoneAndRating,
        RankingPolicy::RatingOnly,
        RankingPolicy::Alphabetical,
        RankingPolicy::None,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RankingPolicy::PhoneFirst => "phone_first",
            RankingPolicy::PhoneAndRating => "phone_and_rating",
            RankingPolicy::RatingOnly => "rating_only",
            RankingPolicy::Alphabetical => "alphabetical",
            RankingPolicy::None => "none",
        }
    }
}

impl fmt::Display for RankingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingPolicy {
    type Err = CoreError;

    /// Accepts the snake_case names, with `-` allowed in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownRankingPolicy(s.to_owned()))
    }
}

/// Returns `true` when `phone` has between 9 and 15 digits once every
/// non-digit character is stripped. A ranking heuristic, not validation.
#[must_use]
pub fn is_mobile_like_phone(phone: Option<&str>) -> bool {
    let Some(phone) = phone else {
        return false;
    };
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    (MOBILE_DIGITS_MIN..=MOBILE_DIGITS_MAX).contains(&digits)
}

/// Reorders `results` under `policy`. Never drops or duplicates entries.
#[must_use]
pub fn rank(results: &[ListingDetail], policy: RankingPolicy) -> Vec<ListingDetail> {
    let mut ranked = results.to_vec();
    match policy {
        RankingPolicy::PhoneFirst => ranked.sort_by(|a, b| {
            has_phone(b)
                .cmp(&has_phone(a))
                .then_with(|| mobile_rank(a, b))
                .then_with(|| compare_names(a, b))
        }),
        RankingPolicy::PhoneAndRating => ranked.sort_by(|a, b| {
            has_phone(b)
                .cmp(&has_phone(a))
                .then_with(|| compare_ratings_desc(a, b))
                .then_with(|| compare_names(a, b))
        }),
        RankingPolicy::RatingOnly => ranked.sort_by(compare_ratings_desc),
        RankingPolicy::Alphabetical => ranked.sort_by(compare_names),
        RankingPolicy::None => {}
    }
    ranked
}

fn has_phone(listing: &ListingDetail) -> bool {
    listing.phone.as_deref().is_some_and(|p| !p.is_empty())
}

/// Only distinguishes listings that both carry a phone.
fn mobile_rank(a: &ListingDetail, b: &ListingDetail) -> Ordering {
    if !(has_phone(a) && has_phone(b)) {
        return Ordering::Equal;
    }
    let a_mobile = is_mobile_like_phone(a.phone.as_deref());
    let b_mobile = is_mobile_like_phone(b.phone.as_deref());
    b_mobile.cmp(&a_mobile)
}

fn compare_ratings_desc(a: &ListingDetail, b: &ListingDetail) -> Ordering {
    let a_rating = a.rating.unwrap_or(0.0);
    let b_rating = b.rating.unwrap_or(0.0);
    b_rating.total_cmp(&a_rating)
}

fn compare_names(a: &ListingDetail, b: &ListingDetail) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

#[cfg(test)]
#[path = "rank_test.rs"]
mod tests;
