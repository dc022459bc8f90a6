//! One fetched page of merged listings and the seam the pagination
//! controller fetches through.

use std::future::Future;

use placescout_core::{ListingDetail, PageToken, SearchQuery};
use serde::Serialize;

use crate::types::SearchStatus;

/// How the provider answered the request behind a page.
///
/// An empty page looks the same to the renderer whatever the cause; this
/// lets a caller tell a true zero-result search from an upstream failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageStatus {
    Ok,
    ZeroResults,
    /// The provider answered with a non-definitive status (for a
    /// continuation page, after the readiness budget was exhausted).
    Unsettled { status: String },
    /// The text-search call itself failed (network, HTTP status, body).
    Failed { reason: String },
}

impl From<SearchStatus> for PageStatus {
    fn from(status: SearchStatus) -> Self {
        match status {
            SearchStatus::Ok => PageStatus::Ok,
            SearchStatus::ZeroResults => PageStatus::ZeroResults,
            SearchStatus::Other(status) => PageStatus::Unsettled { status },
        }
    }
}

/// Result of one page fetch. Never partial: every hit on the page has been
/// enriched or degraded before this is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage {
    pub results: Vec<ListingDetail>,
    pub next_token: Option<PageToken>,
    pub status: PageStatus,
}

impl SearchPage {
    /// The degraded page returned when the search call fails.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            next_token: None,
            status: PageStatus::Failed {
                reason: reason.into(),
            },
        }
    }
}

/// Anything that can produce a page for a query and optional token.
///
/// Implementations must not fail: errors are folded into the returned page
/// (see [`SearchPage::failed`]).
pub trait PageSource {
    fn fetch_page(
        &self,
        query: &SearchQuery,
        token: Option<&PageToken>,
    ) -> impl Future<Output = SearchPage> + Send;
}
