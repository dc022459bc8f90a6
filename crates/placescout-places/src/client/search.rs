//! Text search and page assembly for `PlacesClient`.

use std::future::Future;

use futures::future::join_all;
use placescout_core::{PageToken, SearchQuery};

use crate::error::PlacesError;
use crate::normalize::summaries_from_results;
use crate::page::{PageSource, PageStatus, SearchPage};
use crate::readiness::poll_until_settled;
use crate::types::TextSearchResponse;

use super::{PlacesClient, TEXT_SEARCH_ENDPOINT};

impl PlacesClient {
    /// Issues one text-search request, optionally for a continuation page.
    ///
    /// The response is returned whatever its `status`; classifying it is the
    /// caller's job.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] if the body is not a text-search envelope.
    pub async fn text_search(
        &self,
        query: &str,
        page_token: Option<&PageToken>,
    ) -> Result<TextSearchResponse, PlacesError> {
        let mut params = vec![("query", query)];
        if let Some(token) = page_token {
            params.push(("pagetoken", token.as_str()));
        }
        let url = self.build_url(TEXT_SEARCH_ENDPOINT, &params)?;
        self.request_json(&url, "textsearch").await
    }

    /// Fetches one page of merged listings for `query`.
    ///
    /// With no `token` the first page is requested exactly once. With a
    /// token, the request is repeated under the client's
    /// [`crate::ReadinessPolicy`] until the provider reports `OK` or
    /// `ZERO_RESULTS`; if it never does, the last response is used as-is.
    /// Every hit is then enriched concurrently and the page is returned only
    /// after all enrichments settle.
    ///
    /// Never fails: a failed search call yields an empty page with no
    /// continuation token and [`PageStatus::Failed`].
    pub async fn fetch_page(&self, query: &SearchQuery, token: Option<&PageToken>) -> SearchPage {
        let text_query = query.text_query();

        let outcome = match token {
            None => self.text_search(&text_query, None).await,
            Some(token) => {
                poll_until_settled(
                    self.readiness,
                    || self.text_search(&text_query, Some(token)),
                    |outcome: &Result<TextSearchResponse, PlacesError>| {
                        matches!(outcome, Ok(r) if r.search_status().is_definitive())
                    },
                )
                .await
            }
        };

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(
                    query = %text_query,
                    continuation = token.is_some(),
                    error = %e,
                    "text search failed; returning empty page"
                );
                return SearchPage::failed(e.to_string());
            }
        };

        let search_status = response.search_status();
        if !search_status.is_definitive() {
            tracing::warn!(
                query = %text_query,
                status = %response.status,
                error_message = response.error_message.as_deref().unwrap_or(""),
                "text search returned a non-definitive status"
            );
        }

        let next_token = response
            .next_page_token
            .filter(|t| !t.is_empty())
            .map(PageToken::new);
        let summaries = summaries_from_results(response.results);
        let hits = summaries.len();

        let results = join_all(summaries.into_iter().map(|s| self.enrich(s))).await;

        tracing::debug!(
            query = %text_query,
            hits,
            has_next = next_token.is_some(),
            "page assembled"
        );

        SearchPage {
            results,
            next_token,
            status: PageStatus::from(search_status),
        }
    }
}

impl PageSource for PlacesClient {
    fn fetch_page(
        &self,
        query: &SearchQuery,
        token: Option<&PageToken>,
    ) -> impl Future<Output = SearchPage> + Send {
        PlacesClient::fetch_page(self, query, token)
    }
}
