//! Bidirectional page navigation over a [`PageSource`].
//!
//! [`Explorer`] owns the current query, the page index, and every
//! continuation token seen so far. Tokens already recorded are reused, never
//! re-derived, so stepping back and forward again lands on the same page
//! sequence. Backward navigation re-fetches; pages are not cached.
//!
//! Navigation methods take `&self` so a new request may be issued while an
//! older one is still in flight. Each request bumps a generation counter
//! before fetching, and a completed page is applied only if its generation is
//! still current; anything older is discarded.

use placescout_core::{rank, CoreError, ListingDetail, PageToken, RankingPolicy, SearchQuery};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::page::{PageSource, PageStatus, SearchPage};

/// Query and token history for the current search round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    query: SearchQuery,
    tokens_by_index: Vec<Option<PageToken>>,
    current_index: usize,
}

impl PaginationState {
    #[must_use]
    pub fn new(query: SearchQuery) -> Self {
        Self {
            query,
            tokens_by_index: Vec::new(),
            current_index: 0,
        }
    }

    #[must_use]
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Recorded tokens; index 0 is always `None` (the first page).
    #[must_use]
    pub fn tokens_by_index(&self) -> &[Option<PageToken>] {
        &self.tokens_by_index
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The token that fetches page `index`; `None` for the first page or an
    /// index not reached yet.
    #[must_use]
    pub fn token_for(&self, index: usize) -> Option<&PageToken> {
        if index == 0 {
            return None;
        }
        self.tokens_by_index.get(index).and_then(Option::as_ref)
    }

    fn record(&mut self, index: usize, token: PageToken) {
        if self.tokens_by_index.len() <= index {
            self.tokens_by_index.resize(index + 1, None);
        }
        self.tokens_by_index[index] = Some(token);
    }
}

/// What a navigation call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The fetched page is now the displayed page.
    Displayed,
    /// A newer navigation started while this one was in flight; its page was
    /// discarded.
    Superseded,
    /// Nothing to navigate to: no search yet, no next page, or already on
    /// the first page.
    Unavailable,
}

/// Snapshot of the session for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExploreView {
    /// Current page, ordered by `ranking`.
    pub results: Vec<ListingDetail>,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    /// 1-based.
    pub page_number: usize,
    pub loading: bool,
    pub ranking: RankingPolicy,
    /// `None` until the first page lands.
    pub status: Option<PageStatus>,
}

#[derive(Debug)]
struct SessionState {
    pagination: Option<PaginationState>,
    results: Vec<ListingDetail>,
    next_token: Option<PageToken>,
    status: Option<PageStatus>,
    loading: bool,
    generation: u64,
    ranking: RankingPolicy,
}

impl SessionState {
    /// Marks a new fetch as the latest and returns its generation. The
    /// displayed page's successor is unknown until the new page lands.
    fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.next_token = None;
        self.generation
    }
}

/// A browsing session over paged search results.
pub struct Explorer<S> {
    source: S,
    state: Mutex<SessionState>,
}

impl<S: PageSource> Explorer<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_ranking(source, RankingPolicy::default())
    }

    #[must_use]
    pub fn with_ranking(source: S, ranking: RankingPolicy) -> Self {
        Self {
            source,
            state: Mutex::new(SessionState {
                pagination: None,
                results: Vec::new(),
                next_token: None,
                status: None,
                loading: false,
                generation: 0,
                ranking,
            }),
        }
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Validates raw search-bar input and starts a new search.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyKeyword`] without touching the session or
    /// the network if `primary_keyword` is empty.
    pub async fn submit(
        &self,
        country: &str,
        city: &str,
        primary_keyword: &str,
        refinement_keyword: Option<&str>,
    ) -> Result<Navigation, CoreError> {
        let query = SearchQuery::new(country, city, primary_keyword, refinement_keyword)?;
        Ok(self.new_search(query).await)
    }

    /// Resets the session to `query` and fetches its first page.
    ///
    /// All tokens recorded for the previous query are dropped.
    pub async fn new_search(&self, query: SearchQuery) -> Navigation {
        let generation = {
            let mut state = self.state.lock().await;
            state.pagination = Some(PaginationState::new(query.clone()));
            state.begin_fetch()
        };
        tracing::debug!(query = %query.text_query(), generation, "starting new search");

        let page = self.source.fetch_page(&query, None).await;
        self.apply(generation, page).await
    }

    /// Advances one page.
    ///
    /// No-op unless the displayed page reported a continuation token. If a
    /// token was already recorded for the next index it is reused; otherwise
    /// the displayed page's token is recorded there.
    pub async fn go_next(&self) -> Navigation {
        let (query, token, generation) = {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;
            let (Some(pagination), Some(next_token)) =
                (state.pagination.as_mut(), state.next_token.as_ref())
            else {
                return Navigation::Unavailable;
            };

            let target = pagination.current_index + 1;
            let token = if let Some(recorded) = pagination.token_for(target) {
                tracing::debug!(index = target, "reusing recorded page token");
                recorded.clone()
            } else {
                pagination.record(target, next_token.clone());
                next_token.clone()
            };
            pagination.current_index = target;
            let query = pagination.query.clone();

            (query, token, state.begin_fetch())
        };

        let page = self.source.fetch_page(&query, Some(&token)).await;
        self.apply(generation, page).await
    }

    /// Steps back one page and re-fetches it with its recorded token
    /// (none for the first page). No-op on the first page.
    pub async fn go_prev(&self) -> Navigation {
        let (query, token, generation) = {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;
            let Some(pagination) = state.pagination.as_mut() else {
                return Navigation::Unavailable;
            };
            if pagination.current_index == 0 {
                return Navigation::Unavailable;
            }

            pagination.current_index -= 1;
            let token = pagination.token_for(pagination.current_index).cloned();
            let query = pagination.query.clone();

            (query, token, state.begin_fetch())
        };

        let page = self.source.fetch_page(&query, token.as_ref()).await;
        self.apply(generation, page).await
    }

    /// Changes the display ordering. Takes effect on the next [`Self::view`].
    pub async fn set_ranking(&self, ranking: RankingPolicy) {
        self.state.lock().await.ranking = ranking;
    }

    /// Current page, ranked, plus navigation flags.
    pub async fn view(&self) -> ExploreView {
        let state = self.state.lock().await;
        let current_index = state
            .pagination
            .as_ref()
            .map_or(0, PaginationState::current_index);

        ExploreView {
            results: rank(&state.results, state.ranking),
            has_next_page: state.next_token.is_some(),
            has_prev_page: current_index > 0,
            page_number: current_index + 1,
            loading: state.loading,
            ranking: state.ranking,
            status: state.status.clone(),
        }
    }

    /// Copy of the current query and token history, if a search has started.
    pub async fn pagination(&self) -> Option<PaginationState> {
        self.state.lock().await.pagination.clone()
    }

    async fn apply(&self, generation: u64, page: SearchPage) -> Navigation {
        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(
                generation,
                latest = state.generation,
                "discarding superseded page"
            );
            return Navigation::Superseded;
        }

        tracing::debug!(
            generation,
            results = page.results.len(),
            has_next = page.next_token.is_some(),
            "page displayed"
        );
        state.results = page.results;
        state.next_token = page.next_token;
        state.status = Some(page.status);
        state.loading = false;
        Navigation::Displayed
    }
}

#[cfg(test)]
#[path = "pagination_test.rs"]
mod tests;
