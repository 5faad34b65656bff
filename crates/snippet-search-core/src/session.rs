//! Interactive search session.
//!
//! A [`SearchSession`] owns the current query and the result container for one
//! page view. Every [`set_query`](SearchSession::set_query) call forwards the
//! query to the [`StateStore`], re-runs the filter and replaces the previous
//! result. The computation is synchronous, so nothing is ever in flight
//! between two queries.
//!
//! Store notifications are fire-and-forget: failures are logged and the
//! session carries on with its in-memory query.

use std::sync::Arc;

use crate::models::Snippet;
use crate::search::filter_indices;
use crate::state::StateStore;

/// Title recorded when the search page mounts.
pub const SEARCH_PAGE_TITLE: &str = "Search";
/// URL recorded when the search page mounts.
pub const SEARCH_PAGE_URL: &str = "/search";

/// What the search page should display.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView<'a> {
    /// Nothing typed yet. A whitespace-only query is not empty and lists
    /// every snippet under [`SearchView::Results`].
    Prompt,
    /// The query matched nothing.
    NoResults { query: &'a str },
    /// Matching snippets, in input order.
    Results(Vec<&'a Snippet>),
}

impl SearchView<'_> {
    /// Short machine-readable name of the view.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchView::Prompt => "prompt",
            SearchView::NoResults { .. } => "no_results",
            SearchView::Results(_) => "results",
        }
    }

    /// The line shown above (or instead of) the result cards.
    pub fn message(&self) -> String {
        match self {
            SearchView::Prompt => "Start typing a keyword to see matching snippets.".to_string(),
            SearchView::NoResults { query } => {
                format!("We couldn't find any results for the keyword {}.", query)
            }
            SearchView::Results(_) => "Click on a snippet's name to view its code.".to_string(),
        }
    }
}

pub struct SearchSession {
    snippets: Arc<[Snippet]>,
    store: Arc<dyn StateStore>,
    query: String,
    results: Vec<usize>,
}

impl SearchSession {
    /// Create a session seeded with the query persisted in `store`.
    pub fn new(snippets: Arc<[Snippet]>, store: Arc<dyn StateStore>) -> Self {
        let query = match store.snapshot() {
            Ok(state) => state.search_query,
            Err(e) => {
                tracing::warn!("could not read app state: {:#}", e);
                String::new()
            }
        };
        let results = filter_indices(&snippets, &query);
        Self {
            snippets,
            store,
            query,
            results,
        }
    }

    /// Record the navigation event for the search page.
    pub fn mount(&self) {
        if let Err(e) = self.store.push_new_page(SEARCH_PAGE_TITLE, SEARCH_PAGE_URL) {
            tracing::warn!("could not record page view: {:#}", e);
        }
    }

    /// Replace the query, persist it and recompute the results.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        if let Err(e) = self.store.push_new_query(query) {
            tracing::warn!("could not persist search query: {:#}", e);
        }
        self.results = filter_indices(&self.snippets, &self.query);
        tracing::debug!(query = %self.query, matches = self.results.len(), "search updated");
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current results, in input order.
    pub fn results(&self) -> Vec<&Snippet> {
        self.results.iter().map(|&i| &self.snippets[i]).collect()
    }

    pub fn view(&self) -> SearchView<'_> {
        if self.query.is_empty() {
            SearchView::Prompt
        } else if self.results.is_empty() {
            SearchView::NoResults { query: &self.query }
        } else {
            SearchView::Results(self.results())
        }
    }
}
