//! Client-side browsing session: a small state machine over one query.
//!
//! States are `Loading`, `Success` and `Error`. Every page change issues a
//! [`FetchTicket`]; only the resolution carrying the most recent ticket is
//! applied, so a slow response for an abandoned page can never overwrite the
//! page the user is looking at.

use gnews_api::types::{Article, ArticleList, ErrorBody};
use serde_json::Value;
use thiserror::Error;

use crate::pagination::PaginationState;
use crate::params::NewsQuery;
use crate::source::SourceError;

/// Banner text when the payload reports an error without a message.
pub const FALLBACK_ERROR: &str = "An error occurred";
/// Banner text when the fetch itself is rejected.
pub const NETWORK_ERROR: &str = "Failed to fetch news. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Success,
    Error,
}

/// Out-of-range navigation. The session is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("already on the first page")]
    AtFirstPage,
    #[error("already on the last page ({last_page})")]
    AtLastPage { last_page: u64 },
}

/// Identifies the fetch a response belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    query: NewsQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &NewsQuery {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }
}

/// What a payload turned out to contain.
#[derive(Debug, Clone, PartialEq)]
pub enum PageOutcome {
    Articles(ArticleList),
    Rejected(String),
}

/// Classifies an upstream payload: an `articles` collection is a page,
/// anything else is an error whose banner is the payload's message.
pub fn classify_payload(payload: Value) -> PageOutcome {
    if payload.get("articles").is_some_and(Value::is_array) {
        return match serde_json::from_value::<ArticleList>(payload) {
            Ok(list) => PageOutcome::Articles(list),
            Err(e) => {
                tracing::warn!("Malformed article list: {}", e);
                PageOutcome::Rejected(FALLBACK_ERROR.to_string())
            }
        };
    }
    let message = serde_json::from_value::<ErrorBody>(payload)
        .ok()
        .and_then(|body| body.text())
        .unwrap_or_else(|| FALLBACK_ERROR.to_string());
    PageOutcome::Rejected(message)
}

/// Transient state of one browsing client.
#[derive(Debug, Clone)]
pub struct PageSession {
    query: NewsQuery,
    state: LoadState,
    articles: Vec<Article>,
    total_count: u64,
    error: Option<String>,
    generation: u64,
}

impl PageSession {
    /// Starts in `Loading` on the query's page with no data.
    pub fn new(query: NewsQuery) -> Self {
        Self {
            query,
            state: LoadState::Loading,
            articles: Vec::new(),
            total_count: 0,
            error: None,
            generation: 0,
        }
    }

    /// Enters `Loading`, clears the error and issues a ticket for the current
    /// page. Any earlier ticket becomes stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading;
        self.error = None;
        FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
        }
    }

    /// Applies a fetch result. Returns `false` and changes nothing when the
    /// ticket is stale.
    ///
    /// On an error payload the previous articles and total are kept and only
    /// the banner changes.
    pub fn resolve(&mut self, ticket: &FetchTicket, result: Result<Value, SourceError>) -> bool {
        if ticket.generation != self.generation || ticket.query != self.query {
            tracing::debug!(
                "Discarding stale response for page {} (generation {} != {})",
                ticket.page(),
                ticket.generation,
                self.generation
            );
            return false;
        }

        match result.map(classify_payload) {
            Ok(PageOutcome::Articles(list)) => {
                self.articles = list.articles;
                self.total_count = list.total_articles;
                self.state = LoadState::Success;
            }
            Ok(PageOutcome::Rejected(message)) => {
                self.error = Some(message);
                self.state = LoadState::Error;
            }
            Err(e) => {
                tracing::error!("Fetch error: {}", e);
                self.error = Some(NETWORK_ERROR.to_string());
                self.state = LoadState::Error;
            }
        }
        true
    }

    /// Moves to the next page and issues its ticket. Rejected unless the
    /// next control would be enabled.
    pub fn handle_next(&mut self) -> Result<FetchTicket, NavigationError> {
        let pagination = self.pagination();
        if !pagination.next_enabled() {
            return Err(NavigationError::AtLastPage {
                last_page: pagination.last_page(),
            });
        }
        self.query.page += 1;
        Ok(self.begin_fetch())
    }

    /// Moves to the previous page and issues its ticket. Rejected on page 1.
    pub fn handle_prev(&mut self) -> Result<FetchTicket, NavigationError> {
        if !self.pagination().prev_enabled() {
            return Err(NavigationError::AtFirstPage);
        }
        self.query.page -= 1;
        Ok(self.begin_fetch())
    }

    pub fn pagination(&self) -> PaginationState {
        PaginationState::new(self.query.page, self.query.page_size, self.total_count)
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.query.page
    }

    pub fn query(&self) -> &NewsQuery {
        &self.query
    }
}
