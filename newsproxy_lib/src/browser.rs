//! Async driver that runs a [`PageSession`] against an [`ArticleSource`].

use std::sync::Mutex;

use crate::params::NewsQuery;
use crate::session::{FetchTicket, NavigationError, PageSession};
use crate::source::ArticleSource;

/// Paginated news browser.
///
/// The session lock is only held while issuing or resolving a ticket, never
/// across the fetch itself, so overlapping page changes are allowed and the
/// newest ticket wins.
pub struct NewsBrowser<S> {
    source: S,
    session: Mutex<PageSession>,
}

impl<S: ArticleSource> NewsBrowser<S> {
    pub fn new(source: S, query: NewsQuery) -> Self {
        Self {
            source,
            session: Mutex::new(PageSession::new(query)),
        }
    }

    /// (Re)loads the current page. Returns whether the result was applied.
    pub async fn load(&self) -> bool {
        let ticket = self.lock().begin_fetch();
        self.run(ticket).await
    }

    /// Advances one page and loads it.
    pub async fn next(&self) -> Result<bool, NavigationError> {
        let ticket = self.lock().handle_next()?;
        Ok(self.run(ticket).await)
    }

    /// Goes back one page and loads it.
    pub async fn prev(&self) -> Result<bool, NavigationError> {
        let ticket = self.lock().handle_prev()?;
        Ok(self.run(ticket).await)
    }

    /// A copy of the current session state.
    pub fn snapshot(&self) -> PageSession {
        self.lock().clone()
    }

    async fn run(&self, ticket: FetchTicket) -> bool {
        tracing::debug!("Fetching page {}", ticket.page());
        let result = self.source.fetch_page(ticket.query()).await;
        self.lock().resolve(&ticket, result)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PageSession> {
        self.session.lock().unwrap_or_else(|e| e.into_inner())
    }
}
