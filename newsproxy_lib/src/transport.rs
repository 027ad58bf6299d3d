//! The outbound seam of the proxy: one upstream call per operation.

use async_trait::async_trait;
use gnews_api::{Client, Error, HeadlinesQuery, SearchQuery};
use serde_json::Value;

/// Performs the single upstream call behind each proxy operation.
///
/// Implemented for [`gnews_api::Client`]; tests substitute an in-memory
/// transport.
#[async_trait]
pub trait NewsTransport: Send + Sync {
    /// `/search`, returning the upstream body untouched.
    async fn search(&self, query: &SearchQuery) -> Result<Value, Error>;

    /// `/top-headlines`, returning the upstream body untouched.
    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Value, Error>;
}

#[async_trait]
impl NewsTransport for Client {
    async fn search(&self, query: &SearchQuery) -> Result<Value, Error> {
        self.search_raw(query).await
    }

    async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<Value, Error> {
        self.top_headlines_raw(query).await
    }
}
