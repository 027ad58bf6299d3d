//! HTTP client for the GNews v4 API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::{
    query::{HeadlinesQuery, Query, SearchQuery},
    types::ArticleList,
    Error,
};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

/// Request timeout for API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the GNews v4 API.
///
/// Every call performs exactly one request. There is no retry and no caching;
/// two identical calls hit the network twice. The API key is appended to
/// each request and never logged.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
    api_key: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e.to_string())
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::Transport(format!("invalid url: {}", e))
        })?;
        let mut url = query.add_to_url(&url);
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        Ok(url)
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        tracing::debug!("GET {}", path);
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                // the URL carries the api key
                let e = e.without_url();
                tracing::error!("Failed to get resource: {}", e);
                Error::Transport(e.to_string())
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e.to_string())
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::Decode(e.to_string())
        })?;

        Ok(parsed)
    }

    /// Searches articles, returning the upstream body untouched.
    pub async fn search_raw(&self, query: &SearchQuery) -> Result<Value, Error> {
        self.get::<Value, SearchQuery>("/search", query).await
    }

    /// Fetches top headlines, returning the upstream body untouched.
    pub async fn top_headlines_raw(&self, query: &HeadlinesQuery) -> Result<Value, Error> {
        self.get::<Value, HeadlinesQuery>("/top-headlines", query)
            .await
    }

    /// Searches articles matching the given query.
    pub async fn search(&self, query: &SearchQuery) -> Result<ArticleList, Error> {
        self.get::<ArticleList, SearchQuery>("/search", query).await
    }

    /// Fetches top headlines matching the given query.
    pub async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<ArticleList, Error> {
        self.get::<ArticleList, HeadlinesQuery>("/top-headlines", query)
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
