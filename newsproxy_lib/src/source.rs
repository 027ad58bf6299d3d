//! Where the browsing client gets its pages from: the proxy, or the upstream
//! API directly.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::envelope::Envelope;
use crate::params::NewsQuery;

/// Request timeout for proxy calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The fetch itself was rejected: no usable body came back.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Unreadable response: {0}")]
    Body(String),
}

impl From<gnews_api::Error> for SourceError {
    fn from(e: gnews_api::Error) -> Self {
        match e {
            gnews_api::Error::Transport(msg) => Self::Transport(msg),
            gnews_api::Error::HttpStatus { status, .. } => Self::Status(status),
            gnews_api::Error::Decode(msg) => Self::Body(msg),
        }
    }
}

/// Fetches one page of search results as a raw payload.
///
/// A returned payload may still carry an upstream error indicator instead of
/// articles; classifying it is the session's job.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_page(&self, query: &NewsQuery) -> Result<Value, SourceError>;
}

/// Reads pages through the proxy and unwraps the envelope: `GET /all-news`
/// for searches, `GET /top-headlines` when the query has a category. The
/// proxy fixes the language to English.
pub struct ProxySource {
    http: reqwest::Client,
    base_url: String,
}

impl ProxySource {
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Route and query pairs for `query` on the proxy.
    fn request_for(&self, query: &NewsQuery) -> (String, Vec<(&'static str, String)>) {
        let mut pairs = vec![
            ("pageSize", query.page_size.to_string()),
            ("page", query.page.to_string()),
        ];
        match &query.category {
            Some(category) => {
                pairs.push(("category", category.clone()));
                (format!("{}/top-headlines", self.base_url), pairs)
            }
            None => {
                pairs.push(("q", query.search_term.clone()));
                pairs.push(("country", query.country.clone()));
                (format!("{}/all-news", self.base_url), pairs)
            }
        }
    }
}

#[async_trait]
impl ArticleSource for ProxySource {
    async fn fetch_page(&self, query: &NewsQuery) -> Result<Value, SourceError> {
        let (url, pairs) = self.request_for(query);
        let resp = self
            .http
            .get(&url)
            .query(&pairs)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Fetch error: {}", e);
                SourceError::Transport(e.to_string())
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!("Proxy answered {}", status);
            return Err(SourceError::Status(status.as_u16()));
        }

        let envelope: Envelope = resp.json().await.map_err(|e| {
            tracing::error!("Failed to parse envelope: {}", e);
            SourceError::Body(e.to_string())
        })?;
        let status = envelope.status();
        envelope.into_data().ok_or(SourceError::Status(status))
    }
}

/// Reads pages straight from the upstream API with a server-side key.
pub struct DirectSource {
    client: gnews_api::Client,
}

impl DirectSource {
    pub fn new(client: gnews_api::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArticleSource for DirectSource {
    async fn fetch_page(&self, query: &NewsQuery) -> Result<Value, SourceError> {
        let payload = match query.category {
            Some(_) => {
                self.client
                    .top_headlines_raw(&query.to_headlines_query())
                    .await?
            }
            None => self.client.search_raw(&query.to_search_query()).await?,
        };
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_goes_to_all_news_with_country() {
        let source = ProxySource::new("http://localhost:3000/").unwrap();
        let (url, pairs) = source.request_for(&NewsQuery::default().with_country("gb"));
        assert_eq!(url, "http://localhost:3000/all-news");
        assert!(pairs.contains(&("q", "world".to_string())));
        assert!(pairs.contains(&("country", "gb".to_string())));
        assert!(pairs.contains(&("pageSize", "12".to_string())));
    }

    #[test]
    fn category_goes_to_top_headlines() {
        let source = ProxySource::new("http://localhost:3000").unwrap();
        let (url, pairs) = source.request_for(&NewsQuery::default().with_category("sports"));
        assert_eq!(url, "http://localhost:3000/top-headlines");
        assert!(pairs.contains(&("category", "sports".to_string())));
        assert!(!pairs.iter().any(|(k, _)| *k == "q"));
    }
}
