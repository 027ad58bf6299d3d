//! Article types returned by the `/search` and `/top-headlines` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of articles plus the total number of matches upstream.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleList {
    /// Total matching articles across all pages. Missing counts decode as 0.
    #[serde(default)]
    pub total_articles: u64,
    pub articles: Vec<Article>,
}

/// A single news article. Every field is optional because the API omits
/// fields freely.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,

    /// Lead image URL.
    #[serde(rename = "image")]
    pub image_url: Option<String>,

    /// RFC 3339 timestamp as sent by the API. See [`Article::published_date`].
    pub published_at: Option<String>,

    pub source: Option<Source>,
}

/// Publisher of an article.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Source {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl Article {
    /// Name of the publishing source, if present.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }

    /// Parses `published_at`. Returns `None` when missing or malformed.
    pub fn published_date(&self) -> Option<DateTime<Utc>> {
        let raw = self.published_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|d| d.with_timezone(&Utc))
    }
}
