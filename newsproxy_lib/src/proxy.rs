//! The proxy service: turns request parameters into one upstream call and
//! normalizes the outcome into an [`Envelope`].

use gnews_api::{HeadlinesQuery, Query, SearchQuery};

use crate::envelope::Envelope;
use crate::params::{
    coerce_page, coerce_page_size, text_or_default, DEFAULT_CATEGORY, DEFAULT_LANG,
    DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_TERM,
};
use crate::transport::NewsTransport;

/// Raw query string pairs in request order, as extracted by the router.
pub type RawPairs = [(String, String)];

/// First value given for `key`. Later repeats are ignored.
fn first(pairs: &RawPairs, key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

/// Raw `GET /all-news` parameters. Kept as strings so malformed numbers
/// coerce to defaults instead of failing extraction.
#[derive(Debug, Clone, Default)]
pub struct AllNewsParams {
    pub q: Option<String>,
    pub page_size: Option<String>,
    pub page: Option<String>,
    pub country: Option<String>,
}

impl AllNewsParams {
    pub fn from_pairs(pairs: &RawPairs) -> Self {
        Self {
            q: first(pairs, "q"),
            page_size: first(pairs, "pageSize"),
            page: first(pairs, "page"),
            country: first(pairs, "country"),
        }
    }
}

/// Raw `GET /top-headlines` parameters.
#[derive(Debug, Clone, Default)]
pub struct HeadlinesParams {
    pub category: Option<String>,
    pub page_size: Option<String>,
    pub page: Option<String>,
}

impl HeadlinesParams {
    pub fn from_pairs(pairs: &RawPairs) -> Self {
        Self {
            category: first(pairs, "category"),
            page_size: first(pairs, "pageSize"),
            page: first(pairs, "page"),
        }
    }
}

/// Raw `GET /country/:iso` query parameters.
#[derive(Debug, Clone, Default)]
pub struct CountryParams {
    pub page_size: Option<String>,
    pub page: Option<String>,
}

impl CountryParams {
    pub fn from_pairs(pairs: &RawPairs) -> Self {
        Self {
            page_size: first(pairs, "pageSize"),
            page: first(pairs, "page"),
        }
    }
}

/// Upstream query for `/all-news`: search term defaults to `world`, English
/// only. A non-blank `country` narrows the search.
pub fn search_query(params: &AllNewsParams) -> SearchQuery {
    let query = SearchQuery::default()
        .with_q(&text_or_default(params.q.as_deref(), DEFAULT_SEARCH_TERM))
        .with_lang(DEFAULT_LANG)
        .with_max(coerce_page_size(params.page_size.as_deref(), DEFAULT_PAGE_SIZE))
        .with_page(coerce_page(params.page.as_deref()));
    match params.country.as_deref().map(str::trim) {
        Some(country) if !country.is_empty() => query.with_country(country),
        _ => query,
    }
}

/// Upstream query for `/top-headlines`: category defaults to `general`, English only.
pub fn headlines_query(params: &HeadlinesParams) -> HeadlinesQuery {
    HeadlinesQuery::default()
        .with_category(&text_or_default(
            params.category.as_deref(),
            DEFAULT_CATEGORY,
        ))
        .with_lang(DEFAULT_LANG)
        .with_max(coerce_page_size(params.page_size.as_deref(), DEFAULT_PAGE_SIZE))
        .with_page(coerce_page(params.page.as_deref()))
}

/// Upstream query for `/country/:iso`. The code is forwarded verbatim,
/// without checking it against any list of known countries.
pub fn country_query(country: &str, params: &CountryParams) -> HeadlinesQuery {
    HeadlinesQuery::default()
        .with_country(country)
        .with_max(coerce_page_size(params.page_size.as_deref(), DEFAULT_PAGE_SIZE))
        .with_page(coerce_page(params.page.as_deref()))
}

/// Stateless proxy over a [`NewsTransport`].
///
/// Each operation performs exactly one outbound call and always produces an
/// envelope; nothing is cached between calls.
pub struct NewsProxy<T> {
    transport: T,
}

impl<T: NewsTransport> NewsProxy<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Searches all news for `q`.
    pub async fn search_news(&self, params: &AllNewsParams) -> Envelope {
        let query = search_query(params);
        tracing::debug!("search_news q={:?} max={:?}", query.q, query.common.max);
        Envelope::from_result(self.transport.search(&query).await)
    }

    /// Top headlines in a category.
    pub async fn top_headlines(&self, params: &HeadlinesParams) -> Envelope {
        let query = headlines_query(params);
        tracing::debug!(
            "top_headlines category={:?} max={:?}",
            query.category,
            query.common.max
        );
        Envelope::from_result(self.transport.top_headlines(&query).await)
    }

    /// Top headlines for a country code taken from the request path.
    pub async fn headlines_by_country(&self, country: &str, params: &CountryParams) -> Envelope {
        let query = country_query(country, params);
        tracing::debug!(
            "headlines_by_country country={} max={:?}",
            country,
            query.common.max
        );
        Envelope::from_result(self.transport.top_headlines(&query).await)
    }
}
