//! Query parameter coercion and the client-side [`NewsQuery`].
//!
//! The proxy never rejects a request because of a bad parameter: numeric
//! values are read the way a lenient integer parser would, and anything that
//! does not yield a positive number falls back to the documented default.

use gnews_api::{HeadlinesQuery, Query, SearchQuery, MAX_PAGE_SIZE};

use crate::error::NewsProxyError;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_BROWSE_PAGE_SIZE: u32 = 12;
pub const DEFAULT_SEARCH_TERM: &str = "world";
pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_LANG: &str = "en";
pub const DEFAULT_COUNTRY: &str = "us";
pub const MAX_SEARCH_LENGTH: usize = 200;

/// Reads a leading integer: optional whitespace, an optional sign, then
/// digits up to the first non-digit (`"12abc"` is 12, `"abc"` is `None`).
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerces a raw `pageSize` into `1..=100`. Absent, zero, negative and
/// non-numeric values become `default`; values above 100 are clamped.
pub fn coerce_page_size(raw: Option<&str>, default: u32) -> u32 {
    match raw.and_then(parse_leading_int) {
        Some(n) if n > 0 => n.min(i64::from(MAX_PAGE_SIZE)) as u32,
        _ => default,
    }
}

/// Coerces a raw `page` into a positive page number, defaulting to 1.
pub fn coerce_page(raw: Option<&str>) -> u32 {
    match raw.and_then(parse_leading_int) {
        Some(n) if n > 0 => n.min(i64::from(u32::MAX)) as u32,
        _ => 1,
    }
}

/// Returns `raw` unless it is absent or empty, in which case `default`.
pub fn text_or_default(raw: Option<&str>, default: &str) -> String {
    match raw {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => default.to_string(),
    }
}

/// Strip ASCII control characters, trim whitespace, and enforce a byte-length limit.
pub fn validate_search(input: &str) -> Result<String, NewsProxyError> {
    if input.len() > MAX_SEARCH_LENGTH {
        return Err(NewsProxyError::InvalidInput(format!(
            "search term exceeds maximum length of {} bytes",
            MAX_SEARCH_LENGTH
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(NewsProxyError::InvalidInput(
            "search term is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<u32, NewsProxyError> {
    if page < 1 || page > i64::from(u32::MAX) {
        return Err(NewsProxyError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page as u32)
}

/// Validate page size (must be 1..=100).
pub fn validate_page_size(page_size: i64) -> Result<u32, NewsProxyError> {
    if !(1..=i64::from(MAX_PAGE_SIZE)).contains(&page_size) {
        return Err(NewsProxyError::InvalidInput(
            "page_size must be between 1 and 100".to_string(),
        ));
    }
    Ok(page_size as u32)
}

/// Validate a two-letter language or country code, lowercasing it.
pub fn validate_code(input: &str) -> Result<String, NewsProxyError> {
    let lower = input.trim().to_lowercase();
    if lower.len() == 2 && lower.chars().all(|c| c.is_ascii_lowercase()) {
        Ok(lower)
    } else {
        Err(NewsProxyError::InvalidInput(format!(
            "'{}' is not a two-letter code",
            input
        )))
    }
}

/// What a browsing client asks for: one page of search results, or of top
/// headlines when a category is set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NewsQuery {
    pub search_term: String,
    pub page_size: u32,
    pub page: u32,
    pub language: String,
    pub country: String,
    pub category: Option<String>,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            search_term: DEFAULT_SEARCH_TERM.to_string(),
            page_size: DEFAULT_BROWSE_PAGE_SIZE,
            page: 1,
            language: DEFAULT_LANG.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            category: None,
        }
    }
}

impl NewsQuery {
    pub fn with_search_term(mut self, term: &str) -> Self {
        self.search_term = term.to_string();
        self
    }

    /// Sets the page size, coercing out-of-range values like the proxy does.
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = if page_size == 0 {
            DEFAULT_BROWSE_PAGE_SIZE
        } else {
            page_size.min(MAX_PAGE_SIZE)
        };
        self
    }

    /// Sets the page, treating 0 as 1.
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = country.to_string();
        self
    }

    /// Switches to top headlines for `category`. Blank input clears it.
    pub fn with_category(mut self, category: &str) -> Self {
        let category = category.trim();
        self.category = (!category.is_empty()).then(|| category.to_string());
        self
    }

    /// Upstream `/search` query for this page.
    pub fn to_search_query(&self) -> SearchQuery {
        SearchQuery::default()
            .with_q(&self.search_term)
            .with_lang(&self.language)
            .with_country(&self.country)
            .with_max(self.page_size)
            .with_page(self.page)
    }

    /// Upstream `/top-headlines` query for this page; category defaults to
    /// `general`.
    pub fn to_headlines_query(&self) -> HeadlinesQuery {
        HeadlinesQuery::default()
            .with_category(self.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
            .with_lang(&self.language)
            .with_country(&self.country)
            .with_max(self.page_size)
            .with_page(self.page)
    }
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
