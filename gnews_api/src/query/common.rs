//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use url::Url;

/// Largest `max` value the API accepts per request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination, language and country filtering.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of articles per page. Values above [`MAX_PAGE_SIZE`]
    /// are clamped.
    fn with_max(mut self, max: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().max = Some(max.min(MAX_PAGE_SIZE));
        self
    }

    /// Restricts results to a two-letter language code (e.g. `en`).
    fn with_lang(mut self, lang: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().lang = Some(lang.to_string());
        self
    }

    /// Restricts results to a two-letter country code (e.g. `us`).
    fn with_country(mut self, country: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().country = Some(country.to_string());
        self
    }
}

/// Fields shared by all query types. Unset fields are left to the API default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct QueryCommon {
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Articles per page, sent as `max`.
    pub max: Option<u32>,
    /// Language code, sent as `lang`.
    pub lang: Option<String>,
    /// Country code, sent verbatim as `country`.
    pub country: Option<String>,
}

impl QueryCommon {
    /// Appends the common filter and pagination parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(lang) = &self.lang {
            url.query_pairs_mut().append_pair("lang", lang);
        };
        if let Some(country) = &self.country {
            url.query_pairs_mut().append_pair("country", country);
        };
        if let Some(max) = self.max {
            url.query_pairs_mut().append_pair("max", &max.to_string());
        };
        if let Some(page) = self.page {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        };
        url
    }
}
