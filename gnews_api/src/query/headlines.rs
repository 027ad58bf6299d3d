use url::Url;

use super::{common::QueryCommon, Query};

/// Query for the `/top-headlines` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct HeadlinesQuery {
    pub common: QueryCommon,
    /// Category name, passed through untouched (`general`, `world`, `business`, ...).
    pub category: Option<String>,
}

impl Query for HeadlinesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(category) = &self.category {
            url.query_pairs_mut().append_pair("category", category);
        };
        self.common.add_to_url(&url)
    }
}

impl HeadlinesQuery {
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{HeadlinesQuery, Query};

    #[test]
    fn test_headlines_query() {
        let url = Url::parse("https://example.com/top-headlines").unwrap();

        insta::assert_snapshot!(HeadlinesQuery::default()
            .with_category("technology")
            .with_lang("en")
            .with_max(10)
            .add_to_url(&url)
            .to_string(), @"https://example.com/top-headlines?category=technology&lang=en&max=10");

        insta::assert_snapshot!(HeadlinesQuery::default()
            .with_country("xx")
            .with_max(10)
            .with_page(1)
            .add_to_url(&url)
            .to_string(), @"https://example.com/top-headlines?country=xx&max=10&page=1");
    }
}
