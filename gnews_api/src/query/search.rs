use url::Url;

use super::{common::QueryCommon, Query};

/// Query for the `/search` endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchQuery {
    pub common: QueryCommon,
    pub q: Option<String>,
}

impl Query for SearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(q) = &self.q {
            url.query_pairs_mut().append_pair("q", q);
        };
        self.common.add_to_url(&url)
    }
}

impl SearchQuery {
    pub fn with_q(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }
}
