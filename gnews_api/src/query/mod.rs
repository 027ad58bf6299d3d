mod common;
pub use self::common::{Query, QueryCommon, MAX_PAGE_SIZE};

mod search;
pub use self::search::SearchQuery;

mod headlines;
pub use self::headlines::HeadlinesQuery;
