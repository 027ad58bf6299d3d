mod article;
pub use self::article::{Article, ArticleList, Source};

mod error_body;
pub use self::error_body::ErrorBody;
