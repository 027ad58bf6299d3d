//! Library layer for newsproxy: response envelope, parameter coercion, the
//! proxy service and its HTTP router, and the paginated browsing session.
//!
//! Wraps the `gnews_api` crate. The proxy side is stateless; the browsing
//! side keeps one [`session::PageSession`] per client.

pub mod browser;
pub mod config;
pub mod envelope;
pub mod error;
pub mod pagination;
pub mod params;
pub mod proxy;
pub mod server;
pub mod session;
pub mod source;
pub mod transport;

pub use gnews_api;
pub use gnews_api::types;

pub use browser::NewsBrowser;
pub use config::{ConfigError, ProxyConfig};
pub use envelope::Envelope;
pub use error::NewsProxyError;
pub use pagination::PaginationState;
pub use params::NewsQuery;
pub use proxy::NewsProxy;
pub use session::{LoadState, NavigationError, PageSession};
pub use source::{ArticleSource, DirectSource, ProxySource, SourceError};
pub use transport::NewsTransport;
