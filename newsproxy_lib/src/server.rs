//! Axum router for the proxy endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, Method};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::envelope::Envelope;
use crate::error::NewsProxyError;
use crate::proxy::{AllNewsParams, CountryParams, HeadlinesParams, NewsProxy};
use crate::transport::NewsTransport;

/// Query string as ordered pairs, so repeated keys never fail extraction.
type Pairs = Query<Vec<(String, String)>>;

/// Response body for the health endpoint.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Build the application router around a proxy.
///
/// Every proxy route answers with the envelope's status code and the
/// envelope as JSON body.
pub fn build_router<T>(proxy: NewsProxy<T>) -> Router
where
    T: NewsTransport + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/healthz", get(health_handler))
        .route("/all-news", get(all_news::<T>))
        .route("/top-headlines", get(top_headlines::<T>))
        .route("/country/:iso", get(country::<T>))
        .with_state(Arc::new(proxy))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Binds `config.address()` and serves the proxy until the process exits.
pub async fn serve(config: &ProxyConfig) -> Result<(), NewsProxyError> {
    let client = gnews_api::Client::with_base_url(&config.base_url, &config.api_key)?;
    let app = build_router(NewsProxy::new(client));
    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    tracing::info!("Server is running at {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn all_news<T: NewsTransport>(
    State(proxy): State<Arc<NewsProxy<T>>>,
    pairs: Option<Pairs>,
) -> Envelope {
    let Query(pairs) = pairs.unwrap_or_default();
    proxy.search_news(&AllNewsParams::from_pairs(&pairs)).await
}

async fn top_headlines<T: NewsTransport>(
    State(proxy): State<Arc<NewsProxy<T>>>,
    pairs: Option<Pairs>,
) -> Envelope {
    let Query(pairs) = pairs.unwrap_or_default();
    proxy.top_headlines(&HeadlinesParams::from_pairs(&pairs)).await
}

async fn country<T: NewsTransport>(
    State(proxy): State<Arc<NewsProxy<T>>>,
    Path(iso): Path<String>,
    pairs: Option<Pairs>,
) -> Envelope {
    let Query(pairs) = pairs.unwrap_or_default();
    proxy
        .headlines_by_country(&iso, &CountryParams::from_pairs(&pairs))
        .await
}
