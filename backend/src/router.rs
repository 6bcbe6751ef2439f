use axum::{
    http::{header, HeaderValue},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::compression::CompressionLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::SiteConfig;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Serves the built site. Paths that match no file get `index.html`, so
/// deep links land on the page instead of a 404.
pub fn build_router(config: &SiteConfig) -> Router {
    let index = config.site_dir.join("index.html");
    let site = ServeDir::new(&config.site_dir)
        .append_index_html_on_directories(true)
        .fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health))
        .fallback_service(site)
        .layer(CompressionLayer::new())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
