pub mod config;
pub mod db;
pub mod error;
pub mod form;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod views;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::store::SubmissionStore;

pub fn build_app(config: Config, store: Option<Arc<dyn SubmissionStore>>) -> Router {
    if store.is_none() {
        tracing::warn!("No database configured; submissions will be refused");
    }

    let static_dir = ServeDir::new(&config.static_dir);
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { config, store });

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", static_dir)
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
