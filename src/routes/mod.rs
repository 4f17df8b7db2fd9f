pub mod charts;
pub mod statistics;
pub mod transactions;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(transactions::routes())
        .merge(statistics::routes())
        .merge(charts::routes())
}

/// The full application: report routes plus banner, health check and middleware.
pub fn app(state: AppState) -> Router {
    create_router()
        .route("/", get(|| async { "Sales Report API" }))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
